use std::sync::Mutex;

use async_trait::async_trait;
use payroll_axum_api::{
    settings::{
        domain::model::{
            entities::{employer_settings::EmployerSettings, system_setting::SystemSetting},
            enums::settings_domain_error::SettingsDomainError,
            value_objects::setting_key::SettingKey,
        },
        infrastructure::persistence::repositories::{
            employer_settings_repository::{EmployerSettingsRecord, EmployerSettingsRepository},
            system_setting_repository::{SystemSettingRecord, SystemSettingRepository},
        },
    },
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                events::record_change_audited_event::RecordChangeAuditedEvent,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            repositories::change_log_repository::ChangeLogRepository,
            scoped_query::{RowVisibility, TenantFilter},
        },
    },
};

fn visible(is_deleted: bool, visibility: RowVisibility) -> bool {
    visibility == RowVisibility::IncludeDeleted || !is_deleted
}

#[derive(Default)]
pub struct FakeEmployerSettingsRepository {
    state: Mutex<Vec<EmployerSettings>>,
}

impl FakeEmployerSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployerSettingsRepository for FakeEmployerSettingsRepository {
    async fn upsert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: EmployerSettingsRecord,
    ) -> Result<EmployerSettings, SettingsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if let Some(existing) = state
            .iter_mut()
            .find(|settings| settings.ownership.employer_id() == ownership.employer_id())
        {
            // Replacement keeps the creation pair, like the conflict arm of
            // the real upsert.
            existing.default_pay_period_type = record.default_pay_period_type;
            existing.default_currency = record.default_currency;
            existing.time_zone = record.time_zone;
            existing.fiscal_year_start_month = record.fiscal_year_start_month;
            existing.allow_overtime = record.allow_overtime;
            existing.overtime_multiplier_percent = record.overtime_multiplier_percent;
            existing.enable_timesheets = record.enable_timesheets;
            existing.require_time_approval = record.require_time_approval;
            existing.audit.is_deleted = false;
            interceptor.before_update(&mut existing.audit);
            return Ok(existing.clone());
        }

        let settings = EmployerSettings {
            ownership,
            default_pay_period_type: record.default_pay_period_type,
            default_currency: record.default_currency,
            time_zone: record.time_zone,
            fiscal_year_start_month: record.fiscal_year_start_month,
            allow_overtime: record.allow_overtime,
            overtime_multiplier_percent: record.overtime_multiplier_percent,
            enable_timesheets: record.enable_timesheets,
            require_time_approval: record.require_time_approval,
            audit: interceptor.before_insert(),
        };
        state.push(settings.clone());
        Ok(settings)
    }

    async fn find(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Option<EmployerSettings>, SettingsDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .find(|settings| {
                settings.ownership.employer_id() == filter.employer_id()
                    && visible(settings.audit.is_deleted, visibility)
            })
            .cloned())
    }
}

#[derive(Default)]
pub struct FakeSystemSettingRepository {
    state: Mutex<Vec<SystemSetting>>,
}

impl FakeSystemSettingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SystemSettingRepository for FakeSystemSettingRepository {
    async fn upsert(
        &self,
        interceptor: &WriteInterceptor,
        record: SystemSettingRecord,
    ) -> Result<SystemSetting, SettingsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if let Some(existing) = state.iter_mut().find(|setting| setting.key == record.key) {
            existing.value = record.value;
            existing.description = record.description;
            existing.audit.is_deleted = false;
            interceptor.before_update(&mut existing.audit);
            return Ok(existing.clone());
        }

        let setting = SystemSetting {
            key: record.key,
            value: record.value,
            description: record.description,
            audit: interceptor.before_insert(),
        };
        state.push(setting.clone());
        Ok(setting)
    }

    async fn list(
        &self,
        visibility: RowVisibility,
    ) -> Result<Vec<SystemSetting>, SettingsDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .filter(|setting| visible(setting.audit.is_deleted, visibility))
            .cloned()
            .collect())
    }

    async fn find_by_key(
        &self,
        key: &SettingKey,
        visibility: RowVisibility,
    ) -> Result<Option<SystemSetting>, SettingsDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .iter()
            .find(|setting| setting.key == *key && visible(setting.audit.is_deleted, visibility))
            .cloned())
    }
}

#[derive(Default)]
pub struct FakeChangeLogRepository {
    events: Mutex<Vec<RecordChangeAuditedEvent>>,
}

impl FakeChangeLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_events(&self) -> Vec<RecordChangeAuditedEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl ChangeLogRepository for FakeChangeLogRepository {
    async fn save_event(
        &self,
        event: &RecordChangeAuditedEvent,
    ) -> Result<(), TenancyDomainError> {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}
