use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    settings::{
        domain::{
            model::{
                commands::{
                    upsert_employer_settings_command::UpsertEmployerSettingsCommand,
                    upsert_system_setting_command::UpsertSystemSettingCommand,
                },
                entities::{employer_settings::EmployerSettings, system_setting::SystemSetting},
                enums::settings_domain_error::SettingsDomainError,
            },
            services::settings_command_service::SettingsCommandService,
        },
        infrastructure::persistence::repositories::{
            employer_settings_repository::{EmployerSettingsRecord, EmployerSettingsRepository},
            system_setting_repository::{SystemSettingRecord, SystemSettingRepository},
        },
    },
    tenancy::{
        domain::{
            model::{
                entities::tenant_context::TenantContextProvider,
                enums::record_change_action::RecordChangeAction,
                events::record_change_audited_event::RecordChangeAuditedEvent,
            },
            services::write_interceptor::{WriteInterceptor, resolve_ownership},
        },
        infrastructure::persistence::repositories::change_log_repository::ChangeLogRepository,
    },
};

pub struct SettingsCommandServiceImpl {
    employer_settings_repository: Arc<dyn EmployerSettingsRepository>,
    system_setting_repository: Arc<dyn SystemSettingRepository>,
    change_log_repository: Arc<dyn ChangeLogRepository>,
}

impl SettingsCommandServiceImpl {
    pub fn new(
        employer_settings_repository: Arc<dyn EmployerSettingsRepository>,
        system_setting_repository: Arc<dyn SystemSettingRepository>,
        change_log_repository: Arc<dyn ChangeLogRepository>,
    ) -> Self {
        Self {
            employer_settings_repository,
            system_setting_repository,
            change_log_repository,
        }
    }
}

#[async_trait]
impl SettingsCommandService for SettingsCommandServiceImpl {
    async fn handle_upsert_employer_settings(
        &self,
        command: UpsertEmployerSettingsCommand,
    ) -> Result<EmployerSettings, SettingsDomainError> {
        let provider = TenantContextProvider::established(command.context().clone());
        let ownership = resolve_ownership(None, &provider)?;
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .employer_settings_repository
            .upsert(
                ownership,
                &interceptor,
                EmployerSettingsRecord {
                    default_pay_period_type: command.default_pay_period_type(),
                    default_currency: command.default_currency().to_string(),
                    time_zone: command.time_zone().to_string(),
                    fiscal_year_start_month: command.fiscal_year_start_month(),
                    allow_overtime: command.allow_overtime(),
                    overtime_multiplier_percent: command.overtime_multiplier_percent(),
                    enable_timesheets: command.enable_timesheets(),
                    require_time_approval: command.require_time_approval(),
                },
            )
            .await;

        let _ = self
            .change_log_repository
            .save_event(&RecordChangeAuditedEvent {
                employer_id: Some(command.context().employer_id().value()),
                entity_name: "employer_settings".to_string(),
                entity_id: command.context().employer_id().to_string(),
                action: RecordChangeAction::Updated,
                actor: command.context().actor().value().to_string(),
                success: result.is_ok(),
                details: result.as_ref().err().map(|e| e.to_string()),
                occurred_at: Utc::now(),
            })
            .await;

        result
    }

    async fn handle_upsert_system_setting(
        &self,
        command: UpsertSystemSettingCommand,
    ) -> Result<SystemSetting, SettingsDomainError> {
        let interceptor = WriteInterceptor::from_context(command.context());

        let result = self
            .system_setting_repository
            .upsert(
                &interceptor,
                SystemSettingRecord {
                    key: command.key().clone(),
                    value: command.value().to_string(),
                    description: command.description().map(str::to_string),
                },
            )
            .await;

        let _ = self
            .change_log_repository
            .save_event(&RecordChangeAuditedEvent {
                employer_id: None,
                entity_name: "system_setting".to_string(),
                entity_id: command.key().to_string(),
                action: RecordChangeAction::Updated,
                actor: command.context().actor().value().to_string(),
                success: result.is_ok(),
                details: result.as_ref().err().map(|e| e.to_string()),
                occurred_at: Utc::now(),
            })
            .await;

        result
    }
}
