use async_trait::async_trait;

use crate::{
    settings::domain::model::{
        entities::employer_settings::EmployerSettings,
        enums::{pay_period_type::PayPeriodType, settings_domain_error::SettingsDomainError},
    },
    tenancy::{
        domain::{
            model::entities::audit_metadata::TenantOwnership,
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
};

#[derive(Clone, Debug)]
pub struct EmployerSettingsRecord {
    pub default_pay_period_type: PayPeriodType,
    pub default_currency: String,
    pub time_zone: String,
    pub fiscal_year_start_month: i32,
    pub allow_overtime: bool,
    pub overtime_multiplier_percent: i32,
    pub enable_timesheets: bool,
    pub require_time_approval: bool,
}

#[async_trait]
pub trait EmployerSettingsRepository: Send + Sync {
    /// Inserts or replaces the tenant's settings row. The creation audit
    /// pair survives an upsert of an existing row; only the modification
    /// pair moves.
    async fn upsert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: EmployerSettingsRecord,
    ) -> Result<EmployerSettings, SettingsDomainError>;

    async fn find(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Option<EmployerSettings>, SettingsDomainError>;
}
