use crate::{
    settings::domain::model::enums::pay_period_type::PayPeriodType,
    tenancy::domain::model::{
        entities::audit_metadata::{AuditMetadata, TenantOwnership},
        scoping::{TenantScoped, TenantScopeStrategy},
    },
};

/// One settings row per employer. Keyed by the tenant column itself.
#[derive(Clone, Debug)]
pub struct EmployerSettings {
    pub ownership: TenantOwnership,
    pub default_pay_period_type: PayPeriodType,
    pub default_currency: String,
    pub time_zone: String,
    pub fiscal_year_start_month: i32,
    pub allow_overtime: bool,
    pub overtime_multiplier_percent: i32,
    pub enable_timesheets: bool,
    pub require_time_approval: bool,
    pub audit: AuditMetadata,
}

impl TenantScoped for EmployerSettings {
    const TABLE: &'static str = "employer_settings";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::Direct {
            tenant_column: "employer_id",
            sub_scope_column: None,
        }
    }
}
