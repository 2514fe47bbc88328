use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    payroll::domain::model::enums::pay_period_status::PayPeriodStatus,
    tenancy::domain::model::{
        entities::audit_metadata::{AuditMetadata, TenantOwnership},
        scoping::{TenantScoped, TenantScopeStrategy},
    },
};

#[derive(Clone, Debug)]
pub struct PayPeriod {
    pub id: Uuid,
    pub ownership: TenantOwnership,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub pay_date: NaiveDate,
    pub status: PayPeriodStatus,
    pub audit: AuditMetadata,
}

impl TenantScoped for PayPeriod {
    const TABLE: &'static str = "pay_periods";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::Direct {
            tenant_column: "employer_id",
            sub_scope_column: None,
        }
    }
}
