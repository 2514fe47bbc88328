use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    payroll::domain::model::{
        enums::{payment_method::PaymentMethod, payment_status::PaymentStatus},
        value_objects::money_cents::MoneyCents,
    },
    tenancy::domain::model::{
        entities::audit_metadata::{AuditMetadata, TenantOwnership},
        scoping::{TenantScoped, TenantScopeStrategy},
    },
};

/// Pay stub figures for one employee in one pay period. A data container:
/// the amounts arrive computed.
#[derive(Clone, Debug)]
pub struct PayrollTransaction {
    pub id: Uuid,
    pub ownership: TenantOwnership,
    pub employee_id: Uuid,
    pub pay_period_id: Uuid,
    pub gross_pay: MoneyCents,
    pub net_pay: MoneyCents,
    pub regular_minutes: i32,
    pub overtime_minutes: i32,
    pub regular_pay: MoneyCents,
    pub overtime_pay: MoneyCents,
    pub total_deductions: MoneyCents,
    pub total_taxes: MoneyCents,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub row_version: i64,
    pub audit: AuditMetadata,
}

impl TenantScoped for PayrollTransaction {
    const TABLE: &'static str = "payroll_transactions";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::Direct {
            tenant_column: "employer_id",
            sub_scope_column: None,
        }
    }
}
