use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreatePayrollTransactionRequestResource {
    pub employee_id: String,

    pub pay_period_id: String,

    /// All amounts in integer cents.
    #[validate(range(min = 0))]
    pub gross_pay_cents: i64,

    #[validate(range(min = 0))]
    pub net_pay_cents: i64,

    #[validate(range(min = 0))]
    pub regular_minutes: i32,

    #[validate(range(min = 0))]
    pub overtime_minutes: i32,

    #[validate(range(min = 0))]
    pub regular_pay_cents: i64,

    #[validate(range(min = 0))]
    pub overtime_pay_cents: i64,

    #[validate(range(min = 0))]
    pub total_deductions_cents: i64,

    #[validate(range(min = 0))]
    pub total_taxes_cents: i64,

    /// One of `direct_deposit`, `check`, `cash`.
    pub payment_method: String,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}
