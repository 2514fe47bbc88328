use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::payroll::domain::model::entities::payroll_transaction::PayrollTransaction;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PayrollTransactionResource {
    pub id: String,
    pub employee_id: String,
    pub pay_period_id: String,
    pub gross_pay_cents: i64,
    pub net_pay_cents: i64,
    pub regular_minutes: i32,
    pub overtime_minutes: i32,
    pub regular_pay_cents: i64,
    pub overtime_pay_cents: i64,
    pub total_deductions_cents: i64,
    pub total_taxes_cents: i64,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub row_version: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<PayrollTransaction> for PayrollTransactionResource {
    fn from(transaction: PayrollTransaction) -> Self {
        Self {
            id: transaction.id.to_string(),
            employee_id: transaction.employee_id.to_string(),
            pay_period_id: transaction.pay_period_id.to_string(),
            gross_pay_cents: transaction.gross_pay.value(),
            net_pay_cents: transaction.net_pay.value(),
            regular_minutes: transaction.regular_minutes,
            overtime_minutes: transaction.overtime_minutes,
            regular_pay_cents: transaction.regular_pay.value(),
            overtime_pay_cents: transaction.overtime_pay.value(),
            total_deductions_cents: transaction.total_deductions.value(),
            total_taxes_cents: transaction.total_taxes.value(),
            payment_method: transaction.payment_method.as_str().to_string(),
            payment_status: transaction.payment_status.as_str().to_string(),
            payment_date: transaction.payment_date,
            notes: transaction.notes,
            row_version: transaction.row_version,
            is_deleted: transaction.audit.is_deleted,
            created_at: transaction.audit.created_at,
            created_by: transaction.audit.created_by.value().to_string(),
            modified_at: transaction.audit.modified_at,
            modified_by: transaction
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
