use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    payroll::domain::model::enums::{
        payment_status::PaymentStatus, payroll_domain_error::PayrollDomainError,
    },
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

pub struct UpdatePayrollTransactionCommandParts {
    pub transaction_id: String,
    pub expected_row_version: i64,
    pub payment_status: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug)]
pub struct UpdatePayrollTransactionCommand {
    context: TenantContext,
    transaction_id: Uuid,
    expected_row_version: i64,
    payment_status: Option<PaymentStatus>,
    payment_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl UpdatePayrollTransactionCommand {
    pub fn new(
        context: TenantContext,
        parts: UpdatePayrollTransactionCommandParts,
    ) -> Result<Self, PayrollDomainError> {
        Ok(Self {
            context,
            transaction_id: Uuid::parse_str(parts.transaction_id.trim())
                .map_err(|_| PayrollDomainError::InvalidRecordId)?,
            expected_row_version: parts.expected_row_version,
            payment_status: parts
                .payment_status
                .map(|value| PaymentStatus::parse(&value))
                .transpose()?,
            payment_date: parts.payment_date,
            notes: parts
                .notes
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn transaction_id(&self) -> Uuid {
        self.transaction_id
    }
    pub fn expected_row_version(&self) -> i64 {
        self.expected_row_version
    }
    pub fn payment_status(&self) -> Option<PaymentStatus> {
        self.payment_status
    }
    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
