use uuid::Uuid;

use crate::{
    payroll::domain::model::{
        enums::{
            payment_method::PaymentMethod, payment_status::PaymentStatus,
            payroll_domain_error::PayrollDomainError,
        },
        value_objects::money_cents::MoneyCents,
    },
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

pub struct CreatePayrollTransactionCommandParts {
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
    pub notes: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreatePayrollTransactionCommand {
    context: TenantContext,
    employee_id: Uuid,
    pay_period_id: Uuid,
    gross_pay: MoneyCents,
    net_pay: MoneyCents,
    regular_minutes: i32,
    overtime_minutes: i32,
    regular_pay: MoneyCents,
    overtime_pay: MoneyCents,
    total_deductions: MoneyCents,
    total_taxes: MoneyCents,
    payment_method: PaymentMethod,
    notes: Option<String>,
}

impl CreatePayrollTransactionCommand {
    pub fn new(
        context: TenantContext,
        parts: CreatePayrollTransactionCommandParts,
    ) -> Result<Self, PayrollDomainError> {
        if parts.regular_minutes < 0 || parts.overtime_minutes < 0 {
            return Err(PayrollDomainError::InvalidMinutes);
        }

        Ok(Self {
            context,
            employee_id: Uuid::parse_str(parts.employee_id.trim())
                .map_err(|_| PayrollDomainError::InvalidRecordId)?,
            pay_period_id: Uuid::parse_str(parts.pay_period_id.trim())
                .map_err(|_| PayrollDomainError::InvalidRecordId)?,
            gross_pay: MoneyCents::new(parts.gross_pay_cents)?,
            net_pay: MoneyCents::new(parts.net_pay_cents)?,
            regular_minutes: parts.regular_minutes,
            overtime_minutes: parts.overtime_minutes,
            regular_pay: MoneyCents::new(parts.regular_pay_cents)?,
            overtime_pay: MoneyCents::new(parts.overtime_pay_cents)?,
            total_deductions: MoneyCents::new(parts.total_deductions_cents)?,
            total_taxes: MoneyCents::new(parts.total_taxes_cents)?,
            payment_method: PaymentMethod::parse(&parts.payment_method)?,
            notes: parts
                .notes
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn employee_id(&self) -> Uuid {
        self.employee_id
    }
    pub fn pay_period_id(&self) -> Uuid {
        self.pay_period_id
    }
    pub fn gross_pay(&self) -> MoneyCents {
        self.gross_pay
    }
    pub fn net_pay(&self) -> MoneyCents {
        self.net_pay
    }
    pub fn regular_minutes(&self) -> i32 {
        self.regular_minutes
    }
    pub fn overtime_minutes(&self) -> i32 {
        self.overtime_minutes
    }
    pub fn regular_pay(&self) -> MoneyCents {
        self.regular_pay
    }
    pub fn overtime_pay(&self) -> MoneyCents {
        self.overtime_pay
    }
    pub fn total_deductions(&self) -> MoneyCents {
        self.total_deductions
    }
    pub fn total_taxes(&self) -> MoneyCents {
        self.total_taxes
    }
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
    pub fn initial_status(&self) -> PaymentStatus {
        PaymentStatus::Pending
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
