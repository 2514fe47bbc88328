use crate::payroll::domain::model::enums::payroll_domain_error::PayrollDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Voided,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Voided => "voided",
        }
    }

    pub fn parse(value: &str) -> Result<Self, PayrollDomainError> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "voided" => Ok(PaymentStatus::Voided),
            other => Err(PayrollDomainError::InvalidPaymentStatus(other.to_string())),
        }
    }
}
