use crate::payroll::domain::model::enums::payroll_domain_error::PayrollDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentMethod {
    DirectDeposit,
    Check,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::DirectDeposit => "direct_deposit",
            PaymentMethod::Check => "check",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn parse(value: &str) -> Result<Self, PayrollDomainError> {
        match value.trim().to_lowercase().as_str() {
            "direct_deposit" => Ok(PaymentMethod::DirectDeposit),
            "check" => Ok(PaymentMethod::Check),
            "cash" => Ok(PaymentMethod::Cash),
            other => Err(PayrollDomainError::InvalidPaymentMethod(other.to_string())),
        }
    }
}
