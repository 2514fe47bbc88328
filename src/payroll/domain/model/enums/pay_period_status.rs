use crate::payroll::domain::model::enums::payroll_domain_error::PayrollDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayPeriodStatus {
    Open,
    Processing,
    Closed,
}

impl PayPeriodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriodStatus::Open => "open",
            PayPeriodStatus::Processing => "processing",
            PayPeriodStatus::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, PayrollDomainError> {
        match value.trim().to_lowercase().as_str() {
            "open" => Ok(PayPeriodStatus::Open),
            "processing" => Ok(PayPeriodStatus::Processing),
            "closed" => Ok(PayPeriodStatus::Closed),
            other => Err(PayrollDomainError::InvalidPayPeriodStatus(
                other.to_string(),
            )),
        }
    }
}
