use std::fmt;

use crate::payroll::domain::model::enums::payroll_domain_error::PayrollDomainError;

/// Stored monetary amount in integer cents. These records hold figures
/// produced elsewhere; no arithmetic happens on them here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub fn new(value: i64) -> Result<Self, PayrollDomainError> {
        if value < 0 {
            return Err(PayrollDomainError::InvalidAmount);
        }
        Ok(Self(value))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
