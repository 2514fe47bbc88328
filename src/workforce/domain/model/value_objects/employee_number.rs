use std::fmt;

use regex::Regex;

use crate::workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError;

/// Employer-assigned badge number, unique per tenant. Normalized to upper
/// case.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EmployeeNumber(String);

impl EmployeeNumber {
    pub fn new(value: String) -> Result<Self, WorkforceDomainError> {
        let normalized = value.trim().to_uppercase();
        let regex = Regex::new(r"^[A-Z0-9][A-Z0-9\-]{1,31}$").expect("valid regex");

        if !regex.is_match(&normalized) {
            return Err(WorkforceDomainError::InvalidEmployeeNumber);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
