use std::fmt;

use regex::Regex;

use crate::workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: String) -> Result<Self, WorkforceDomainError> {
        let normalized = value.trim().to_lowercase();
        let regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex");

        if normalized.len() > 254 || !regex.is_match(&normalized) {
            return Err(WorkforceDomainError::InvalidEmailAddress);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
