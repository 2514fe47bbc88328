use std::fmt;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Tenant key. Every tenant-scoped row resolves to exactly one of these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EmployerId(i64);

impl EmployerId {
    pub fn new(value: i64) -> Result<Self, TenancyDomainError> {
        if value <= 0 {
            return Err(TenancyDomainError::InvalidEmployerId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
