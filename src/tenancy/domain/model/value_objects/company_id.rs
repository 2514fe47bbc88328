use std::fmt;

use uuid::Uuid;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Optional sub-scope inside a tenant: one company of the employer group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CompanyId(Uuid);

impl CompanyId {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let uuid =
            Uuid::parse_str(value.trim()).map_err(|_| TenancyDomainError::InvalidCompanyId)?;
        Ok(Self(uuid))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
