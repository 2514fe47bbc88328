use std::fmt;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Acting principal recorded in audit columns. The well-known system actor is
/// used by seeding and maintenance tooling so automated writes stay
/// distinguishable from real users.
pub const SYSTEM_ACTOR: &str = "system";

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 128 {
            return Err(TenancyDomainError::InvalidActorId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn system() -> Self {
        Self(SYSTEM_ACTOR.to_string())
    }

    pub fn is_system(&self) -> bool {
        self.0 == SYSTEM_ACTOR
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
