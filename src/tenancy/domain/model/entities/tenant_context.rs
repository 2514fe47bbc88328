use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError,
    value_objects::{actor_id::ActorId, company_id::CompanyId, employer_id::EmployerId},
};

/// Ambient identity of one logical operation: the tenant every query is
/// narrowed to, an optional company sub-scope, and the acting principal.
/// Immutable; threaded explicitly through commands and queries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TenantContext {
    employer_id: EmployerId,
    company_id: Option<CompanyId>,
    actor: ActorId,
}

impl TenantContext {
    pub fn new(employer_id: EmployerId, company_id: Option<CompanyId>, actor: ActorId) -> Self {
        Self {
            employer_id,
            company_id,
            actor,
        }
    }

    pub fn employer_id(&self) -> EmployerId {
        self.employer_id
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }
}

/// Holds the context for exactly one operation scope (one request, one job
/// run, one test case). Allocated per scope and discarded with it; sharing an
/// instance across concurrent operations is the bug class `establish` guards
/// against.
#[derive(Debug, Default)]
pub struct TenantContextProvider {
    current: Option<TenantContext>,
}

impl TenantContextProvider {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Provider with the context already established, for the request path
    /// where identity is known up front.
    pub fn established(context: TenantContext) -> Self {
        Self {
            current: Some(context),
        }
    }

    /// Sets the context once at the start of the operation. Re-establishing
    /// the identical context is a no-op; a conflicting value means the scope
    /// is being reused across operations and fails hard.
    pub fn establish(&mut self, context: TenantContext) -> Result<(), TenancyDomainError> {
        match &self.current {
            None => {
                self.current = Some(context);
                Ok(())
            }
            Some(existing) if *existing == context => Ok(()),
            Some(_) => Err(TenancyDomainError::ContextReassigned),
        }
    }

    /// Fails closed: callers get an error, never an unfiltered default.
    pub fn resolve(&self) -> Result<&TenantContext, TenancyDomainError> {
        self.current
            .as_ref()
            .ok_or(TenancyDomainError::ContextNotSet)
    }
}
