use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct CreateCompanyCommand {
    context: TenantContext,
    name: String,
    registration_number: Option<String>,
}

impl CreateCompanyCommand {
    pub fn new(
        context: TenantContext,
        name: String,
        registration_number: Option<String>,
    ) -> Result<Self, WorkforceDomainError> {
        let name = name.trim().to_string();
        if name.is_empty() || name.len() > 120 {
            return Err(WorkforceDomainError::InvalidCompanyName);
        }

        Ok(Self {
            context,
            name,
            registration_number: registration_number
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn registration_number(&self) -> Option<&str> {
        self.registration_number.as_deref()
    }
}
