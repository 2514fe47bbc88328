use crate::{
    tenancy::domain::model::{
        entities::tenant_context::TenantContext, value_objects::company_id::CompanyId,
    },
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct CreateDepartmentCommand {
    context: TenantContext,
    company_id: CompanyId,
    name: String,
    description: Option<String>,
}

impl CreateDepartmentCommand {
    pub fn new(
        context: TenantContext,
        company_id: String,
        name: String,
        description: Option<String>,
    ) -> Result<Self, WorkforceDomainError> {
        let name = name.trim().to_string();
        if name.is_empty() || name.len() > 120 {
            return Err(WorkforceDomainError::InvalidDepartmentName);
        }

        Ok(Self {
            context,
            company_id: CompanyId::new(company_id)?,
            name,
            description: description
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
