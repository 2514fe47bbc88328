use crate::{
    tenancy::domain::model::{
        entities::tenant_context::TenantContext, value_objects::company_id::CompanyId,
    },
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct ListDepartmentsQuery {
    context: TenantContext,
    company_id: Option<CompanyId>,
}

impl ListDepartmentsQuery {
    pub fn new(
        context: TenantContext,
        company_id: Option<String>,
    ) -> Result<Self, WorkforceDomainError> {
        Ok(Self {
            context,
            company_id: company_id.map(CompanyId::new).transpose()?,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }
}
