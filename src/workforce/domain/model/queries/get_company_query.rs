use crate::{
    tenancy::domain::model::{
        entities::tenant_context::TenantContext, value_objects::company_id::CompanyId,
    },
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct GetCompanyQuery {
    context: TenantContext,
    company_id: CompanyId,
}

impl GetCompanyQuery {
    pub fn new(context: TenantContext, company_id: String) -> Result<Self, WorkforceDomainError> {
        Ok(Self {
            context,
            company_id: CompanyId::new(company_id)?,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }
}
