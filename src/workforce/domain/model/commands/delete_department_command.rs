use uuid::Uuid;

use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct DeleteDepartmentCommand {
    context: TenantContext,
    department_id: Uuid,
}

impl DeleteDepartmentCommand {
    pub fn new(
        context: TenantContext,
        department_id: String,
    ) -> Result<Self, WorkforceDomainError> {
        let department_id = Uuid::parse_str(department_id.trim())
            .map_err(|_| WorkforceDomainError::InvalidRecordId)?;

        Ok(Self {
            context,
            department_id,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn department_id(&self) -> Uuid {
        self.department_id
    }
}
