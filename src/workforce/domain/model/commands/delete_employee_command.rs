use uuid::Uuid;

use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct DeleteEmployeeCommand {
    context: TenantContext,
    employee_id: Uuid,
}

impl DeleteEmployeeCommand {
    pub fn new(context: TenantContext, employee_id: String) -> Result<Self, WorkforceDomainError> {
        let employee_id = Uuid::parse_str(employee_id.trim())
            .map_err(|_| WorkforceDomainError::InvalidRecordId)?;

        Ok(Self {
            context,
            employee_id,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn employee_id(&self) -> Uuid {
        self.employee_id
    }
}
