use uuid::Uuid;

use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError,
};

#[derive(Clone, Debug)]
pub struct GetEmployeeQuery {
    context: TenantContext,
    employee_id: Uuid,
    include_deleted: bool,
}

impl GetEmployeeQuery {
    pub fn new(
        context: TenantContext,
        employee_id: String,
        include_deleted: bool,
    ) -> Result<Self, WorkforceDomainError> {
        let employee_id = Uuid::parse_str(employee_id.trim())
            .map_err(|_| WorkforceDomainError::InvalidRecordId)?;

        Ok(Self {
            context,
            employee_id,
            include_deleted,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn employee_id(&self) -> Uuid {
        self.employee_id
    }
    pub fn include_deleted(&self) -> bool {
        self.include_deleted
    }
}
