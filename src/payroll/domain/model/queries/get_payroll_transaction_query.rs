use uuid::Uuid;

use crate::{
    payroll::domain::model::enums::payroll_domain_error::PayrollDomainError,
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

#[derive(Clone, Debug)]
pub struct GetPayrollTransactionQuery {
    context: TenantContext,
    transaction_id: Uuid,
    include_deleted: bool,
}

impl GetPayrollTransactionQuery {
    pub fn new(
        context: TenantContext,
        transaction_id: String,
        include_deleted: bool,
    ) -> Result<Self, PayrollDomainError> {
        Ok(Self {
            context,
            transaction_id: Uuid::parse_str(transaction_id.trim())
                .map_err(|_| PayrollDomainError::InvalidRecordId)?,
            include_deleted,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn transaction_id(&self) -> Uuid {
        self.transaction_id
    }
    pub fn include_deleted(&self) -> bool {
        self.include_deleted
    }
}
