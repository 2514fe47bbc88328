use uuid::Uuid;

use crate::{
    payroll::domain::model::enums::payroll_domain_error::PayrollDomainError,
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

#[derive(Clone, Debug)]
pub struct DeletePayrollTransactionCommand {
    context: TenantContext,
    transaction_id: Uuid,
}

impl DeletePayrollTransactionCommand {
    pub fn new(context: TenantContext, transaction_id: String) -> Result<Self, PayrollDomainError> {
        Ok(Self {
            context,
            transaction_id: Uuid::parse_str(transaction_id.trim())
                .map_err(|_| PayrollDomainError::InvalidRecordId)?,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn transaction_id(&self) -> Uuid {
        self.transaction_id
    }
}
