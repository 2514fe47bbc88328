use uuid::Uuid;

use crate::{
    payroll::domain::model::enums::payroll_domain_error::PayrollDomainError,
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

const MAX_PAGE_SIZE: i64 = 200;

pub struct ListPayrollTransactionsQueryParts {
    pub pay_period_id: Option<String>,
    pub employee_id: Option<String>,
    pub include_deleted: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct ListPayrollTransactionsQuery {
    context: TenantContext,
    pay_period_id: Option<Uuid>,
    employee_id: Option<Uuid>,
    include_deleted: bool,
    limit: i64,
    offset: i64,
}

impl ListPayrollTransactionsQuery {
    pub fn new(
        context: TenantContext,
        parts: ListPayrollTransactionsQueryParts,
    ) -> Result<Self, PayrollDomainError> {
        let limit = parts.limit.unwrap_or(50);
        let offset = parts.offset.unwrap_or(0);
        if limit < 1 || limit > MAX_PAGE_SIZE || offset < 0 {
            return Err(PayrollDomainError::InvalidPaging);
        }

        let pay_period_id = parts
            .pay_period_id
            .map(|value| {
                Uuid::parse_str(value.trim()).map_err(|_| PayrollDomainError::InvalidRecordId)
            })
            .transpose()?;

        let employee_id = parts
            .employee_id
            .map(|value| {
                Uuid::parse_str(value.trim()).map_err(|_| PayrollDomainError::InvalidRecordId)
            })
            .transpose()?;

        Ok(Self {
            context,
            pay_period_id,
            employee_id,
            include_deleted: parts.include_deleted,
            limit,
            offset,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn pay_period_id(&self) -> Option<Uuid> {
        self.pay_period_id
    }
    pub fn employee_id(&self) -> Option<Uuid> {
        self.employee_id
    }
    pub fn include_deleted(&self) -> bool {
        self.include_deleted
    }
    pub fn limit(&self) -> i64 {
        self.limit
    }
    pub fn offset(&self) -> i64 {
        self.offset
    }
}
