use uuid::Uuid;

use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::enums::{
        employment_status::EmploymentStatus, workforce_domain_error::WorkforceDomainError,
    },
};

const MAX_PAGE_SIZE: i64 = 200;

pub struct ListEmployeesQueryParts {
    pub employment_status: Option<String>,
    pub department_id: Option<String>,
    pub include_deleted: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct ListEmployeesQuery {
    context: TenantContext,
    employment_status: Option<EmploymentStatus>,
    department_id: Option<Uuid>,
    include_deleted: bool,
    limit: i64,
    offset: i64,
}

impl ListEmployeesQuery {
    pub fn new(
        context: TenantContext,
        parts: ListEmployeesQueryParts,
    ) -> Result<Self, WorkforceDomainError> {
        let limit = parts.limit.unwrap_or(50);
        let offset = parts.offset.unwrap_or(0);
        if limit < 1 || limit > MAX_PAGE_SIZE || offset < 0 {
            return Err(WorkforceDomainError::InvalidPaging);
        }

        let employment_status = parts
            .employment_status
            .map(|value| EmploymentStatus::parse(&value))
            .transpose()?;

        let department_id = parts
            .department_id
            .map(|value| {
                Uuid::parse_str(value.trim()).map_err(|_| WorkforceDomainError::InvalidRecordId)
            })
            .transpose()?;

        Ok(Self {
            context,
            employment_status,
            department_id,
            include_deleted: parts.include_deleted,
            limit,
            offset,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn employment_status(&self) -> Option<EmploymentStatus> {
        self.employment_status
    }
    pub fn department_id(&self) -> Option<Uuid> {
        self.department_id
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
