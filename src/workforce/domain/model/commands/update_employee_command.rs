use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::enums::{
        employment_status::EmploymentStatus, workforce_domain_error::WorkforceDomainError,
    },
};

pub struct UpdateEmployeeCommandParts {
    pub employee_id: String,
    pub expected_row_version: i64,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department_id: Option<String>,
    pub employment_status: Option<String>,
    pub termination_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Patch-style update: only the fields present in the request change. The
/// expected row version makes the write conditional; a stale version is a
/// conflict for the caller to resolve.
#[derive(Clone, Debug)]
pub struct UpdateEmployeeCommand {
    context: TenantContext,
    employee_id: Uuid,
    expected_row_version: i64,
    phone: Option<String>,
    job_title: Option<String>,
    department_id: Option<Uuid>,
    employment_status: Option<EmploymentStatus>,
    termination_date: Option<NaiveDate>,
    is_active: Option<bool>,
}

impl UpdateEmployeeCommand {
    pub fn new(
        context: TenantContext,
        parts: UpdateEmployeeCommandParts,
    ) -> Result<Self, WorkforceDomainError> {
        let employee_id = Uuid::parse_str(parts.employee_id.trim())
            .map_err(|_| WorkforceDomainError::InvalidRecordId)?;

        let department_id = parts
            .department_id
            .map(|value| {
                Uuid::parse_str(value.trim()).map_err(|_| WorkforceDomainError::InvalidRecordId)
            })
            .transpose()?;

        let employment_status = parts
            .employment_status
            .map(|value| EmploymentStatus::parse(&value))
            .transpose()?;

        Ok(Self {
            context,
            employee_id,
            expected_row_version: parts.expected_row_version,
            phone: parts
                .phone
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            job_title: parts
                .job_title
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            department_id,
            employment_status,
            termination_date: parts.termination_date,
            is_active: parts.is_active,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn employee_id(&self) -> Uuid {
        self.employee_id
    }
    pub fn expected_row_version(&self) -> i64 {
        self.expected_row_version
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    pub fn department_id(&self) -> Option<Uuid> {
        self.department_id
    }
    pub fn employment_status(&self) -> Option<EmploymentStatus> {
        self.employment_status
    }
    pub fn termination_date(&self) -> Option<NaiveDate> {
        self.termination_date
    }
    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}
