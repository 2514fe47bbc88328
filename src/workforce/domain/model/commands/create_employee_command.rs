use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    tenancy::domain::model::entities::tenant_context::TenantContext,
    workforce::domain::model::{
        enums::{
            employment_status::EmploymentStatus, employment_type::EmploymentType,
            workforce_domain_error::WorkforceDomainError,
        },
        value_objects::{email_address::EmailAddress, employee_number::EmployeeNumber},
    },
};

pub struct CreateEmployeeCommandParts {
    pub employee_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub hire_date: NaiveDate,
    pub department_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateEmployeeCommand {
    context: TenantContext,
    employee_number: EmployeeNumber,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    email: EmailAddress,
    phone: Option<String>,
    job_title: Option<String>,
    employment_type: EmploymentType,
    hire_date: NaiveDate,
    department_id: Option<Uuid>,
}

impl CreateEmployeeCommand {
    pub fn new(
        context: TenantContext,
        parts: CreateEmployeeCommandParts,
    ) -> Result<Self, WorkforceDomainError> {
        let first_name = validate_name(parts.first_name)?;
        let last_name = validate_name(parts.last_name)?;
        let middle_name = parts
            .middle_name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let department_id = parts
            .department_id
            .map(|value| {
                Uuid::parse_str(value.trim()).map_err(|_| WorkforceDomainError::InvalidRecordId)
            })
            .transpose()?;

        Ok(Self {
            context,
            employee_number: EmployeeNumber::new(parts.employee_number)?,
            first_name,
            middle_name,
            last_name,
            email: EmailAddress::new(parts.email)?,
            phone: parts
                .phone
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            job_title: parts
                .job_title
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            employment_type: EmploymentType::parse(&parts.employment_type)?,
            hire_date: parts.hire_date,
            department_id,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn employee_number(&self) -> &EmployeeNumber {
        &self.employee_number
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    pub fn employment_type(&self) -> EmploymentType {
        self.employment_type
    }
    pub fn initial_status(&self) -> EmploymentStatus {
        EmploymentStatus::Active
    }
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }
    pub fn department_id(&self) -> Option<Uuid> {
        self.department_id
    }
}

fn validate_name(value: String) -> Result<String, WorkforceDomainError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() || trimmed.len() > 80 {
        return Err(WorkforceDomainError::InvalidEmployeeName);
    }
    Ok(trimmed)
}
