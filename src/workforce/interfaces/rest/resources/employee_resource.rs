use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::workforce::domain::model::entities::employee::Employee;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmployeeResource {
    pub id: String,
    pub department_id: Option<String>,
    pub employee_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub employment_status: String,
    pub hire_date: NaiveDate,
    pub termination_date: Option<NaiveDate>,
    pub is_active: bool,
    pub row_version: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<Employee> for EmployeeResource {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            department_id: employee.department_id.map(|id| id.to_string()),
            employee_number: employee.employee_number.value().to_string(),
            first_name: employee.first_name,
            middle_name: employee.middle_name,
            last_name: employee.last_name,
            email: employee.email.value().to_string(),
            phone: employee.phone,
            job_title: employee.job_title,
            employment_type: employee.employment_type.as_str().to_string(),
            employment_status: employee.employment_status.as_str().to_string(),
            hire_date: employee.hire_date,
            termination_date: employee.termination_date,
            is_active: employee.is_active,
            row_version: employee.row_version,
            is_deleted: employee.audit.is_deleted,
            created_at: employee.audit.created_at,
            created_by: employee.audit.created_by.value().to_string(),
            modified_at: employee.audit.modified_at,
            modified_by: employee
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
