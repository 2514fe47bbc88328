use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    tenancy::domain::model::{
        entities::audit_metadata::{AuditMetadata, TenantOwnership},
        scoping::{TenantScoped, TenantScopeStrategy},
    },
    workforce::domain::model::{
        enums::{employment_status::EmploymentStatus, employment_type::EmploymentType},
        value_objects::{email_address::EmailAddress, employee_number::EmployeeNumber},
    },
};

#[derive(Clone, Debug)]
pub struct Employee {
    pub id: Uuid,
    pub ownership: TenantOwnership,
    pub department_id: Option<Uuid>,
    pub employee_number: EmployeeNumber,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub employment_type: EmploymentType,
    pub employment_status: EmploymentStatus,
    pub hire_date: NaiveDate,
    pub termination_date: Option<NaiveDate>,
    pub is_active: bool,
    pub row_version: i64,
    pub audit: AuditMetadata,
}

impl TenantScoped for Employee {
    const TABLE: &'static str = "employees";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::Direct {
            tenant_column: "employer_id",
            sub_scope_column: None,
        }
    }
}
