use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    tenancy::{
        domain::{
            model::entities::audit_metadata::TenantOwnership,
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
    workforce::domain::model::{
        entities::employee::Employee,
        enums::{
            employment_status::EmploymentStatus, employment_type::EmploymentType,
            workforce_domain_error::WorkforceDomainError,
        },
        value_objects::{email_address::EmailAddress, employee_number::EmployeeNumber},
    },
};

#[derive(Clone, Debug)]
pub struct NewEmployeeRecord {
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
    pub department_id: Option<Uuid>,
}

/// Fields a patch may change; `None` leaves the column untouched.
#[derive(Clone, Debug, Default)]
pub struct EmployeeUpdateRecord {
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department_id: Option<Uuid>,
    pub employment_status: Option<EmploymentStatus>,
    pub termination_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ListEmployeesCriteria {
    pub employment_status: Option<EmploymentStatus>,
    pub department_id: Option<Uuid>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewEmployeeRecord,
    ) -> Result<Employee, WorkforceDomainError>;

    async fn find_by_id(
        &self,
        filter: &TenantFilter,
        employee_id: Uuid,
        visibility: RowVisibility,
    ) -> Result<Option<Employee>, WorkforceDomainError>;

    async fn list(
        &self,
        filter: &TenantFilter,
        criteria: ListEmployeesCriteria,
        visibility: RowVisibility,
    ) -> Result<Vec<Employee>, WorkforceDomainError>;

    /// Conditional on the row version read by the caller; a stale version
    /// fails with a conflict and is never retried here.
    async fn update(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        employee_id: Uuid,
        expected_row_version: i64,
        record: EmployeeUpdateRecord,
    ) -> Result<Employee, WorkforceDomainError>;

    async fn soft_delete(
        &self,
        filter: &TenantFilter,
        interceptor: &WriteInterceptor,
        employee_id: Uuid,
    ) -> Result<(), WorkforceDomainError>;
}
