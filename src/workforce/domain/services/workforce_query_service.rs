use async_trait::async_trait;

use crate::workforce::domain::model::{
    entities::{company::Company, department::Department, employee::Employee},
    enums::workforce_domain_error::WorkforceDomainError,
    queries::{
        get_company_query::GetCompanyQuery, get_department_query::GetDepartmentQuery,
        get_employee_query::GetEmployeeQuery, list_companies_query::ListCompaniesQuery,
        list_departments_query::ListDepartmentsQuery, list_employees_query::ListEmployeesQuery,
    },
};

#[async_trait]
pub trait WorkforceQueryService: Send + Sync {
    async fn handle_list_companies(
        &self,
        query: ListCompaniesQuery,
    ) -> Result<Vec<Company>, WorkforceDomainError>;

    async fn handle_get_company(
        &self,
        query: GetCompanyQuery,
    ) -> Result<Company, WorkforceDomainError>;

    async fn handle_list_departments(
        &self,
        query: ListDepartmentsQuery,
    ) -> Result<Vec<Department>, WorkforceDomainError>;

    async fn handle_get_department(
        &self,
        query: GetDepartmentQuery,
    ) -> Result<Department, WorkforceDomainError>;

    async fn handle_list_employees(
        &self,
        query: ListEmployeesQuery,
    ) -> Result<Vec<Employee>, WorkforceDomainError>;

    async fn handle_get_employee(
        &self,
        query: GetEmployeeQuery,
    ) -> Result<Employee, WorkforceDomainError>;
}
