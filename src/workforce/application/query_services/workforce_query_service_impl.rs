use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    tenancy::{
        domain::model::enums::tenancy_domain_error::TenancyDomainError,
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
    workforce::{
        domain::{
            model::{
                entities::{company::Company, department::Department, employee::Employee},
                enums::workforce_domain_error::WorkforceDomainError,
                queries::{
                    get_company_query::GetCompanyQuery,
                    get_department_query::GetDepartmentQuery,
                    get_employee_query::GetEmployeeQuery,
                    list_companies_query::ListCompaniesQuery,
                    list_departments_query::ListDepartmentsQuery,
                    list_employees_query::ListEmployeesQuery,
                },
            },
            services::workforce_query_service::WorkforceQueryService,
        },
        infrastructure::persistence::repositories::{
            company_repository::CompanyRepository,
            department_repository::DepartmentRepository,
            employee_repository::{EmployeeRepository, ListEmployeesCriteria},
        },
    },
};

pub struct WorkforceQueryServiceImpl {
    company_repository: Arc<dyn CompanyRepository>,
    department_repository: Arc<dyn DepartmentRepository>,
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl WorkforceQueryServiceImpl {
    pub fn new(
        company_repository: Arc<dyn CompanyRepository>,
        department_repository: Arc<dyn DepartmentRepository>,
        employee_repository: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            company_repository,
            department_repository,
            employee_repository,
        }
    }
}

fn visibility_for(include_deleted: bool) -> RowVisibility {
    if include_deleted {
        RowVisibility::IncludeDeleted
    } else {
        RowVisibility::ActiveOnly
    }
}

#[async_trait]
impl WorkforceQueryService for WorkforceQueryServiceImpl {
    async fn handle_list_companies(
        &self,
        query: ListCompaniesQuery,
    ) -> Result<Vec<Company>, WorkforceDomainError> {
        let filter = TenantFilter::from_context(query.context());
        self.company_repository
            .list(&filter, RowVisibility::ActiveOnly)
            .await
    }

    async fn handle_get_company(
        &self,
        query: GetCompanyQuery,
    ) -> Result<Company, WorkforceDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.company_repository
            .find_by_id(&filter, query.company_id(), RowVisibility::ActiveOnly)
            .await?
            .ok_or_else(|| TenancyDomainError::RecordNotFound.into())
    }

    async fn handle_list_departments(
        &self,
        query: ListDepartmentsQuery,
    ) -> Result<Vec<Department>, WorkforceDomainError> {
        let filter = TenantFilter::from_context(query.context());
        self.department_repository
            .list(&filter, query.company_id(), RowVisibility::ActiveOnly)
            .await
    }

    async fn handle_get_department(
        &self,
        query: GetDepartmentQuery,
    ) -> Result<Department, WorkforceDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.department_repository
            .find_by_id(&filter, query.department_id(), RowVisibility::ActiveOnly)
            .await?
            .ok_or_else(|| TenancyDomainError::RecordNotFound.into())
    }

    async fn handle_list_employees(
        &self,
        query: ListEmployeesQuery,
    ) -> Result<Vec<Employee>, WorkforceDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.employee_repository
            .list(
                &filter,
                ListEmployeesCriteria {
                    employment_status: query.employment_status(),
                    department_id: query.department_id(),
                    limit: query.limit(),
                    offset: query.offset(),
                },
                visibility_for(query.include_deleted()),
            )
            .await
    }

    async fn handle_get_employee(
        &self,
        query: GetEmployeeQuery,
    ) -> Result<Employee, WorkforceDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.employee_repository
            .find_by_id(
                &filter,
                query.employee_id(),
                visibility_for(query.include_deleted()),
            )
            .await?
            .ok_or_else(|| TenancyDomainError::RecordNotFound.into())
    }
}
