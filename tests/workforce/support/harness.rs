use std::sync::Arc;

use payroll_axum_api::workforce::application::{
    command_services::workforce_command_service_impl::WorkforceCommandServiceImpl,
    query_services::workforce_query_service_impl::WorkforceQueryServiceImpl,
};

use super::fakes::{
    FakeChangeLogRepository, FakeCompanyRepository, FakeDepartmentRepository,
    FakeEmployeeRepository,
};

/// Command and query services wired over the same fake stores, so round
/// trips (create, delete, re-query) observe one consistent state.
pub struct WorkforceHarness {
    pub company_repository: Arc<FakeCompanyRepository>,
    pub department_repository: Arc<FakeDepartmentRepository>,
    pub employee_repository: Arc<FakeEmployeeRepository>,
    pub change_log: Arc<FakeChangeLogRepository>,
    pub command_service: WorkforceCommandServiceImpl,
    pub query_service: WorkforceQueryServiceImpl,
}

pub fn create_workforce_harness() -> WorkforceHarness {
    let company_repository = Arc::new(FakeCompanyRepository::new());
    let department_repository = Arc::new(FakeDepartmentRepository::new());
    let employee_repository = Arc::new(FakeEmployeeRepository::new());
    let change_log = Arc::new(FakeChangeLogRepository::new());

    let command_service = WorkforceCommandServiceImpl::new(
        company_repository.clone(),
        department_repository.clone(),
        employee_repository.clone(),
        change_log.clone(),
    );
    let query_service = WorkforceQueryServiceImpl::new(
        company_repository.clone(),
        department_repository.clone(),
        employee_repository.clone(),
    );

    WorkforceHarness {
        company_repository,
        department_repository,
        employee_repository,
        change_log,
        command_service,
        query_service,
    }
}
