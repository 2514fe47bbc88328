use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    tenancy::infrastructure::persistence::repositories::postgres::sqlx_change_log_repository_impl::SqlxChangeLogRepositoryImpl,
    workforce::{
        application::{
            command_services::workforce_command_service_impl::WorkforceCommandServiceImpl,
            query_services::workforce_query_service_impl::WorkforceQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_company_repository_impl::SqlxCompanyRepositoryImpl,
            sqlx_department_repository_impl::SqlxDepartmentRepositoryImpl,
            sqlx_employee_repository_impl::SqlxEmployeeRepositoryImpl,
        },
        interfaces::rest::controllers::workforce_rest_controller::{
            WorkforceRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_workforce_router(pool: PgPool) -> Router {
    let company_repository = Arc::new(SqlxCompanyRepositoryImpl::new(pool.clone()));
    let department_repository = Arc::new(SqlxDepartmentRepositoryImpl::new(pool.clone()));
    let employee_repository = Arc::new(SqlxEmployeeRepositoryImpl::new(pool.clone()));
    let change_log_repository = Arc::new(SqlxChangeLogRepositoryImpl::new(pool));

    let command_service = Arc::new(WorkforceCommandServiceImpl::new(
        company_repository.clone(),
        department_repository.clone(),
        employee_repository.clone(),
        change_log_repository,
    ));
    let query_service = Arc::new(WorkforceQueryServiceImpl::new(
        company_repository,
        department_repository,
        employee_repository,
    ));

    router(WorkforceRestControllerState {
        command_service,
        query_service,
    })
}
