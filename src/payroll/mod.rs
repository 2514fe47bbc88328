use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    payroll::{
        application::{
            command_services::payroll_command_service_impl::PayrollCommandServiceImpl,
            query_services::payroll_query_service_impl::PayrollQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_pay_period_repository_impl::SqlxPayPeriodRepositoryImpl,
            sqlx_payroll_transaction_repository_impl::SqlxPayrollTransactionRepositoryImpl,
        },
        interfaces::rest::controllers::payroll_rest_controller::{
            PayrollRestControllerState, router,
        },
    },
    tenancy::infrastructure::persistence::repositories::postgres::sqlx_change_log_repository_impl::SqlxChangeLogRepositoryImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_payroll_router(pool: PgPool) -> Router {
    let pay_period_repository = Arc::new(SqlxPayPeriodRepositoryImpl::new(pool.clone()));
    let transaction_repository = Arc::new(SqlxPayrollTransactionRepositoryImpl::new(pool.clone()));
    let change_log_repository = Arc::new(SqlxChangeLogRepositoryImpl::new(pool));

    let command_service = Arc::new(PayrollCommandServiceImpl::new(
        pay_period_repository.clone(),
        transaction_repository.clone(),
        change_log_repository,
    ));
    let query_service = Arc::new(PayrollQueryServiceImpl::new(
        pay_period_repository,
        transaction_repository,
    ));

    router(PayrollRestControllerState {
        command_service,
        query_service,
    })
}
