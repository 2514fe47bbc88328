use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::tenancy::{
    application::query_services::employer_query_service_impl::EmployerQueryServiceImpl,
    infrastructure::persistence::repositories::postgres::sqlx_employer_repository_impl::SqlxEmployerRepositoryImpl,
    interfaces::rest::controllers::employer_rest_controller::{
        EmployerRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_tenancy_router(pool: PgPool) -> Router {
    let repository = Arc::new(SqlxEmployerRepositoryImpl::new(pool));
    let query_service = Arc::new(EmployerQueryServiceImpl::new(repository));

    router(EmployerRestControllerState { query_service })
}
