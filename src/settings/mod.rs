use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    settings::{
        application::{
            command_services::settings_command_service_impl::SettingsCommandServiceImpl,
            query_services::settings_query_service_impl::SettingsQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_employer_settings_repository_impl::SqlxEmployerSettingsRepositoryImpl,
            sqlx_system_setting_repository_impl::SqlxSystemSettingRepositoryImpl,
        },
        interfaces::rest::controllers::settings_rest_controller::{
            SettingsRestControllerState, router,
        },
    },
    tenancy::infrastructure::persistence::repositories::postgres::sqlx_change_log_repository_impl::SqlxChangeLogRepositoryImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_settings_router(pool: PgPool) -> Router {
    let employer_settings_repository =
        Arc::new(SqlxEmployerSettingsRepositoryImpl::new(pool.clone()));
    let system_setting_repository = Arc::new(SqlxSystemSettingRepositoryImpl::new(pool.clone()));
    let change_log_repository = Arc::new(SqlxChangeLogRepositoryImpl::new(pool));

    let command_service = Arc::new(SettingsCommandServiceImpl::new(
        employer_settings_repository.clone(),
        system_setting_repository.clone(),
        change_log_repository,
    ));
    let query_service = Arc::new(SettingsQueryServiceImpl::new(
        employer_settings_repository,
        system_setting_repository,
    ));

    router(SettingsRestControllerState {
        command_service,
        query_service,
    })
}
