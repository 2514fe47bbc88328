use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, put},
};
use validator::Validate;

use crate::{
    settings::{
        domain::{
            model::{
                commands::{
                    upsert_employer_settings_command::{
                        UpsertEmployerSettingsCommand, UpsertEmployerSettingsCommandParts,
                    },
                    upsert_system_setting_command::UpsertSystemSettingCommand,
                },
                enums::settings_domain_error::SettingsDomainError,
                queries::{
                    get_employer_settings_query::GetEmployerSettingsQuery,
                    get_system_setting_query::GetSystemSettingQuery,
                    list_system_settings_query::ListSystemSettingsQuery,
                },
            },
            services::{
                settings_command_service::SettingsCommandService,
                settings_query_service::SettingsQueryService,
            },
        },
        interfaces::rest::resources::{
            employer_settings_resource::EmployerSettingsResource,
            settings_error_response_resource::SettingsErrorResponseResource,
            system_setting_resource::SystemSettingResource,
            upsert_employer_settings_request_resource::UpsertEmployerSettingsRequestResource,
            upsert_system_setting_request_resource::UpsertSystemSettingRequestResource,
        },
    },
    tenancy::{
        domain::model::entities::tenant_context::TenantContext,
        interfaces::rest::{
            auth_headers::establish_request_context, error_mapping::tenancy_status_code,
        },
    },
};

type ErrorResponse = (StatusCode, Json<SettingsErrorResponseResource>);

#[derive(Clone)]
pub struct SettingsRestControllerState {
    pub command_service: Arc<dyn SettingsCommandService>,
    pub query_service: Arc<dyn SettingsQueryService>,
}

pub fn router(state: SettingsRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/employer-settings", get(get_employer_settings))
        .route("/api/v1/employer-settings", put(upsert_employer_settings))
        .route("/api/v1/system-settings", get(list_system_settings))
        .route("/api/v1/system-settings/:setting_key", get(get_system_setting))
        .route(
            "/api/v1/system-settings/:setting_key",
            put(upsert_system_setting),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/employer-settings",
    tag = "settings",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Settings of the caller's employer", body = EmployerSettingsResource),
        (status = 404, description = "No settings stored yet", body = SettingsErrorResponseResource)
    )
)]
pub async fn get_employer_settings(
    State(state): State<SettingsRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<EmployerSettingsResource>, ErrorResponse> {
    let context = request_context(&headers)?;

    let settings = state
        .query_service
        .handle_get_employer_settings(GetEmployerSettingsQuery::new(context))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EmployerSettingsResource::from(settings)))
}

#[utoipa::path(
    put,
    path = "/api/v1/employer-settings",
    tag = "settings",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = UpsertEmployerSettingsRequestResource,
    responses(
        (status = 200, description = "Settings stored", body = EmployerSettingsResource),
        (status = 400, description = "Invalid settings payload", body = SettingsErrorResponseResource)
    )
)]
pub async fn upsert_employer_settings(
    State(state): State<SettingsRestControllerState>,
    headers: HeaderMap,
    Json(body): Json<UpsertEmployerSettingsRequestResource>,
) -> Result<Json<EmployerSettingsResource>, ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = UpsertEmployerSettingsCommand::new(
        context,
        UpsertEmployerSettingsCommandParts {
            default_pay_period_type: body.default_pay_period_type,
            default_currency: body.default_currency,
            time_zone: body.time_zone,
            fiscal_year_start_month: body.fiscal_year_start_month,
            allow_overtime: body.allow_overtime,
            overtime_multiplier_percent: body.overtime_multiplier_percent,
            enable_timesheets: body.enable_timesheets,
            require_time_approval: body.require_time_approval,
        },
    )
    .map_err(map_domain_error)?;

    let settings = state
        .command_service
        .handle_upsert_employer_settings(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EmployerSettingsResource::from(settings)))
}

#[utoipa::path(
    get,
    path = "/api/v1/system-settings",
    tag = "settings",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Platform-wide settings, visible to all tenants", body = [SystemSettingResource])
    )
)]
pub async fn list_system_settings(
    State(state): State<SettingsRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SystemSettingResource>>, ErrorResponse> {
    let context = request_context(&headers)?;

    let settings = state
        .query_service
        .handle_list_system_settings(ListSystemSettingsQuery::new(context))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        settings
            .into_iter()
            .map(SystemSettingResource::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/system-settings/{setting_key}",
    tag = "settings",
    params(
        ("setting_key" = String, Path, description = "Setting key"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "System setting", body = SystemSettingResource),
        (status = 404, description = "Setting not found", body = SettingsErrorResponseResource)
    )
)]
pub async fn get_system_setting(
    State(state): State<SettingsRestControllerState>,
    headers: HeaderMap,
    Path(setting_key): Path<String>,
) -> Result<Json<SystemSettingResource>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = GetSystemSettingQuery::new(context, setting_key).map_err(map_domain_error)?;
    let setting = state
        .query_service
        .handle_get_system_setting(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SystemSettingResource::from(setting)))
}

#[utoipa::path(
    put,
    path = "/api/v1/system-settings/{setting_key}",
    tag = "settings",
    params(
        ("setting_key" = String, Path, description = "Setting key"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = UpsertSystemSettingRequestResource,
    responses(
        (status = 200, description = "System setting stored", body = SystemSettingResource),
        (status = 400, description = "Invalid setting payload", body = SettingsErrorResponseResource)
    )
)]
pub async fn upsert_system_setting(
    State(state): State<SettingsRestControllerState>,
    headers: HeaderMap,
    Path(setting_key): Path<String>,
    Json(body): Json<UpsertSystemSettingRequestResource>,
) -> Result<Json<SystemSettingResource>, ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = UpsertSystemSettingCommand::new(context, setting_key, body.value, body.description)
        .map_err(map_domain_error)?;

    let setting = state
        .command_service
        .handle_upsert_system_setting(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SystemSettingResource::from(setting)))
}

fn request_context(headers: &HeaderMap) -> Result<TenantContext, ErrorResponse> {
    let provider = establish_request_context(headers)
        .map_err(|error| map_domain_error(SettingsDomainError::Tenancy(error)))?;
    let context = provider
        .resolve()
        .map_err(|error| map_domain_error(SettingsDomainError::Tenancy(error)))?;
    Ok(context.clone())
}

fn validate_body<T: Validate>(body: &T) -> Result<(), ErrorResponse> {
    body.validate().map_err(|error| {
        (
            StatusCode::BAD_REQUEST,
            Json(SettingsErrorResponseResource {
                message: error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: SettingsDomainError) -> ErrorResponse {
    let status = match &error {
        SettingsDomainError::InvalidSettingKey
        | SettingsDomainError::InvalidSettingValue
        | SettingsDomainError::InvalidCurrency
        | SettingsDomainError::InvalidFiscalYearStartMonth
        | SettingsDomainError::InvalidOvertimeMultiplier
        | SettingsDomainError::InvalidPayPeriodType(_)
        | SettingsDomainError::InvalidTimeZone => StatusCode::BAD_REQUEST,
        SettingsDomainError::Tenancy(inner) => tenancy_status_code(inner),
    };

    (
        status,
        Json(SettingsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
