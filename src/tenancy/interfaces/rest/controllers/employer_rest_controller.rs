use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
};

use crate::tenancy::{
    domain::{
        model::{
            enums::tenancy_domain_error::TenancyDomainError,
            queries::get_employer_query::GetEmployerQuery,
        },
        services::employer_query_service::EmployerQueryService,
    },
    interfaces::rest::{
        auth_headers::establish_request_context,
        error_mapping::tenancy_status_code,
        resources::{
            employer_resource::EmployerResource,
            tenancy_error_response_resource::TenancyErrorResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct EmployerRestControllerState {
    pub query_service: Arc<dyn EmployerQueryService>,
}

pub fn router(state: EmployerRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/employer", get(get_current_employer))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/employer",
    tag = "tenancy",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id"),
        ("x-company-id" = Option<String>, Header, description = "Optional company sub-scope")
    ),
    responses(
        (status = 200, description = "Current employer profile", body = EmployerResource),
        (status = 401, description = "Missing or invalid identity headers", body = TenancyErrorResponseResource),
        (status = 404, description = "Employer not found", body = TenancyErrorResponseResource),
        (status = 500, description = "Internal error", body = TenancyErrorResponseResource)
    )
)]
pub async fn get_current_employer(
    State(state): State<EmployerRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<EmployerResource>, (StatusCode, Json<TenancyErrorResponseResource>)> {
    let provider = establish_request_context(&headers).map_err(map_domain_error)?;
    let context = provider.resolve().map_err(map_domain_error)?.clone();

    let employer = state
        .query_service
        .handle_get_current_employer(GetEmployerQuery::new(context))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EmployerResource::from(employer)))
}

pub fn map_domain_error(
    error: TenancyDomainError,
) -> (StatusCode, Json<TenancyErrorResponseResource>) {
    (
        tenancy_status_code(&error),
        Json(TenancyErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
