use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    payroll::{
        domain::{
            model::{
                commands::{
                    create_pay_period_command::CreatePayPeriodCommand,
                    create_payroll_transaction_command::{
                        CreatePayrollTransactionCommand, CreatePayrollTransactionCommandParts,
                    },
                    delete_payroll_transaction_command::DeletePayrollTransactionCommand,
                    update_payroll_transaction_command::{
                        UpdatePayrollTransactionCommand, UpdatePayrollTransactionCommandParts,
                    },
                },
                enums::payroll_domain_error::PayrollDomainError,
                queries::{
                    get_payroll_transaction_query::GetPayrollTransactionQuery,
                    list_pay_periods_query::ListPayPeriodsQuery,
                    list_payroll_transactions_query::{
                        ListPayrollTransactionsQuery, ListPayrollTransactionsQueryParts,
                    },
                },
            },
            services::{
                payroll_command_service::PayrollCommandService,
                payroll_query_service::PayrollQueryService,
            },
        },
        interfaces::rest::resources::{
            create_pay_period_request_resource::CreatePayPeriodRequestResource,
            create_payroll_transaction_request_resource::CreatePayrollTransactionRequestResource,
            list_payroll_transactions_query_resource::ListPayrollTransactionsQueryResource,
            pay_period_resource::PayPeriodResource,
            payroll_error_response_resource::PayrollErrorResponseResource,
            payroll_transaction_resource::PayrollTransactionResource,
            update_payroll_transaction_request_resource::UpdatePayrollTransactionRequestResource,
        },
    },
    tenancy::{
        domain::model::entities::tenant_context::TenantContext,
        interfaces::rest::{
            auth_headers::establish_request_context, error_mapping::tenancy_status_code,
        },
    },
    workforce::interfaces::rest::resources::include_deleted_query_resource::IncludeDeletedQueryResource,
};

type ErrorResponse = (StatusCode, Json<PayrollErrorResponseResource>);

#[derive(Clone)]
pub struct PayrollRestControllerState {
    pub command_service: Arc<dyn PayrollCommandService>,
    pub query_service: Arc<dyn PayrollQueryService>,
}

pub fn router(state: PayrollRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/pay-periods", post(create_pay_period))
        .route("/api/v1/pay-periods", get(list_pay_periods))
        .route("/api/v1/payroll-transactions", post(create_transaction))
        .route("/api/v1/payroll-transactions", get(list_transactions))
        .route(
            "/api/v1/payroll-transactions/:transaction_id",
            get(get_transaction),
        )
        .route(
            "/api/v1/payroll-transactions/:transaction_id",
            patch(update_transaction),
        )
        .route(
            "/api/v1/payroll-transactions/:transaction_id",
            delete(delete_transaction),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/pay-periods",
    tag = "payroll",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = CreatePayPeriodRequestResource,
    responses(
        (status = 201, description = "Pay period created", body = PayPeriodResource),
        (status = 400, description = "Invalid period range", body = PayrollErrorResponseResource),
        (status = 409, description = "Duplicate pay period", body = PayrollErrorResponseResource)
    )
)]
pub async fn create_pay_period(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
    Json(body): Json<CreatePayPeriodRequestResource>,
) -> Result<(StatusCode, Json<PayPeriodResource>), ErrorResponse> {
    let context = request_context(&headers)?;

    let command =
        CreatePayPeriodCommand::new(context, body.period_start, body.period_end, body.pay_date)
            .map_err(map_domain_error)?;

    let period = state
        .command_service
        .handle_create_pay_period(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(PayPeriodResource::from(period))))
}

#[utoipa::path(
    get,
    path = "/api/v1/pay-periods",
    tag = "payroll",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Pay periods of the caller's employer", body = [PayPeriodResource])
    )
)]
pub async fn list_pay_periods(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PayPeriodResource>>, ErrorResponse> {
    let context = request_context(&headers)?;

    let periods = state
        .query_service
        .handle_list_pay_periods(ListPayPeriodsQuery::new(context))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        periods.into_iter().map(PayPeriodResource::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/payroll-transactions",
    tag = "payroll",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = CreatePayrollTransactionRequestResource,
    responses(
        (status = 201, description = "Payroll transaction created", body = PayrollTransactionResource),
        (status = 403, description = "Employee or pay period belongs to another tenant", body = PayrollErrorResponseResource),
        (status = 409, description = "Transaction already exists for this employee and period", body = PayrollErrorResponseResource)
    )
)]
pub async fn create_transaction(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
    Json(body): Json<CreatePayrollTransactionRequestResource>,
) -> Result<(StatusCode, Json<PayrollTransactionResource>), ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = CreatePayrollTransactionCommand::new(
        context,
        CreatePayrollTransactionCommandParts {
            employee_id: body.employee_id,
            pay_period_id: body.pay_period_id,
            gross_pay_cents: body.gross_pay_cents,
            net_pay_cents: body.net_pay_cents,
            regular_minutes: body.regular_minutes,
            overtime_minutes: body.overtime_minutes,
            regular_pay_cents: body.regular_pay_cents,
            overtime_pay_cents: body.overtime_pay_cents,
            total_deductions_cents: body.total_deductions_cents,
            total_taxes_cents: body.total_taxes_cents,
            payment_method: body.payment_method,
            notes: body.notes,
        },
    )
    .map_err(map_domain_error)?;

    let transaction = state
        .command_service
        .handle_create_transaction(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(PayrollTransactionResource::from(transaction)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/payroll-transactions",
    tag = "payroll",
    params(
        ListPayrollTransactionsQueryResource,
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Payroll transactions of the caller's employer", body = [PayrollTransactionResource])
    )
)]
pub async fn list_transactions(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListPayrollTransactionsQueryResource>,
) -> Result<Json<Vec<PayrollTransactionResource>>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = ListPayrollTransactionsQuery::new(
        context,
        ListPayrollTransactionsQueryParts {
            pay_period_id: params.pay_period_id,
            employee_id: params.employee_id,
            include_deleted: params.include_deleted.unwrap_or(false),
            limit: params.limit,
            offset: params.offset,
        },
    )
    .map_err(map_domain_error)?;

    let transactions = state
        .query_service
        .handle_list_transactions(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        transactions
            .into_iter()
            .map(PayrollTransactionResource::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/payroll-transactions/{transaction_id}",
    tag = "payroll",
    params(
        ("transaction_id" = String, Path, description = "Transaction id"),
        IncludeDeletedQueryResource,
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Payroll transaction", body = PayrollTransactionResource),
        (status = 404, description = "Transaction not found", body = PayrollErrorResponseResource)
    )
)]
pub async fn get_transaction(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
    Path(transaction_id): Path<String>,
    Query(params): Query<IncludeDeletedQueryResource>,
) -> Result<Json<PayrollTransactionResource>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = GetPayrollTransactionQuery::new(
        context,
        transaction_id,
        params.include_deleted.unwrap_or(false),
    )
    .map_err(map_domain_error)?;

    let transaction = state
        .query_service
        .handle_get_transaction(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(PayrollTransactionResource::from(transaction)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/payroll-transactions/{transaction_id}",
    tag = "payroll",
    params(
        ("transaction_id" = String, Path, description = "Transaction id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = UpdatePayrollTransactionRequestResource,
    responses(
        (status = 200, description = "Payroll transaction updated", body = PayrollTransactionResource),
        (status = 404, description = "Transaction not found", body = PayrollErrorResponseResource),
        (status = 409, description = "Row version conflict, re-fetch and retry", body = PayrollErrorResponseResource)
    )
)]
pub async fn update_transaction(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
    Path(transaction_id): Path<String>,
    Json(body): Json<UpdatePayrollTransactionRequestResource>,
) -> Result<Json<PayrollTransactionResource>, ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = UpdatePayrollTransactionCommand::new(
        context,
        UpdatePayrollTransactionCommandParts {
            transaction_id,
            expected_row_version: body.expected_row_version,
            payment_status: body.payment_status,
            payment_date: body.payment_date,
            notes: body.notes,
        },
    )
    .map_err(map_domain_error)?;

    let transaction = state
        .command_service
        .handle_update_transaction(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(PayrollTransactionResource::from(transaction)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/payroll-transactions/{transaction_id}",
    tag = "payroll",
    params(
        ("transaction_id" = String, Path, description = "Transaction id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 204, description = "Payroll transaction soft-deleted"),
        (status = 404, description = "Transaction not found", body = PayrollErrorResponseResource)
    )
)]
pub async fn delete_transaction(
    State(state): State<PayrollRestControllerState>,
    headers: HeaderMap,
    Path(transaction_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let context = request_context(&headers)?;

    let command =
        DeletePayrollTransactionCommand::new(context, transaction_id).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete_transaction(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn request_context(headers: &HeaderMap) -> Result<TenantContext, ErrorResponse> {
    let provider = establish_request_context(headers)
        .map_err(|error| map_domain_error(PayrollDomainError::Tenancy(error)))?;
    let context = provider
        .resolve()
        .map_err(|error| map_domain_error(PayrollDomainError::Tenancy(error)))?;
    Ok(context.clone())
}

fn validate_body<T: Validate>(body: &T) -> Result<(), ErrorResponse> {
    body.validate().map_err(|error| {
        (
            StatusCode::BAD_REQUEST,
            Json(PayrollErrorResponseResource {
                message: error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: PayrollDomainError) -> ErrorResponse {
    let status = match &error {
        PayrollDomainError::InvalidPayPeriodRange
        | PayrollDomainError::InvalidAmount
        | PayrollDomainError::InvalidMinutes
        | PayrollDomainError::InvalidPayPeriodStatus(_)
        | PayrollDomainError::InvalidPaymentStatus(_)
        | PayrollDomainError::InvalidPaymentMethod(_)
        | PayrollDomainError::InvalidRecordId
        | PayrollDomainError::InvalidPaging => StatusCode::BAD_REQUEST,
        PayrollDomainError::Tenancy(inner) => tenancy_status_code(inner),
    };

    (
        status,
        Json(PayrollErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
