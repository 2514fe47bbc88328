use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    tenancy::{
        domain::model::entities::tenant_context::TenantContext,
        interfaces::rest::{
            auth_headers::establish_request_context, error_mapping::tenancy_status_code,
        },
    },
    workforce::{
        domain::{
            model::{
                commands::{
                    create_company_command::CreateCompanyCommand,
                    create_department_command::CreateDepartmentCommand,
                    create_employee_command::{CreateEmployeeCommand, CreateEmployeeCommandParts},
                    delete_company_command::DeleteCompanyCommand,
                    delete_department_command::DeleteDepartmentCommand,
                    delete_employee_command::DeleteEmployeeCommand,
                    update_employee_command::{UpdateEmployeeCommand, UpdateEmployeeCommandParts},
                },
                enums::workforce_domain_error::WorkforceDomainError,
                queries::{
                    get_company_query::GetCompanyQuery,
                    get_department_query::GetDepartmentQuery,
                    get_employee_query::GetEmployeeQuery,
                    list_companies_query::ListCompaniesQuery,
                    list_departments_query::ListDepartmentsQuery,
                    list_employees_query::{ListEmployeesQuery, ListEmployeesQueryParts},
                },
            },
            services::{
                workforce_command_service::WorkforceCommandService,
                workforce_query_service::WorkforceQueryService,
            },
        },
        interfaces::rest::resources::{
            company_resource::CompanyResource,
            create_company_request_resource::CreateCompanyRequestResource,
            create_department_request_resource::CreateDepartmentRequestResource,
            create_employee_request_resource::CreateEmployeeRequestResource,
            department_resource::DepartmentResource,
            employee_resource::EmployeeResource,
            include_deleted_query_resource::IncludeDeletedQueryResource,
            list_departments_query_resource::ListDepartmentsQueryResource,
            list_employees_query_resource::ListEmployeesQueryResource,
            update_employee_request_resource::UpdateEmployeeRequestResource,
            workforce_error_response_resource::WorkforceErrorResponseResource,
        },
    },
};

type ErrorResponse = (StatusCode, Json<WorkforceErrorResponseResource>);

#[derive(Clone)]
pub struct WorkforceRestControllerState {
    pub command_service: Arc<dyn WorkforceCommandService>,
    pub query_service: Arc<dyn WorkforceQueryService>,
}

pub fn router(state: WorkforceRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/companies", post(create_company))
        .route("/api/v1/companies", get(list_companies))
        .route("/api/v1/companies/:company_id", get(get_company))
        .route("/api/v1/companies/:company_id", delete(delete_company))
        .route("/api/v1/departments", post(create_department))
        .route("/api/v1/departments", get(list_departments))
        .route("/api/v1/departments/:department_id", get(get_department))
        .route(
            "/api/v1/departments/:department_id",
            delete(delete_department),
        )
        .route("/api/v1/employees", post(create_employee))
        .route("/api/v1/employees", get(list_employees))
        .route("/api/v1/employees/:employee_id", get(get_employee))
        .route("/api/v1/employees/:employee_id", patch(update_employee))
        .route("/api/v1/employees/:employee_id", delete(delete_employee))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/companies",
    tag = "workforce",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = CreateCompanyRequestResource,
    responses(
        (status = 201, description = "Company created", body = CompanyResource),
        (status = 400, description = "Invalid payload", body = WorkforceErrorResponseResource),
        (status = 401, description = "Missing or invalid identity headers", body = WorkforceErrorResponseResource),
        (status = 409, description = "Duplicate company name", body = WorkforceErrorResponseResource)
    )
)]
pub async fn create_company(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Json(body): Json<CreateCompanyRequestResource>,
) -> Result<(StatusCode, Json<CompanyResource>), ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = CreateCompanyCommand::new(context, body.name, body.registration_number)
        .map_err(map_domain_error)?;

    let company = state
        .command_service
        .handle_create_company(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(CompanyResource::from(company))))
}

#[utoipa::path(
    get,
    path = "/api/v1/companies",
    tag = "workforce",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id"),
        ("x-company-id" = Option<String>, Header, description = "Optional company sub-scope")
    ),
    responses(
        (status = 200, description = "Companies of the caller's employer", body = [CompanyResource]),
        (status = 401, description = "Missing or invalid identity headers", body = WorkforceErrorResponseResource)
    )
)]
pub async fn list_companies(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<CompanyResource>>, ErrorResponse> {
    let context = request_context(&headers)?;

    let companies = state
        .query_service
        .handle_list_companies(ListCompaniesQuery::new(context))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        companies.into_iter().map(CompanyResource::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/companies/{company_id}",
    tag = "workforce",
    params(
        ("company_id" = String, Path, description = "Company id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Company", body = CompanyResource),
        (status = 404, description = "Company not found", body = WorkforceErrorResponseResource)
    )
)]
pub async fn get_company(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(company_id): Path<String>,
) -> Result<Json<CompanyResource>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = GetCompanyQuery::new(context, company_id).map_err(map_domain_error)?;
    let company = state
        .query_service
        .handle_get_company(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CompanyResource::from(company)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/companies/{company_id}",
    tag = "workforce",
    params(
        ("company_id" = String, Path, description = "Company id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 204, description = "Company soft-deleted"),
        (status = 404, description = "Company not found", body = WorkforceErrorResponseResource)
    )
)]
pub async fn delete_company(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(company_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let context = request_context(&headers)?;

    let command = DeleteCompanyCommand::new(context, company_id).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete_company(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/departments",
    tag = "workforce",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = CreateDepartmentRequestResource,
    responses(
        (status = 201, description = "Department created", body = DepartmentResource),
        (status = 403, description = "Parent company belongs to another tenant", body = WorkforceErrorResponseResource),
        (status = 409, description = "Duplicate department name", body = WorkforceErrorResponseResource)
    )
)]
pub async fn create_department(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Json(body): Json<CreateDepartmentRequestResource>,
) -> Result<(StatusCode, Json<DepartmentResource>), ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command =
        CreateDepartmentCommand::new(context, body.company_id, body.name, body.description)
            .map_err(map_domain_error)?;

    let department = state
        .command_service
        .handle_create_department(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(DepartmentResource::from(department)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/departments",
    tag = "workforce",
    params(
        ListDepartmentsQueryResource,
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id"),
        ("x-company-id" = Option<String>, Header, description = "Optional company sub-scope")
    ),
    responses(
        (status = 200, description = "Departments visible to the caller", body = [DepartmentResource])
    )
)]
pub async fn list_departments(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListDepartmentsQueryResource>,
) -> Result<Json<Vec<DepartmentResource>>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = ListDepartmentsQuery::new(context, params.company_id).map_err(map_domain_error)?;
    let departments = state
        .query_service
        .handle_list_departments(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        departments
            .into_iter()
            .map(DepartmentResource::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/departments/{department_id}",
    tag = "workforce",
    params(
        ("department_id" = String, Path, description = "Department id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Department", body = DepartmentResource),
        (status = 404, description = "Department not found", body = WorkforceErrorResponseResource)
    )
)]
pub async fn get_department(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(department_id): Path<String>,
) -> Result<Json<DepartmentResource>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = GetDepartmentQuery::new(context, department_id).map_err(map_domain_error)?;
    let department = state
        .query_service
        .handle_get_department(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DepartmentResource::from(department)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/departments/{department_id}",
    tag = "workforce",
    params(
        ("department_id" = String, Path, description = "Department id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 204, description = "Department soft-deleted"),
        (status = 404, description = "Department not found", body = WorkforceErrorResponseResource)
    )
)]
pub async fn delete_department(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(department_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let context = request_context(&headers)?;

    let command = DeleteDepartmentCommand::new(context, department_id).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete_department(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "workforce",
    params(
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = CreateEmployeeRequestResource,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResource),
        (status = 400, description = "Invalid payload", body = WorkforceErrorResponseResource),
        (status = 403, description = "Department belongs to another tenant", body = WorkforceErrorResponseResource),
        (status = 409, description = "Duplicate employee number or email", body = WorkforceErrorResponseResource)
    )
)]
pub async fn create_employee(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Json(body): Json<CreateEmployeeRequestResource>,
) -> Result<(StatusCode, Json<EmployeeResource>), ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = CreateEmployeeCommand::new(
        context,
        CreateEmployeeCommandParts {
            employee_number: body.employee_number,
            first_name: body.first_name,
            middle_name: body.middle_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            job_title: body.job_title,
            employment_type: body.employment_type,
            hire_date: body.hire_date,
            department_id: body.department_id,
        },
    )
    .map_err(map_domain_error)?;

    let employee = state
        .command_service
        .handle_create_employee(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(EmployeeResource::from(employee))))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "workforce",
    params(
        ListEmployeesQueryResource,
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Employees of the caller's employer", body = [EmployeeResource]),
        (status = 400, description = "Invalid query parameters", body = WorkforceErrorResponseResource)
    )
)]
pub async fn list_employees(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListEmployeesQueryResource>,
) -> Result<Json<Vec<EmployeeResource>>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = ListEmployeesQuery::new(
        context,
        ListEmployeesQueryParts {
            employment_status: params.employment_status,
            department_id: params.department_id,
            include_deleted: params.include_deleted.unwrap_or(false),
            limit: params.limit,
            offset: params.offset,
        },
    )
    .map_err(map_domain_error)?;

    let employees = state
        .query_service
        .handle_list_employees(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        employees.into_iter().map(EmployeeResource::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}",
    tag = "workforce",
    params(
        ("employee_id" = String, Path, description = "Employee id"),
        IncludeDeletedQueryResource,
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 200, description = "Employee", body = EmployeeResource),
        (status = 404, description = "Employee not found", body = WorkforceErrorResponseResource)
    )
)]
pub async fn get_employee(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(employee_id): Path<String>,
    Query(params): Query<IncludeDeletedQueryResource>,
) -> Result<Json<EmployeeResource>, ErrorResponse> {
    let context = request_context(&headers)?;

    let query = GetEmployeeQuery::new(
        context,
        employee_id,
        params.include_deleted.unwrap_or(false),
    )
    .map_err(map_domain_error)?;

    let employee = state
        .query_service
        .handle_get_employee(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EmployeeResource::from(employee)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/employees/{employee_id}",
    tag = "workforce",
    params(
        ("employee_id" = String, Path, description = "Employee id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    request_body = UpdateEmployeeRequestResource,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResource),
        (status = 404, description = "Employee not found", body = WorkforceErrorResponseResource),
        (status = 409, description = "Row version conflict, re-fetch and retry", body = WorkforceErrorResponseResource)
    )
)]
pub async fn update_employee(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(employee_id): Path<String>,
    Json(body): Json<UpdateEmployeeRequestResource>,
) -> Result<Json<EmployeeResource>, ErrorResponse> {
    let context = request_context(&headers)?;
    validate_body(&body)?;

    let command = UpdateEmployeeCommand::new(
        context,
        UpdateEmployeeCommandParts {
            employee_id,
            expected_row_version: body.expected_row_version,
            phone: body.phone,
            job_title: body.job_title,
            department_id: body.department_id,
            employment_status: body.employment_status,
            termination_date: body.termination_date,
            is_active: body.is_active,
        },
    )
    .map_err(map_domain_error)?;

    let employee = state
        .command_service
        .handle_update_employee(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EmployeeResource::from(employee)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{employee_id}",
    tag = "workforce",
    params(
        ("employee_id" = String, Path, description = "Employee id"),
        ("x-actor-id" = String, Header, description = "Acting principal id"),
        ("x-employer-id" = String, Header, description = "Tenant employer id")
    ),
    responses(
        (status = 204, description = "Employee soft-deleted"),
        (status = 404, description = "Employee not found", body = WorkforceErrorResponseResource)
    )
)]
pub async fn delete_employee(
    State(state): State<WorkforceRestControllerState>,
    headers: HeaderMap,
    Path(employee_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let context = request_context(&headers)?;

    let command = DeleteEmployeeCommand::new(context, employee_id).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete_employee(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn request_context(headers: &HeaderMap) -> Result<TenantContext, ErrorResponse> {
    let provider = establish_request_context(headers)
        .map_err(|error| map_domain_error(WorkforceDomainError::Tenancy(error)))?;
    let context = provider
        .resolve()
        .map_err(|error| map_domain_error(WorkforceDomainError::Tenancy(error)))?;
    Ok(context.clone())
}

fn validate_body<T: Validate>(body: &T) -> Result<(), ErrorResponse> {
    body.validate().map_err(|error| {
        (
            StatusCode::BAD_REQUEST,
            Json(WorkforceErrorResponseResource {
                message: error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: WorkforceDomainError) -> ErrorResponse {
    let status = match &error {
        WorkforceDomainError::InvalidCompanyName
        | WorkforceDomainError::InvalidDepartmentName
        | WorkforceDomainError::InvalidEmployeeName
        | WorkforceDomainError::InvalidEmployeeNumber
        | WorkforceDomainError::InvalidEmailAddress
        | WorkforceDomainError::InvalidEmploymentType(_)
        | WorkforceDomainError::InvalidEmploymentStatus(_)
        | WorkforceDomainError::InvalidTerminationDate
        | WorkforceDomainError::InvalidRecordId
        | WorkforceDomainError::InvalidPaging => StatusCode::BAD_REQUEST,
        WorkforceDomainError::Tenancy(inner) => tenancy_status_code(inner),
    };

    (
        status,
        Json(WorkforceErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
