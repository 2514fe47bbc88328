use axum::Router;
use dotenvy::dotenv;
use payroll_axum_api::{
    config::app_config::AppConfig,
    payroll::{
        build_payroll_router,
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
    settings::{
        build_settings_router,
        interfaces::rest::resources::{
            employer_settings_resource::EmployerSettingsResource,
            settings_error_response_resource::SettingsErrorResponseResource,
            system_setting_resource::SystemSettingResource,
            upsert_employer_settings_request_resource::UpsertEmployerSettingsRequestResource,
            upsert_system_setting_request_resource::UpsertSystemSettingRequestResource,
        },
    },
    tenancy::{
        build_tenancy_router,
        infrastructure::persistence::repositories::{
            maintenance_repository::MaintenanceRepository,
            postgres::sqlx_maintenance_repository_impl::SqlxMaintenanceRepositoryImpl,
        },
        interfaces::rest::resources::{
            employer_resource::EmployerResource,
            tenancy_error_response_resource::TenancyErrorResponseResource,
        },
    },
    workforce::{
        build_workforce_router,
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
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        payroll_axum_api::tenancy::interfaces::rest::controllers::employer_rest_controller::get_current_employer,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::create_company,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::list_companies,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::get_company,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::delete_company,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::create_department,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::list_departments,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::get_department,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::delete_department,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::create_employee,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::list_employees,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::get_employee,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::update_employee,
        payroll_axum_api::workforce::interfaces::rest::controllers::workforce_rest_controller::delete_employee,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::create_pay_period,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::list_pay_periods,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::create_transaction,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::list_transactions,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::get_transaction,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::update_transaction,
        payroll_axum_api::payroll::interfaces::rest::controllers::payroll_rest_controller::delete_transaction,
        payroll_axum_api::settings::interfaces::rest::controllers::settings_rest_controller::get_employer_settings,
        payroll_axum_api::settings::interfaces::rest::controllers::settings_rest_controller::upsert_employer_settings,
        payroll_axum_api::settings::interfaces::rest::controllers::settings_rest_controller::list_system_settings,
        payroll_axum_api::settings::interfaces::rest::controllers::settings_rest_controller::get_system_setting,
        payroll_axum_api::settings::interfaces::rest::controllers::settings_rest_controller::upsert_system_setting
    ),
    components(
        schemas(
            EmployerResource,
            TenancyErrorResponseResource,
            CompanyResource,
            CreateCompanyRequestResource,
            CreateDepartmentRequestResource,
            CreateEmployeeRequestResource,
            DepartmentResource,
            EmployeeResource,
            IncludeDeletedQueryResource,
            ListDepartmentsQueryResource,
            ListEmployeesQueryResource,
            UpdateEmployeeRequestResource,
            WorkforceErrorResponseResource,
            CreatePayPeriodRequestResource,
            CreatePayrollTransactionRequestResource,
            ListPayrollTransactionsQueryResource,
            PayPeriodResource,
            PayrollErrorResponseResource,
            PayrollTransactionResource,
            UpdatePayrollTransactionRequestResource,
            EmployerSettingsResource,
            SettingsErrorResponseResource,
            SystemSettingResource,
            UpsertEmployerSettingsRequestResource,
            UpsertSystemSettingRequestResource
        )
    ),
    tags(
        (name = "tenancy", description = "Tenant context and employer profile"),
        (name = "workforce", description = "Companies, departments and employees"),
        (name = "payroll", description = "Pay periods and payroll transactions"),
        (name = "settings", description = "Employer and platform settings")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_pool_connections)
        .connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");

    // Bootstrap-time schema sync runs on the maintenance scope before any
    // request-serving router exists.
    let maintenance = SqlxMaintenanceRepositoryImpl::for_maintenance(pool.clone());
    maintenance
        .synchronize_schema()
        .await
        .expect("failed to synchronize schema");

    let app = Router::new()
        .merge(build_tenancy_router(pool.clone()))
        .merge(build_workforce_router(pool.clone()))
        .merge(build_payroll_router(pool.clone()))
        .merge(build_settings_router(pool))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "payroll api listening");
    tracing::info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
