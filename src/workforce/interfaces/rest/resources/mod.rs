pub mod company_resource;
pub mod create_company_request_resource;
pub mod create_department_request_resource;
pub mod create_employee_request_resource;
pub mod department_resource;
pub mod employee_resource;
pub mod include_deleted_query_resource;
pub mod list_departments_query_resource;
pub mod list_employees_query_resource;
pub mod update_employee_request_resource;
pub mod workforce_error_response_resource;
