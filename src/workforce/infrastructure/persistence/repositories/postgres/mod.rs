pub mod sqlx_company_repository_impl;
pub mod sqlx_department_repository_impl;
pub mod sqlx_employee_repository_impl;
