pub mod payroll_command_service;
pub mod payroll_query_service;
