pub mod payroll_command_service_impl;
