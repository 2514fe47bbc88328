pub mod payroll_query_service_impl;
