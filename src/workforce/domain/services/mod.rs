pub mod workforce_command_service;
pub mod workforce_query_service;
