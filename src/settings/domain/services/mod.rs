pub mod settings_command_service;
pub mod settings_query_service;
