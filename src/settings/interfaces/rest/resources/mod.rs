pub mod employer_settings_resource;
pub mod settings_error_response_resource;
pub mod system_setting_resource;
pub mod upsert_employer_settings_request_resource;
pub mod upsert_system_setting_request_resource;
