pub mod get_employer_settings_query;
pub mod get_system_setting_query;
pub mod list_system_settings_query;
