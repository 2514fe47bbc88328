pub mod upsert_employer_settings_command;
pub mod upsert_system_setting_command;
