pub mod sqlx_employer_settings_repository_impl;
pub mod sqlx_system_setting_repository_impl;
