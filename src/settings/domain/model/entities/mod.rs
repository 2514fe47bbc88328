pub mod employer_settings;
pub mod system_setting;
