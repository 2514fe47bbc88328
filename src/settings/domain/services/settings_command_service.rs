use async_trait::async_trait;

use crate::settings::domain::model::{
    commands::{
        upsert_employer_settings_command::UpsertEmployerSettingsCommand,
        upsert_system_setting_command::UpsertSystemSettingCommand,
    },
    entities::{employer_settings::EmployerSettings, system_setting::SystemSetting},
    enums::settings_domain_error::SettingsDomainError,
};

#[async_trait]
pub trait SettingsCommandService: Send + Sync {
    async fn handle_upsert_employer_settings(
        &self,
        command: UpsertEmployerSettingsCommand,
    ) -> Result<EmployerSettings, SettingsDomainError>;

    async fn handle_upsert_system_setting(
        &self,
        command: UpsertSystemSettingCommand,
    ) -> Result<SystemSetting, SettingsDomainError>;
}
