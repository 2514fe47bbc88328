use async_trait::async_trait;

use crate::settings::domain::model::{
    entities::{employer_settings::EmployerSettings, system_setting::SystemSetting},
    enums::settings_domain_error::SettingsDomainError,
    queries::{
        get_employer_settings_query::GetEmployerSettingsQuery,
        get_system_setting_query::GetSystemSettingQuery,
        list_system_settings_query::ListSystemSettingsQuery,
    },
};

#[async_trait]
pub trait SettingsQueryService: Send + Sync {
    async fn handle_get_employer_settings(
        &self,
        query: GetEmployerSettingsQuery,
    ) -> Result<EmployerSettings, SettingsDomainError>;

    async fn handle_list_system_settings(
        &self,
        query: ListSystemSettingsQuery,
    ) -> Result<Vec<SystemSetting>, SettingsDomainError>;

    async fn handle_get_system_setting(
        &self,
        query: GetSystemSettingQuery,
    ) -> Result<SystemSetting, SettingsDomainError>;
}
