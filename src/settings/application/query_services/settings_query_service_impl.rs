use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    settings::{
        domain::{
            model::{
                entities::{employer_settings::EmployerSettings, system_setting::SystemSetting},
                enums::settings_domain_error::SettingsDomainError,
                queries::{
                    get_employer_settings_query::GetEmployerSettingsQuery,
                    get_system_setting_query::GetSystemSettingQuery,
                    list_system_settings_query::ListSystemSettingsQuery,
                },
            },
            services::settings_query_service::SettingsQueryService,
        },
        infrastructure::persistence::repositories::{
            employer_settings_repository::EmployerSettingsRepository,
            system_setting_repository::SystemSettingRepository,
        },
    },
    tenancy::{
        domain::model::enums::tenancy_domain_error::TenancyDomainError,
        infrastructure::persistence::scoped_query::{RowVisibility, TenantFilter},
    },
};

pub struct SettingsQueryServiceImpl {
    employer_settings_repository: Arc<dyn EmployerSettingsRepository>,
    system_setting_repository: Arc<dyn SystemSettingRepository>,
}

impl SettingsQueryServiceImpl {
    pub fn new(
        employer_settings_repository: Arc<dyn EmployerSettingsRepository>,
        system_setting_repository: Arc<dyn SystemSettingRepository>,
    ) -> Self {
        Self {
            employer_settings_repository,
            system_setting_repository,
        }
    }
}

#[async_trait]
impl SettingsQueryService for SettingsQueryServiceImpl {
    async fn handle_get_employer_settings(
        &self,
        query: GetEmployerSettingsQuery,
    ) -> Result<EmployerSettings, SettingsDomainError> {
        let filter = TenantFilter::from_context(query.context());

        self.employer_settings_repository
            .find(&filter, RowVisibility::ActiveOnly)
            .await?
            .ok_or_else(|| TenancyDomainError::RecordNotFound.into())
    }

    async fn handle_list_system_settings(
        &self,
        _query: ListSystemSettingsQuery,
    ) -> Result<Vec<SystemSetting>, SettingsDomainError> {
        self.system_setting_repository
            .list(RowVisibility::ActiveOnly)
            .await
    }

    async fn handle_get_system_setting(
        &self,
        query: GetSystemSettingQuery,
    ) -> Result<SystemSetting, SettingsDomainError> {
        self.system_setting_repository
            .find_by_key(query.key(), RowVisibility::ActiveOnly)
            .await?
            .ok_or_else(|| TenancyDomainError::RecordNotFound.into())
    }
}
