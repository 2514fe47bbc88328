use async_trait::async_trait;

use crate::{
    settings::domain::model::{
        entities::system_setting::SystemSetting, enums::settings_domain_error::SettingsDomainError,
        value_objects::setting_key::SettingKey,
    },
    tenancy::{
        domain::services::write_interceptor::WriteInterceptor,
        infrastructure::persistence::scoped_query::RowVisibility,
    },
};

#[derive(Clone, Debug)]
pub struct SystemSettingRecord {
    pub key: SettingKey,
    pub value: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait SystemSettingRepository: Send + Sync {
    async fn upsert(
        &self,
        interceptor: &WriteInterceptor,
        record: SystemSettingRecord,
    ) -> Result<SystemSetting, SettingsDomainError>;

    async fn list(&self, visibility: RowVisibility)
    -> Result<Vec<SystemSetting>, SettingsDomainError>;

    async fn find_by_key(
        &self,
        key: &SettingKey,
        visibility: RowVisibility,
    ) -> Result<Option<SystemSetting>, SettingsDomainError>;
}
