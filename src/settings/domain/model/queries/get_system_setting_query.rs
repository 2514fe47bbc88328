use crate::{
    settings::domain::model::{
        enums::settings_domain_error::SettingsDomainError, value_objects::setting_key::SettingKey,
    },
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

#[derive(Clone, Debug)]
pub struct GetSystemSettingQuery {
    context: TenantContext,
    key: SettingKey,
}

impl GetSystemSettingQuery {
    pub fn new(context: TenantContext, key: String) -> Result<Self, SettingsDomainError> {
        Ok(Self {
            context,
            key: SettingKey::new(key)?,
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn key(&self) -> &SettingKey {
        &self.key
    }
}
