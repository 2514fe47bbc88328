use crate::{
    settings::domain::model::{
        enums::settings_domain_error::SettingsDomainError, value_objects::setting_key::SettingKey,
    },
    tenancy::domain::model::entities::tenant_context::TenantContext,
};

#[derive(Clone, Debug)]
pub struct UpsertSystemSettingCommand {
    context: TenantContext,
    key: SettingKey,
    value: String,
    description: Option<String>,
}

impl UpsertSystemSettingCommand {
    pub fn new(
        context: TenantContext,
        key: String,
        value: String,
        description: Option<String>,
    ) -> Result<Self, SettingsDomainError> {
        let value = value.trim().to_string();
        if value.is_empty() || value.len() > 4000 {
            return Err(SettingsDomainError::InvalidSettingValue);
        }

        Ok(Self {
            context,
            key: SettingKey::new(key)?,
            value,
            description: description
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty()),
        })
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
    pub fn key(&self) -> &SettingKey {
        &self.key
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
