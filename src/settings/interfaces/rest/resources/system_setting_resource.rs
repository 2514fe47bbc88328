use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::settings::domain::model::entities::system_setting::SystemSetting;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SystemSettingResource {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

impl From<SystemSetting> for SystemSettingResource {
    fn from(setting: SystemSetting) -> Self {
        Self {
            key: setting.key.value().to_string(),
            value: setting.value,
            description: setting.description,
            created_at: setting.audit.created_at,
            created_by: setting.audit.created_by.value().to_string(),
            modified_at: setting.audit.modified_at,
            modified_by: setting
                .audit
                .modified_by
                .map(|actor| actor.value().to_string()),
        }
    }
}
