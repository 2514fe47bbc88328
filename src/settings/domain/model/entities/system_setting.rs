use crate::{
    settings::domain::model::value_objects::setting_key::SettingKey,
    tenancy::domain::model::{entities::audit_metadata::AuditMetadata, scoping::GlobalRecord},
};

/// Platform-wide configuration row. Carries no tenant column and is visible
/// to every tenant; still audited and soft-deletable.
#[derive(Clone, Debug)]
pub struct SystemSetting {
    pub key: SettingKey,
    pub value: String,
    pub description: Option<String>,
    pub audit: AuditMetadata,
}

impl GlobalRecord for SystemSetting {
    const TABLE: &'static str = "system_settings";
}
