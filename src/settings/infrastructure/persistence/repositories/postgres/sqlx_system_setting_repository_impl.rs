use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    settings::{
        domain::model::{
            entities::system_setting::SystemSetting,
            enums::settings_domain_error::SettingsDomainError,
            value_objects::setting_key::SettingKey,
        },
        infrastructure::persistence::repositories::system_setting_repository::{
            SystemSettingRecord, SystemSettingRepository,
        },
    },
    tenancy::{
        domain::{
            model::enums::tenancy_domain_error::TenancyDomainError,
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            row_mapping::{AUDIT_COLUMNS, audit_metadata_from_row},
            scoped_query::{RowVisibility, ScopedQueryBuilder},
            store_error::translate_store_error,
        },
    },
};

const SYSTEM_SETTING_COLUMNS: &str = "t.setting_key, t.setting_value, t.description";

pub struct SqlxSystemSettingRepositoryImpl {
    pool: PgPool,
}

impl SqlxSystemSettingRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_system_setting_row(row: &PgRow) -> Result<SystemSetting, SettingsDomainError> {
    let key: String = row
        .try_get("setting_key")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(SystemSetting {
        key: SettingKey::new(key)?,
        value: row
            .try_get("setting_value")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl SystemSettingRepository for SqlxSystemSettingRepositoryImpl {
    async fn upsert(
        &self,
        interceptor: &WriteInterceptor,
        record: SystemSettingRecord,
    ) -> Result<SystemSetting, SettingsDomainError> {
        let audit = interceptor.before_insert();

        let statement = r#"
            INSERT INTO system_settings (
                setting_key,
                setting_value,
                description,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, FALSE, $4, $5, $6, $7)
            ON CONFLICT (setting_key)
            DO UPDATE SET
                setting_value = EXCLUDED.setting_value,
                description = EXCLUDED.description,
                is_deleted = FALSE,
                modified_at = EXCLUDED.modified_at,
                modified_by = EXCLUDED.modified_by
            RETURNING
                setting_key,
                setting_value,
                description,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
        "#;

        let row = sqlx::query(statement)
            .bind(record.key.value())
            .bind(&record.value)
            .bind(&record.description)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_store_error(e, "system setting"))?;

        map_system_setting_row(&row)
    }

    async fn list(
        &self,
        visibility: RowVisibility,
    ) -> Result<Vec<SystemSetting>, SettingsDomainError> {
        let select_list = format!("{SYSTEM_SETTING_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query = ScopedQueryBuilder::global::<SystemSetting>(&select_list, visibility);
        query.push(" ORDER BY t.setting_key");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(map_system_setting_row).collect()
    }

    async fn find_by_key(
        &self,
        key: &SettingKey,
        visibility: RowVisibility,
    ) -> Result<Option<SystemSetting>, SettingsDomainError> {
        let select_list = format!("{SYSTEM_SETTING_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query = ScopedQueryBuilder::global::<SystemSetting>(&select_list, visibility);
        query
            .push(" AND t.setting_key = ")
            .push_bind(key.value().to_string());

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_system_setting_row(&r)).transpose()
    }
}
