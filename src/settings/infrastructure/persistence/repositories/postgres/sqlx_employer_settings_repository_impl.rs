use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    settings::{
        domain::model::{
            entities::employer_settings::EmployerSettings,
            enums::{pay_period_type::PayPeriodType, settings_domain_error::SettingsDomainError},
        },
        infrastructure::persistence::repositories::employer_settings_repository::{
            EmployerSettingsRecord, EmployerSettingsRepository,
        },
    },
    tenancy::{
        domain::{
            model::{
                entities::audit_metadata::TenantOwnership,
                enums::tenancy_domain_error::TenancyDomainError,
                value_objects::employer_id::EmployerId,
            },
            services::write_interceptor::WriteInterceptor,
        },
        infrastructure::persistence::{
            row_mapping::{AUDIT_COLUMNS, audit_metadata_from_row},
            scoped_query::{RowVisibility, ScopedQueryBuilder, TenantFilter},
            store_error::translate_store_error,
        },
    },
};

const SETTINGS_COLUMNS: &str = "t.employer_id, t.default_pay_period_type, t.default_currency, \
     t.time_zone, t.fiscal_year_start_month, t.allow_overtime, t.overtime_multiplier_percent, \
     t.enable_timesheets, t.require_time_approval";

pub struct SqlxEmployerSettingsRepositoryImpl {
    pool: PgPool,
}

impl SqlxEmployerSettingsRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_settings_row(row: &PgRow) -> Result<EmployerSettings, SettingsDomainError> {
    let employer_id: i64 = row
        .try_get("employer_id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let pay_period_type: String = row
        .try_get("default_pay_period_type")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(EmployerSettings {
        ownership: TenantOwnership::new(EmployerId::new(employer_id)?),
        default_pay_period_type: PayPeriodType::parse(&pay_period_type)?,
        default_currency: row
            .try_get("default_currency")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        time_zone: row
            .try_get("time_zone")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        fiscal_year_start_month: row
            .try_get("fiscal_year_start_month")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        allow_overtime: row
            .try_get("allow_overtime")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        overtime_multiplier_percent: row
            .try_get("overtime_multiplier_percent")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        enable_timesheets: row
            .try_get("enable_timesheets")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        require_time_approval: row
            .try_get("require_time_approval")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl EmployerSettingsRepository for SqlxEmployerSettingsRepositoryImpl {
    async fn upsert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: EmployerSettingsRecord,
    ) -> Result<EmployerSettings, SettingsDomainError> {
        let audit = interceptor.before_insert();

        // ON CONFLICT leaves created_at/created_by untouched; only the
        // modification pair moves on an existing row.
        let statement = r#"
            INSERT INTO employer_settings (
                employer_id,
                default_pay_period_type,
                default_currency,
                time_zone,
                fiscal_year_start_month,
                allow_overtime,
                overtime_multiplier_percent,
                enable_timesheets,
                require_time_approval,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, $10, $11, $12, $13)
            ON CONFLICT (employer_id)
            DO UPDATE SET
                default_pay_period_type = EXCLUDED.default_pay_period_type,
                default_currency = EXCLUDED.default_currency,
                time_zone = EXCLUDED.time_zone,
                fiscal_year_start_month = EXCLUDED.fiscal_year_start_month,
                allow_overtime = EXCLUDED.allow_overtime,
                overtime_multiplier_percent = EXCLUDED.overtime_multiplier_percent,
                enable_timesheets = EXCLUDED.enable_timesheets,
                require_time_approval = EXCLUDED.require_time_approval,
                is_deleted = FALSE,
                modified_at = EXCLUDED.modified_at,
                modified_by = EXCLUDED.modified_by
            RETURNING
                employer_id,
                default_pay_period_type,
                default_currency,
                time_zone,
                fiscal_year_start_month,
                allow_overtime,
                overtime_multiplier_percent,
                enable_timesheets,
                require_time_approval,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
        "#;

        let row = sqlx::query(statement)
            .bind(ownership.employer_id().value())
            .bind(record.default_pay_period_type.as_str())
            .bind(&record.default_currency)
            .bind(&record.time_zone)
            .bind(record.fiscal_year_start_month)
            .bind(record.allow_overtime)
            .bind(record.overtime_multiplier_percent)
            .bind(record.enable_timesheets)
            .bind(record.require_time_approval)
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_store_error(e, "employer settings"))?;

        map_settings_row(&row)
    }

    async fn find(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Option<EmployerSettings>, SettingsDomainError> {
        let select_list = format!("{SETTINGS_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<EmployerSettings>(&select_list, filter, visibility);

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        row.map(|r| map_settings_row(&r)).transpose()
    }
}
