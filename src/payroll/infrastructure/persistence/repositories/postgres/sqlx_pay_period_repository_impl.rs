use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    payroll::{
        domain::model::{
            entities::pay_period::PayPeriod,
            enums::{pay_period_status::PayPeriodStatus, payroll_domain_error::PayrollDomainError},
        },
        infrastructure::persistence::repositories::pay_period_repository::{
            NewPayPeriodRecord, PayPeriodRepository,
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

const PAY_PERIOD_COLUMNS: &str =
    "t.id, t.employer_id, t.period_start, t.period_end, t.pay_date, t.status";

pub struct SqlxPayPeriodRepositoryImpl {
    pool: PgPool,
}

impl SqlxPayPeriodRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_pay_period_row(row: &PgRow) -> Result<PayPeriod, PayrollDomainError> {
    let employer_id: i64 = row
        .try_get("employer_id")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

    Ok(PayPeriod {
        id: row
            .try_get("id")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        ownership: TenantOwnership::new(EmployerId::new(employer_id)?),
        period_start: row
            .try_get("period_start")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        period_end: row
            .try_get("period_end")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        pay_date: row
            .try_get("pay_date")
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?,
        status: PayPeriodStatus::parse(&status)?,
        audit: audit_metadata_from_row(row)?,
    })
}

#[async_trait]
impl PayPeriodRepository for SqlxPayPeriodRepositoryImpl {
    async fn insert(
        &self,
        ownership: TenantOwnership,
        interceptor: &WriteInterceptor,
        record: NewPayPeriodRecord,
    ) -> Result<PayPeriod, PayrollDomainError> {
        let id = Uuid::now_v7();
        let audit = interceptor.before_insert();
        let status = PayPeriodStatus::Open;

        let statement = r#"
            INSERT INTO pay_periods (
                id,
                employer_id,
                period_start,
                period_end,
                pay_date,
                status,
                is_deleted,
                created_at,
                created_by,
                modified_at,
                modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7, $8, $9, $10)
        "#;

        sqlx::query(statement)
            .bind(id)
            .bind(ownership.employer_id().value())
            .bind(record.period_start)
            .bind(record.period_end)
            .bind(record.pay_date)
            .bind(status.as_str())
            .bind(audit.created_at)
            .bind(audit.created_by.value())
            .bind(audit.modified_at)
            .bind(audit.modified_by.as_ref().map(|actor| actor.value()))
            .execute(&self.pool)
            .await
            .map_err(|e| translate_store_error(e, "pay period already exists for this range"))?;

        Ok(PayPeriod {
            id,
            ownership,
            period_start: record.period_start,
            period_end: record.period_end,
            pay_date: record.pay_date,
            status,
            audit,
        })
    }

    async fn list(
        &self,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Result<Vec<PayPeriod>, PayrollDomainError> {
        let select_list = format!("{PAY_PERIOD_COLUMNS}, {AUDIT_COLUMNS}");
        let mut query =
            ScopedQueryBuilder::tenant_scoped::<PayPeriod>(&select_list, filter, visibility);
        query.push(" ORDER BY t.period_start DESC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(map_pay_period_row).collect()
    }
}
