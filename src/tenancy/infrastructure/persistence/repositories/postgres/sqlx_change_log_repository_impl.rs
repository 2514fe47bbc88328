use async_trait::async_trait;
use sqlx::PgPool;

use crate::tenancy::{
    domain::model::{
        enums::tenancy_domain_error::TenancyDomainError,
        events::record_change_audited_event::RecordChangeAuditedEvent,
    },
    infrastructure::persistence::repositories::change_log_repository::ChangeLogRepository,
};

pub struct SqlxChangeLogRepositoryImpl {
    pool: PgPool,
}

impl SqlxChangeLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangeLogRepository for SqlxChangeLogRepositoryImpl {
    async fn save_event(
        &self,
        event: &RecordChangeAuditedEvent,
    ) -> Result<(), TenancyDomainError> {
        let statement = r#"
            INSERT INTO record_change_log (
                employer_id,
                entity_name,
                entity_id,
                action,
                actor,
                success,
                details,
                occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(statement)
            .bind(event.employer_id)
            .bind(&event.entity_name)
            .bind(&event.entity_id)
            .bind(event.action.as_str())
            .bind(&event.actor)
            .bind(event.success)
            .bind(&event.details)
            .bind(event.occurred_at)
            .execute(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
