use async_trait::async_trait;

use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError,
    events::record_change_audited_event::RecordChangeAuditedEvent,
};

#[async_trait]
pub trait ChangeLogRepository: Send + Sync {
    async fn save_event(&self, event: &RecordChangeAuditedEvent)
    -> Result<(), TenancyDomainError>;
}
