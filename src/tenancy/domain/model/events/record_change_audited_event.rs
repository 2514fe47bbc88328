use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::enums::record_change_action::RecordChangeAction;

/// Change-trail row written after every successful or failed mutation.
/// `employer_id` is absent for global records and maintenance actions.
#[derive(Clone, Debug)]
pub struct RecordChangeAuditedEvent {
    pub employer_id: Option<i64>,
    pub entity_name: String,
    pub entity_id: String,
    pub action: RecordChangeAction,
    pub actor: String,
    pub success: bool,
    pub details: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
