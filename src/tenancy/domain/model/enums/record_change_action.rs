#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordChangeAction {
    Created,
    Updated,
    SoftDeleted,
    Purged,
}

impl RecordChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordChangeAction::Created => "created",
            RecordChangeAction::Updated => "updated",
            RecordChangeAction::SoftDeleted => "soft_deleted",
            RecordChangeAction::Purged => "purged",
        }
    }
}
