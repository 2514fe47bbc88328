use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenancyDomainError {
    #[error("tenant context has not been established for this operation")]
    ContextNotSet,

    #[error("tenant context was already established with a different value")]
    ContextReassigned,

    #[error("authentication headers are required (x-actor-id and x-employer-id)")]
    MissingAuthentication,

    #[error("employer id must be a positive identifier")]
    InvalidEmployerId,

    #[error("company id is not a valid identifier")]
    InvalidCompanyId,

    #[error("actor id is required")]
    InvalidActorId,

    #[error("no tenant could be resolved for this insert")]
    MissingTenant,

    #[error("resource belongs to another tenant")]
    AccessDenied,

    #[error("record not found")]
    RecordNotFound,

    #[error("record was modified by another operation, re-fetch and retry")]
    ConcurrencyConflict,

    #[error("duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
