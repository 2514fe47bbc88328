use crate::tenancy::domain::model::{
    entities::audit_metadata::AuditMetadata,
    scoping::{TenantScoped, TenantScopeStrategy},
    value_objects::employer_id::EmployerId,
};

/// Tenant root. Every scoped record resolves to exactly one employer, and an
/// employer row is only visible to its own tenant context.
#[derive(Clone, Debug)]
pub struct Employer {
    pub id: EmployerId,
    pub legal_name: String,
    pub tax_identification_number: String,
    pub country: String,
    pub subscription_plan: String,
    pub is_active: bool,
    pub row_version: i64,
    pub audit: AuditMetadata,
}

impl TenantScoped for Employer {
    const TABLE: &'static str = "employers";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::Direct {
            tenant_column: "id",
            sub_scope_column: None,
        }
    }
}
