use uuid::Uuid;

use crate::tenancy::domain::model::{
    entities::audit_metadata::AuditMetadata,
    scoping::{TenantScoped, TenantScopeStrategy},
    value_objects::company_id::CompanyId,
};

/// Departments carry no tenant column of their own; they resolve their
/// tenant through the owning company.
#[derive(Clone, Debug)]
pub struct Department {
    pub id: Uuid,
    pub company_id: CompanyId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub audit: AuditMetadata,
}

impl TenantScoped for Department {
    const TABLE: &'static str = "departments";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::ThroughParent {
            parent_table: "companies",
            local_key: "company_id",
            parent_key: "id",
            parent_tenant_column: "employer_id",
        }
    }
}
