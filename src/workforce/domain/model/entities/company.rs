use crate::tenancy::domain::model::{
    entities::audit_metadata::{AuditMetadata, TenantOwnership},
    scoping::{TenantScoped, TenantScopeStrategy},
    value_objects::company_id::CompanyId,
};

/// One company of the employer group. Doubles as the sub-scope boundary: a
/// context restricted to a company only sees that company's row.
#[derive(Clone, Debug)]
pub struct Company {
    pub id: CompanyId,
    pub ownership: TenantOwnership,
    pub name: String,
    pub registration_number: Option<String>,
    pub audit: AuditMetadata,
}

impl TenantScoped for Company {
    const TABLE: &'static str = "companies";

    fn strategy() -> TenantScopeStrategy {
        TenantScopeStrategy::Direct {
            tenant_column: "employer_id",
            sub_scope_column: Some("id"),
        }
    }
}
