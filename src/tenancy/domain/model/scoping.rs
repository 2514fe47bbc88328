/// How a table resolves its owning tenant. Declared statically by each entity
/// module; the filter engine reads it at query-construction time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TenantScopeStrategy {
    /// The table carries the tenant column itself, and optionally a company
    /// column the context sub-scope narrows on.
    Direct {
        tenant_column: &'static str,
        sub_scope_column: Option<&'static str>,
    },
    /// The table is scoped through a parent row; the filter resolves the
    /// root tenant owner on the parent table, never trusting the local
    /// foreign key alone.
    ThroughParent {
        parent_table: &'static str,
        local_key: &'static str,
        parent_key: &'static str,
        parent_tenant_column: &'static str,
    },
}

/// Capability implemented by every tenant-scoped entity.
pub trait TenantScoped {
    const TABLE: &'static str;

    fn strategy() -> TenantScopeStrategy;
}

/// Marker for tenant-independent tables (visible to all tenants). Queries
/// against these are never tenant-filtered, but soft-delete still applies.
pub trait GlobalRecord {
    const TABLE: &'static str;
}
