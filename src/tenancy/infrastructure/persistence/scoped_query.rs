use sqlx::{Postgres, QueryBuilder, postgres::PgArguments, query::Query};

use crate::tenancy::domain::model::{
    entities::tenant_context::TenantContext,
    scoping::{GlobalRecord, TenantScoped, TenantScopeStrategy},
    value_objects::{company_id::CompanyId, employer_id::EmployerId},
};

/// Tenant predicate source. Only constructible from a resolved context, so an
/// unauthenticated or bootstrap path cannot reach a tenant-scoped query at
/// all: `TenantContextProvider::resolve` already failed closed.
#[derive(Clone, Debug)]
pub struct TenantFilter {
    employer_id: EmployerId,
    company_id: Option<CompanyId>,
}

impl TenantFilter {
    pub fn from_context(context: &TenantContext) -> Self {
        Self {
            employer_id: context.employer_id(),
            company_id: context.company_id(),
        }
    }

    /// Filter for a tenant already resolved through ownership stamping, with
    /// no company sub-scope. Used on write paths that carry a
    /// [`TenantOwnership`] instead of a full context.
    ///
    /// [`TenantOwnership`]: crate::tenancy::domain::model::entities::audit_metadata::TenantOwnership
    pub fn for_employer(employer_id: EmployerId) -> Self {
        Self {
            employer_id,
            company_id: None,
        }
    }

    pub fn employer_id(&self) -> EmployerId {
        self.employer_id
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }
}

/// The one sanctioned bypass: queries built under this scope match all
/// tenants. Reserved for schema tooling and retention jobs; request-serving
/// code has no business constructing one.
pub struct MaintenanceScope {
    _private: (),
}

impl MaintenanceScope {
    pub fn for_maintenance() -> Self {
        Self { _private: () }
    }
}

/// Soft-deleted rows are invisible unless the caller asks for them by name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowVisibility {
    ActiveOnly,
    IncludeDeleted,
}

/// SELECT builder with the tenant and soft-delete predicates conjoined before
/// the caller can add anything. The table is always aliased `t`; additional
/// predicates are appended with `push`/`push_bind`.
pub struct ScopedQueryBuilder<'a> {
    builder: QueryBuilder<'a, Postgres>,
}

impl<'a> ScopedQueryBuilder<'a> {
    pub fn tenant_scoped<E: TenantScoped>(
        select_list: &str,
        filter: &TenantFilter,
        visibility: RowVisibility,
    ) -> Self {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM {} AS t WHERE ",
            select_list,
            E::TABLE
        ));
        push_tenant_predicate(&mut builder, E::strategy(), filter);
        push_visibility_predicate(&mut builder, visibility);
        Self { builder }
    }

    /// Global records carry no tenant column; the query passes through with
    /// only the soft-delete predicate.
    pub fn global<E: GlobalRecord>(select_list: &str, visibility: RowVisibility) -> Self {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM {} AS t WHERE TRUE",
            select_list,
            E::TABLE
        ));
        push_visibility_predicate(&mut builder, visibility);
        Self { builder }
    }

    /// Unfiltered read across all tenants, gated on [`MaintenanceScope`].
    pub fn maintenance<E: TenantScoped>(
        select_list: &str,
        _scope: &MaintenanceScope,
        visibility: RowVisibility,
    ) -> Self {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM {} AS t WHERE TRUE",
            select_list,
            E::TABLE
        ));
        push_visibility_predicate(&mut builder, visibility);
        Self { builder }
    }

    /// Physical removal of rows already soft-deleted, for retention tooling.
    pub fn purge_deleted<E: TenantScoped>(_scope: &MaintenanceScope) -> Self {
        let builder = QueryBuilder::new(format!(
            "DELETE FROM {} AS t WHERE t.is_deleted = TRUE",
            E::TABLE
        ));
        Self { builder }
    }

    pub fn purge_deleted_global<E: GlobalRecord>(_scope: &MaintenanceScope) -> Self {
        let builder = QueryBuilder::new(format!(
            "DELETE FROM {} AS t WHERE t.is_deleted = TRUE",
            E::TABLE
        ));
        Self { builder }
    }

    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.builder.push(sql);
        self
    }

    pub fn push_bind<T>(&mut self, value: T) -> &mut Self
    where
        T: 'a + sqlx::Encode<'a, Postgres> + sqlx::Type<Postgres>,
    {
        self.builder.push_bind(value);
        self
    }

    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    pub fn build(&mut self) -> Query<'_, Postgres, PgArguments> {
        self.builder.build()
    }
}

/// UPDATE builder: assignments are pushed first, then `into_scoped` seals the
/// statement with the tenant guard. There is no other way to obtain a
/// runnable query from it, so an unguarded UPDATE cannot be built by
/// accident.
pub struct ScopedUpdateBuilder<'a> {
    builder: QueryBuilder<'a, Postgres>,
    strategy: TenantScopeStrategy,
    filter: TenantFilter,
    visibility: RowVisibility,
}

impl<'a> ScopedUpdateBuilder<'a> {
    pub fn tenant_scoped<E: TenantScoped>(filter: &TenantFilter, visibility: RowVisibility) -> Self {
        let builder = QueryBuilder::new(format!("UPDATE {} AS t SET ", E::TABLE));
        Self {
            builder,
            strategy: E::strategy(),
            filter: filter.clone(),
            visibility,
        }
    }

    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.builder.push(sql);
        self
    }

    pub fn push_bind<T>(&mut self, value: T) -> &mut Self
    where
        T: 'a + sqlx::Encode<'a, Postgres> + sqlx::Type<Postgres>,
    {
        self.builder.push_bind(value);
        self
    }

    pub fn into_scoped(self) -> ScopedQueryBuilder<'a> {
        let Self {
            mut builder,
            strategy,
            filter,
            visibility,
        } = self;
        builder.push(" WHERE ");
        push_tenant_predicate(&mut builder, strategy, &filter);
        push_visibility_predicate(&mut builder, visibility);
        ScopedQueryBuilder { builder }
    }
}

fn push_tenant_predicate(
    builder: &mut QueryBuilder<'_, Postgres>,
    strategy: TenantScopeStrategy,
    filter: &TenantFilter,
) {
    match strategy {
        TenantScopeStrategy::Direct {
            tenant_column,
            sub_scope_column,
        } => {
            builder.push(format!("t.{tenant_column} = "));
            builder.push_bind(filter.employer_id().value());
            if let (Some(column), Some(company_id)) = (sub_scope_column, filter.company_id()) {
                builder.push(format!(" AND t.{column} = "));
                builder.push_bind(company_id.value());
            }
        }
        TenantScopeStrategy::ThroughParent {
            parent_table,
            local_key,
            parent_key,
            parent_tenant_column,
        } => {
            builder.push(format!(
                "EXISTS (SELECT 1 FROM {parent_table} AS p WHERE p.{parent_key} = t.{local_key} AND p.is_deleted = FALSE AND p.{parent_tenant_column} = "
            ));
            builder.push_bind(filter.employer_id().value());
            builder.push(")");
            if let Some(company_id) = filter.company_id() {
                builder.push(format!(" AND t.{local_key} = "));
                builder.push_bind(company_id.value());
            }
        }
    }
}

fn push_visibility_predicate(builder: &mut QueryBuilder<'_, Postgres>, visibility: RowVisibility) {
    if visibility == RowVisibility::ActiveOnly {
        builder.push(" AND t.is_deleted = FALSE");
    }
}
