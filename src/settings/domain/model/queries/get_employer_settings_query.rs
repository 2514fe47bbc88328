use crate::tenancy::domain::model::entities::tenant_context::TenantContext;

#[derive(Clone, Debug)]
pub struct GetEmployerSettingsQuery {
    context: TenantContext,
}

impl GetEmployerSettingsQuery {
    pub fn new(context: TenantContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &TenantContext {
        &self.context
    }
}
