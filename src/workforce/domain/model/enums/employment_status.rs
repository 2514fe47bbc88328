use crate::workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Terminated,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "active",
            EmploymentStatus::OnLeave => "on_leave",
            EmploymentStatus::Terminated => "terminated",
        }
    }

    pub fn parse(value: &str) -> Result<Self, WorkforceDomainError> {
        match value.trim().to_lowercase().as_str() {
            "active" => Ok(EmploymentStatus::Active),
            "on_leave" => Ok(EmploymentStatus::OnLeave),
            "terminated" => Ok(EmploymentStatus::Terminated),
            other => Err(WorkforceDomainError::InvalidEmploymentStatus(
                other.to_string(),
            )),
        }
    }
}
