use crate::workforce::domain::model::enums::workforce_domain_error::WorkforceDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmploymentType {
    Salaried,
    Hourly,
    Contractor,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Salaried => "salaried",
            EmploymentType::Hourly => "hourly",
            EmploymentType::Contractor => "contractor",
        }
    }

    pub fn parse(value: &str) -> Result<Self, WorkforceDomainError> {
        match value.trim().to_lowercase().as_str() {
            "salaried" => Ok(EmploymentType::Salaried),
            "hourly" => Ok(EmploymentType::Hourly),
            "contractor" => Ok(EmploymentType::Contractor),
            other => Err(WorkforceDomainError::InvalidEmploymentType(
                other.to_string(),
            )),
        }
    }
}
