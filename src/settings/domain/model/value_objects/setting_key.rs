use std::fmt;

use regex::Regex;

use crate::settings::domain::model::enums::settings_domain_error::SettingsDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SettingKey(String);

impl SettingKey {
    pub fn new(value: String) -> Result<Self, SettingsDomainError> {
        let normalized = value.trim().to_lowercase();
        let regex = Regex::new(r"^[a-z][a-z0-9_.]{2,63}$").expect("valid regex");

        if !regex.is_match(&normalized) {
            return Err(SettingsDomainError::InvalidSettingKey);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
