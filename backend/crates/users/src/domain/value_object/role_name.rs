//! Role Name Value Object
//!
//! Roles are free text (e.g. "eng", "designer"). They are compared exactly,
//! so "Eng" and "eng" are different roles.

use std::fmt;

use super::text::{self, TextError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(raw: impl Into<String>) -> Result<Self, TextError> {
        text::validate(raw.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_is_case_sensitive() {
        let lower = RoleName::new("eng").unwrap();
        let upper = RoleName::new("Eng").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_role_name_blank() {
        assert_eq!(RoleName::new(""), Err(TextError::Blank));
    }
}
