//! Full Name Value Object

use std::fmt;

use super::text::{self, TextError};

/// Display name of a user. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
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

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_new() {
        let name = FullName::new("Ann").unwrap();
        assert_eq!(name.as_str(), "Ann");
        assert_eq!(name.to_string(), "Ann");
    }

    #[test]
    fn test_full_name_blank() {
        assert_eq!(FullName::new(" "), Err(TextError::Blank));
    }
}
