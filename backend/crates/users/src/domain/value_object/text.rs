//! Bounded Text
//!
//! Shared rule for the free-text columns of `users`: not blank, and no
//! longer than the `VARCHAR(255)` column allows.

use thiserror::Error;

/// Maximum length in characters, matching `VARCHAR(255)`
pub const TEXT_MAX_LENGTH: usize = 255;

/// Error returned when a text field fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("must not be blank")]
    Blank,

    #[error("must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Validate a raw text value. The value is stored exactly as given.
pub(crate) fn validate(raw: String) -> Result<String, TextError> {
    if raw.trim().is_empty() {
        return Err(TextError::Blank);
    }

    let actual = raw.chars().count();
    if actual > TEXT_MAX_LENGTH {
        return Err(TextError::TooLong {
            max: TEXT_MAX_LENGTH,
            actual,
        });
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_text() {
        assert_eq!(validate("Ann".to_string()), Ok("Ann".to_string()));
    }

    #[test]
    fn test_keeps_inner_and_outer_whitespace() {
        assert_eq!(validate(" Ann Lee ".to_string()), Ok(" Ann Lee ".to_string()));
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(validate(String::new()), Err(TextError::Blank));
        assert_eq!(validate("   \t".to_string()), Err(TextError::Blank));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 255 two-byte characters still fit
        let name: String = std::iter::repeat('é').take(TEXT_MAX_LENGTH).collect();
        assert!(validate(name).is_ok());

        let name: String = std::iter::repeat('a').take(TEXT_MAX_LENGTH + 1).collect();
        assert_eq!(
            validate(name),
            Err(TextError::TooLong {
                max: TEXT_MAX_LENGTH,
                actual: TEXT_MAX_LENGTH + 1
            })
        );
    }
}
