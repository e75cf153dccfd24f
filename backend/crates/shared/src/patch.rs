//! Tri-state patch field
//!
//! JSON merge-style updates need to tell three cases apart: the key was
//! left out, the key was sent as `null`, or the key carried a value.
//! `Option<T>` collapses the first two, so request DTOs use [`Patch<T>`]
//! together with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

/// One field of a partial update.
///
/// ```
/// use kernel::patch::Patch;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(default)]
///     role: Patch<String>,
/// }
///
/// let omitted: Body = serde_json::from_str("{}").unwrap();
/// assert_eq!(omitted.role, Patch::Missing);
///
/// let cleared: Body = serde_json::from_str(r#"{"role":null}"#).unwrap();
/// assert_eq!(cleared.role, Patch::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Key absent from the payload; leave the stored value untouched
    #[default]
    Missing,
    /// Key present with an explicit `null`
    Null,
    /// Key present with a value
    Value(T),
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; `Missing` comes from `Default`.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        full_name: Patch<String>,
        #[serde(default)]
        efficiency: Patch<i32>,
    }

    #[test]
    fn test_omitted_key_is_missing() {
        let body: Body = serde_json::from_str(r#"{"efficiency": 3}"#).unwrap();
        assert_eq!(body.full_name, Patch::Missing);
        assert_eq!(body.efficiency, Patch::Value(3));
    }

    #[test]
    fn test_explicit_null_is_null() {
        let body: Body = serde_json::from_str(r#"{"full_name": null}"#).unwrap();
        assert_eq!(body.full_name, Patch::Null);
        assert_eq!(body.efficiency, Patch::Missing);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<Body>(r#"{"efficiency": "high"}"#);
        assert!(result.is_err());
    }
}
