//! Update User Use Case
//!
//! Partial update: only the fields present in the request change.

use std::sync::Arc;

use kernel::patch::Patch;

use crate::domain::entity::user::{User, UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{full_name::FullName, role_name::RoleName, user_id::UserId};
use crate::error::{UserError, UserResult};

/// Update user input, one tri-state slot per column
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub full_name: Patch<String>,
    pub role: Patch<String>,
    pub efficiency: Patch<i32>,
}

impl UpdateUserInput {
    /// Validate into a domain patch.
    ///
    /// Every column is `NOT NULL`, so an explicit `null` is a validation
    /// failure rather than "clear this field".
    pub fn into_patch(self) -> UserResult<UserPatch> {
        let full_name = match self.full_name {
            Patch::Missing => None,
            Patch::Null => return Err(null_field("full_name")),
            Patch::Value(raw) => Some(
                FullName::new(raw).map_err(|e| UserError::invalid_text("full_name", e))?,
            ),
        };

        let role = match self.role {
            Patch::Missing => None,
            Patch::Null => return Err(null_field("role")),
            Patch::Value(raw) => {
                Some(RoleName::new(raw).map_err(|e| UserError::invalid_text("role", e))?)
            }
        };

        let efficiency = match self.efficiency {
            Patch::Missing => None,
            Patch::Null => return Err(null_field("efficiency")),
            Patch::Value(value) => Some(value),
        };

        Ok(UserPatch {
            full_name,
            role,
            efficiency,
        })
    }
}

fn null_field(field: &'static str) -> UserError {
    UserError::Validation {
        field,
        reason: "must not be null".to_string(),
    }
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, input: UpdateUserInput) -> UserResult<User> {
        let patch = input.into_patch()?;

        let user = self
            .repo
            .update(user_id, &patch)
            .await?
            .ok_or(UserError::NotFound)?;

        tracing::info!(
            user_id = %user_id,
            full_name_changed = patch.full_name.is_some(),
            role_changed = patch.role.is_some(),
            efficiency_changed = patch.efficiency.is_some(),
            "User updated"
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_skipped() {
        let patch = UpdateUserInput {
            efficiency: Patch::Value(9),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert!(patch.full_name.is_none());
        assert!(patch.role.is_none());
        assert_eq!(patch.efficiency, Some(9));
    }

    #[test]
    fn test_explicit_null_is_rejected() {
        let err = UpdateUserInput {
            role: Patch::Null,
            ..Default::default()
        }
        .into_patch()
        .unwrap_err();

        match err {
            UserError::Validation { field, reason } => {
                assert_eq!(field, "role");
                assert_eq!(reason, "must not be null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = UpdateUserInput {
            full_name: Patch::Value("  ".to_string()),
            ..Default::default()
        }
        .into_patch()
        .unwrap_err();

        assert!(matches!(
            err,
            UserError::Validation {
                field: "full_name",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_input_gives_empty_patch() {
        let patch = UpdateUserInput::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }
}
