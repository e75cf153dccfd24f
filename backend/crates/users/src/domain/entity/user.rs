//! User Entity
//!
//! The single persisted record of the service, plus the shapes used to
//! create it and to update part of it.

use crate::domain::value_object::{full_name::FullName, role_name::RoleName, user_id::UserId};

/// A stored user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned key, immutable after creation
    pub id: UserId,
    pub full_name: FullName,
    pub role: RoleName,
    pub efficiency: i32,
}

impl User {
    /// Overwrite exactly the fields carried by `patch`
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(full_name) = &patch.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(role) = &patch.role {
            self.role = role.clone();
        }
        if let Some(efficiency) = patch.efficiency {
            self.efficiency = efficiency;
        }
    }
}

/// A user that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: FullName,
    pub role: RoleName,
    pub efficiency: i32,
}

impl NewUser {
    /// Attach the key the store assigned
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            full_name: self.full_name,
            role: self.role,
            efficiency: self.efficiency,
        }
    }
}

/// Partial update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub full_name: Option<FullName>,
    pub role: Option<RoleName>,
    pub efficiency: Option<i32>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.role.is_none() && self.efficiency.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        NewUser {
            full_name: FullName::new("Ann").unwrap(),
            role: RoleName::new("eng").unwrap(),
            efficiency: 5,
        }
        .with_id(UserId::from_raw(1))
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut user = ann();
        user.apply(&UserPatch {
            efficiency: Some(9),
            ..Default::default()
        });

        assert_eq!(user.full_name.as_str(), "Ann");
        assert_eq!(user.role.as_str(), "eng");
        assert_eq!(user.efficiency, 9);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut user = ann();
        let patch = UserPatch::default();
        assert!(patch.is_empty());

        user.apply(&patch);
        assert_eq!(user, ann());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = ann();
        user.apply(&UserPatch {
            full_name: Some(FullName::new("Ann Lee").unwrap()),
            role: Some(RoleName::new("lead").unwrap()),
            efficiency: Some(1),
        });
        assert_eq!(user.id, UserId::from_raw(1));
        assert_eq!(user.full_name.as_str(), "Ann Lee");
        assert_eq!(user.role.as_str(), "lead");
    }
}
