//! Repository Traits
//!
//! Interface for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::{NewUser, User, UserPatch};
use crate::domain::value_object::{role_name::RoleName, user_id::UserId};
use crate::error::UserResult;

/// User repository trait
///
/// Every method maps to a single store statement, so each call is atomic
/// on its own and nothing spans calls.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return the assigned id
    async fn create(&self, user: &NewUser) -> UserResult<UserId>;

    /// All users, optionally restricted to one role, ordered by id
    async fn list(&self, role: Option<&RoleName>) -> UserResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>>;

    /// Apply a partial update and return the row as stored afterwards.
    /// `None` if no such user exists.
    async fn update(&self, user_id: UserId, patch: &UserPatch) -> UserResult<Option<User>>;

    /// Delete a user and return its last state. `None` if no such user exists.
    async fn delete(&self, user_id: UserId) -> UserResult<Option<User>>;

    /// Delete every user, returning how many rows went away
    async fn delete_all(&self) -> UserResult<u64>;
}
