//! Delete User Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

/// Delete user use case
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the deleted user as it was just before removal
    pub async fn execute(&self, user_id: UserId) -> UserResult<User> {
        let user = self
            .repo
            .delete(user_id)
            .await?
            .ok_or(UserError::NotFound)?;

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(user)
    }
}
