//! Delete All Users Use Case

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// Delete all users use case
pub struct DeleteAllUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAllUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Succeeds on an empty table too
    pub async fn execute(&self) -> UserResult<u64> {
        let deleted = self.repo.delete_all().await?;

        tracing::info!(users_deleted = deleted, "All users deleted");

        Ok(deleted)
    }
}
