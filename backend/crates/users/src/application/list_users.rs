//! List Users Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::role_name::RoleName;
use crate::error::UserResult;

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A missing or empty `role` lists everybody. Any other value filters,
    /// and a value no stored role could hold matches nobody.
    pub async fn execute(&self, role: Option<String>) -> UserResult<Vec<User>> {
        let role = match role {
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) => match RoleName::new(raw) {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::debug!(error = %e, "Role filter cannot match any user");
                    return Ok(Vec::new());
                }
            },
        };

        let users = self.repo.list(role.as_ref()).await?;

        tracing::debug!(
            role = role.as_ref().map(RoleName::as_str),
            count = users.len(),
            "Listed users"
        );

        Ok(users)
    }
}
