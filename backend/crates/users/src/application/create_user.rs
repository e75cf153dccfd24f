//! Create User Use Case

use std::sync::Arc;

use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{full_name::FullName, role_name::RoleName, user_id::UserId};
use crate::error::{UserError, UserResult};

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub full_name: String,
    pub role: String,
    pub efficiency: i32,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<UserId> {
        let full_name =
            FullName::new(input.full_name).map_err(|e| UserError::invalid_text("full_name", e))?;
        let role = RoleName::new(input.role).map_err(|e| UserError::invalid_text("role", e))?;

        let user = NewUser {
            full_name,
            role,
            efficiency: input.efficiency,
        };

        let user_id = self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user_id,
            role = %user.role,
            "User created"
        );

        Ok(user_id)
    }
}
