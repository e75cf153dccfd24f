//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! One use case per HTTP operation.

pub mod create_user;
pub mod delete_all_users;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

// Re-exports
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_all_users::DeleteAllUsersUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
