//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entity, value objects, repository trait
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, OpenAPI document
//!
//! ## HTTP surface
//! | Method | Path | Result |
//! |---|---|---|
//! | POST | `/create` | `{id}` |
//! | GET | `/get?role=` | `{users: [...]}` |
//! | GET | `/get/{user_id}` | `{users: [user]}` |
//! | PATCH | `/update/{user_id}` | user |
//! | DELETE | `/delete/{user_id}` | deleted user |
//! | DELETE | `/delete` | (none) |
//!
//! Every success body is `{"success": true, "result": ...}`; every failure
//! is rendered by `kernel::error::AppError`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::openapi::{ApiDoc, docs_router};
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
