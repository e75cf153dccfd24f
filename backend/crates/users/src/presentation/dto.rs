//! API DTOs (Data Transfer Objects)
//!
//! Every success body is an envelope `{success, result}`. The result shapes
//! are concrete types so the OpenAPI document names each one.

use kernel::patch::Patch;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

/// Request for POST /create
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub role: String,
    pub efficiency: i32,
}

/// Request for PATCH /update/{user_id}
///
/// Omitted keys are left untouched. Explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub full_name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub role: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub efficiency: Patch<i32>,
}

/// Query for GET /get
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Role of the users to filter by
    pub role: Option<String>,
}

// ============================================================================
// Result payloads
// ============================================================================

/// Full projection of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserView {
    pub id: i64,
    pub full_name: String,
    pub role: String,
    pub efficiency: i32,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            full_name: user.full_name.into_inner(),
            role: user.role.into_inner(),
            efficiency: user.efficiency,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedUser {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserList {
    pub users: Vec<UserView>,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Response for POST /create
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateUserResponse {
    pub success: bool,
    pub result: CreatedUser,
}

impl CreateUserResponse {
    pub fn ok(id: i64) -> Self {
        Self {
            success: true,
            result: CreatedUser { id },
        }
    }
}

/// Response for GET /get and GET /get/{user_id}
///
/// The single-user lookup also answers with a one-element list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserListResponse {
    pub success: bool,
    pub result: UserList,
}

impl UserListResponse {
    pub fn ok(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            success: true,
            result: UserList {
                users: users.into_iter().map(UserView::from).collect(),
            },
        }
    }
}

/// Response for PATCH /update/{user_id} and DELETE /delete/{user_id}
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    pub result: UserView,
}

impl UserResponse {
    pub fn ok(user: User) -> Self {
        Self {
            success: true,
            result: user.into(),
        }
    }
}

/// Response for DELETE /delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteAllResponse {
    pub success: bool,
}

impl DeleteAllResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Error schema (documentation only)
// ============================================================================

/// OpenAPI view of the envelope rendered by `kernel::error::AppError`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// SCREAMING_SNAKE_CASE error kind, e.g. `NOT_FOUND`
    pub kind: String,
    pub detail: String,
    /// Present on validation failures only
    pub fields: Option<Vec<FieldViolationSchema>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolationSchema {
    pub field: String,
    pub reason: String,
}
