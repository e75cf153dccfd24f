//! HTTP Handlers
//!
//! Extractor rejections are taken as `Result` so that malformed input is
//! rendered through the same error envelope as every other failure.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::application::{
    CreateUserInput, CreateUserUseCase, DeleteAllUsersUseCase, DeleteUserUseCase, GetUserUseCase,
    ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::UserResult;
use crate::presentation::dto::{
    CreateUserRequest, CreateUserResponse, DeleteAllResponse, ErrorResponse, ListUsersQuery,
    UpdateUserRequest, UserListResponse, UserResponse,
};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /create
#[utoipa::path(
    post,
    path = "/create",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Id of the created user", body = CreateUserResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 422, description = "Missing, mistyped or blank fields", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> UserResult<Json<CreateUserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = CreateUserUseCase::new(state.repo.clone());

    let input = CreateUserInput {
        full_name: req.full_name,
        role: req.role,
        efficiency: req.efficiency,
    };

    let user_id = use_case.execute(input).await?;

    Ok(Json(CreateUserResponse::ok(user_id.get())))
}

/// GET /get
#[utoipa::path(
    get,
    path = "/get",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Matching users", body = UserListResponse)
    ),
    tag = "users"
)]
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> UserResult<Json<UserListResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute(query.role).await?;

    Ok(Json(UserListResponse::ok(users)))
}

/// GET /get/{user_id}
#[utoipa::path(
    get,
    path = "/get/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user, wrapped in a one-element list", body = UserListResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    user_id: Result<Path<i64>, PathRejection>,
) -> UserResult<Json<UserListResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(user_id) = user_id?;

    let use_case = GetUserUseCase::new(state.repo.clone());

    let user = use_case.execute(UserId::from_raw(user_id)).await?;

    Ok(Json(UserListResponse::ok([user])))
}

/// PATCH /update/{user_id}
#[utoipa::path(
    patch,
    path = "/update/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "The user after the update", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Null, mistyped or blank fields", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    user_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(user_id) = user_id?;
    let Json(req) = payload?;

    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let input = UpdateUserInput {
        full_name: req.full_name,
        role: req.role,
        efficiency: req.efficiency,
    };

    let user = use_case.execute(UserId::from_raw(user_id), input).await?;

    Ok(Json(UserResponse::ok(user)))
}

/// DELETE /delete/{user_id}
#[utoipa::path(
    delete,
    path = "/delete/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The deleted user's last state", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    user_id: Result<Path<i64>, PathRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(user_id) = user_id?;

    let use_case = DeleteUserUseCase::new(state.repo.clone());

    let user = use_case.execute(UserId::from_raw(user_id)).await?;

    Ok(Json(UserResponse::ok(user)))
}

/// DELETE /delete
#[utoipa::path(
    delete,
    path = "/delete",
    responses(
        (status = 200, description = "All users have been deleted", body = DeleteAllResponse)
    ),
    tag = "users"
)]
pub async fn delete_all_users<R>(
    State(state): State<UsersAppState<R>>,
) -> UserResult<Json<DeleteAllResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAllUsersUseCase::new(state.repo.clone());

    use_case.execute().await?;

    Ok(Json(DeleteAllResponse::ok()))
}
