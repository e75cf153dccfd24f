//! Users Router

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the users router with PostgreSQL repository
pub fn users_router(repo: PgUserRepository) -> Router {
    users_router_generic(repo)
}

/// Create a generic users router for any repository implementation
pub fn users_router_generic<R>(repo: R) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/create", post(handlers::create_user::<R>))
        .route("/get", get(handlers::list_users::<R>))
        .route("/get/{user_id}", get(handlers::get_user::<R>))
        .route("/update/{user_id}", patch(handlers::update_user::<R>))
        .route("/delete/{user_id}", delete(handlers::delete_user::<R>))
        .route("/delete", delete(handlers::delete_all_users::<R>))
        .with_state(state)
}
