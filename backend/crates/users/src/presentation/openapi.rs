//! OpenAPI documentation
//!
//! Serves the generated document at `/openapi.json` and Swagger UI at
//! `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::presentation::dto::{
    CreateUserRequest, CreateUserResponse, CreatedUser, DeleteAllResponse, ErrorResponse,
    FieldViolationSchema, UpdateUserRequest, UserList, UserListResponse, UserResponse, UserView,
};

/// OpenAPI document for the users API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "API documentation for managing users"
    ),
    paths(
        crate::presentation::handlers::create_user,
        crate::presentation::handlers::list_users,
        crate::presentation::handlers::get_user,
        crate::presentation::handlers::update_user,
        crate::presentation::handlers::delete_user,
        crate::presentation::handlers::delete_all_users,
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserView,
        CreatedUser,
        UserList,
        CreateUserResponse,
        UserListResponse,
        UserResponse,
        DeleteAllResponse,
        ErrorResponse,
        FieldViolationSchema,
    )),
    tags(
        (name = "users", description = "Create, list, fetch, update and delete users")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by `/openapi.json`
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/create",
            "/get",
            "/get/{user_id}",
            "/update/{user_id}",
            "/delete/{user_id}",
            "/delete",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn test_document_registers_user_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("UserView"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
