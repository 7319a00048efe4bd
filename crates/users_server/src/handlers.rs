//! HTTP request handlers

use axum::{Router, routing::get};

pub mod meta;
pub mod users;

use crate::state::AppState;

/// Build all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::api_info))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::replace_user)
                .patch(users::partial_update_user)
                .delete(users::delete_user),
        )
}
