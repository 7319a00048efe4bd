//! User CRUD handlers
//!
//! Every handler takes the store lock once, for a single store call, so each
//! operation is atomic with respect to concurrent requests. Extractor
//! rejections (malformed JSON, non-integer path ids) are converted to 422
//! responses through [`ApiError`].

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use users_core::User;

use crate::{
    error::ApiError,
    requests::{CreateUserRequest, PartialUpdateUserRequest, ReplaceUserRequest},
    responses::DeleteUserResponse,
    state::AppState,
};

fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.is_empty() {
        return Err(ApiError::validation("name must not be empty"));
    }
    Ok(())
}

/// List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.lock().list())
}

/// Get a single user by id
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let user = state.store.lock().get(id)?;
    Ok(Json(user))
}

/// Create a new user; responds 201 with the created record
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(request) = body?;
    validate_name(&request.name)?;

    let user = state.store.lock().create(request.name, request.email);
    tracing::debug!(user_id = user.id, "created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace both mutable fields of an existing user
pub async fn replace_user(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<ReplaceUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let Json(request) = body?;
    validate_name(&request.name)?;

    let user = state.store.lock().replace(id, request.name, request.email)?;
    Ok(Json(user))
}

/// Update only the fields present in the request body
pub async fn partial_update_user(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<PartialUpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let Json(request) = body?;
    if let Some(name) = &request.name {
        validate_name(name)?;
    }

    let user = state
        .store
        .lock()
        .partial_update(id, request.name, request.email)?;
    Ok(Json(user))
}

/// Delete a user; responds with a confirmation message
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let Path(id) = path?;
    let user = state.store.lock().delete(id)?;
    tracing::debug!(user_id = user.id, "deleted user");

    Ok(Json(DeleteUserResponse {
        message: format!("User {} deleted successfully", user.name),
    }))
}
