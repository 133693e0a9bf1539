//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{User, UserId, UserInput};

/// Create the user CRUD router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Ids that are not non-negative integers never match a user
fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>()
        .map_err(|_| ApiError::not_found(format!("User '{}' not found", raw)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserInput>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(username = %request.username, "Creating user");

    let user = state.user_service.create(request).await?;
    let location = format!("/users/{}", user.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user),
    ))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    Ok(Json(users))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let id = parse_user_id(&user_id)?;
    let user = state.user_service.get(id).await?;

    Ok(Json(user))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UserInput>,
) -> Result<Json<User>, ApiError> {
    debug!(user_id = %user_id, "Updating user");

    let id = parse_user_id(&user_id)?;
    let user = state.user_service.update(id, request).await?;

    Ok(Json(user))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    let id = parse_user_id(&user_id)?;
    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
