//! List CRUD handlers.
//!
//! Each handler decodes the path and body, calls exactly one repository
//! operation, and returns the resulting row as JSON with status 200.
//!
//! Bodies are decoded as JSON whatever `Content-Type` the client sent.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    Json,
};

use todolist_core::list::{CreateListItem, ListItem, UpdateListItem};

use crate::{handlers::ApiError, state::AppState};

/// List all items (GET /lists).
pub async fn list_lists(State(state): State<AppState>) -> Result<Json<Vec<ListItem>>, ApiError> {
    let items = state.list_repo.list_all().await?;

    tracing::debug!(count = items.len(), "Listed items");

    Ok(Json(items))
}

/// Create a new item (POST /lists).
pub async fn create_list(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ListItem>, ApiError> {
    let Json(payload) = Json::<CreateListItem>::from_bytes(&body)?;

    tracing::debug!(payload = ?payload, "Received create list request");

    let item = state.list_repo.insert(&payload).await?;

    tracing::info!(list_id = item.id, title = %item.title, "Created list item");

    Ok(Json(item))
}

/// Get a single item by ID (GET /list/{id}).
pub async fn get_list(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ListItem>, ApiError> {
    let Path(id) = id?;

    let item = state.list_repo.get_by_id(id).await?;

    Ok(Json(item))
}

/// Partially update an item by ID (PUT /list/{id}).
pub async fn update_list(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<ListItem>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = Json::<UpdateListItem>::from_bytes(&body)?;

    tracing::debug!(list_id = id, payload = ?payload, "Received update list request");

    let item = state.list_repo.update_by_id(id, &payload).await?;

    tracing::info!(list_id = id, "Updated list item");

    Ok(Json(item))
}

/// Delete an item by ID (DELETE /list/{id}).
///
/// Responds with the row as it was just before deletion.
pub async fn delete_list(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ListItem>, ApiError> {
    let Path(id) = id?;

    tracing::debug!(list_id = id, "Received delete list request");

    let item = state.list_repo.delete_by_id(id).await?;

    tracing::info!(list_id = id, "Deleted list item");

    Ok(Json(item))
}

/// Any method on `/list/` with a missing or multi-segment ID.
pub async fn invalid_list_id(uri: Uri) -> ApiError {
    let raw = uri.path().trim_start_matches("/list/");
    ApiError::BadRequest(format!("Invalid list ID: `{raw}`"))
}

/// Fallback for unsupported methods on the list routes.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
