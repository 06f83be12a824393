/// Playlists API routes
use super::{body_or_null, MessageResponse};
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mixtape_core::{types::parse_id, Playlist, PlaylistId};
use serde_json::Value;

/// Non-numeric ids can never match a row
fn playlist_id(raw: &str) -> Result<PlaylistId> {
    parse_id(raw).ok_or_else(ServerError::playlist_not_found)
}

/// POST /playlist/create
pub async fn create_playlist(
    State(app_state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    app_state.playlists.create(&body_or_null(body)).await?;

    Ok((
        StatusCode::CREATED,
        MessageResponse::new("New playlist added successfully"),
    ))
}

/// GET /playlist/:id
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Playlist>> {
    let playlist = app_state.playlists.get(playlist_id(&id)?).await?;
    Ok(Json(playlist))
}

/// PUT /playlist/update/:id
/// Full replacement of name and description
pub async fn update_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<MessageResponse>> {
    app_state
        .playlists
        .update(playlist_id(&id)?, &body_or_null(body))
        .await?;

    Ok(MessageResponse::new("Playlist updated successfully"))
}

/// DELETE /playlist/delete/:id
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    app_state.playlists.delete(playlist_id(&id)?).await?;
    Ok(MessageResponse::new("Playlist deleted successfully"))
}
