/// Playlist membership API routes
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
use mixtape_core::{types::parse_id, validation::PlaylistSongPayload};
use serde_json::Value;

/// POST /playlist/:id/add_song/:song_id
/// Body: `{"title", "artist", "genre"}`
pub async fn add_song(
    Path((playlist_id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let target = PlaylistSongPayload::from_path(&playlist_id, &song_id)?;

    app_state
        .membership
        .add_song(target, &body_or_null(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        MessageResponse::new("New song added successfully to the playlist"),
    ))
}

/// DELETE /playlist/:id/remove_song/:song_id
pub async fn remove_song(
    Path((playlist_id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let (Some(playlist_id), Some(song_id)) = (parse_id(&playlist_id), parse_id(&song_id)) else {
        return Err(ServerError::NotFound("Song not found in playlist".to_string()));
    };

    app_state
        .membership
        .remove_song(playlist_id, song_id)
        .await?;

    Ok(MessageResponse::new("Song removed from playlist successfully"))
}
