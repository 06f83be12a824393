/// Song search API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use mixtape_core::Song;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: Option<String>,
}

/// GET /playlist/search/:title?query=...
/// GET /playlist/search?query=...
///
/// The `query` parameter is authoritative; the path segment is ignored.
pub async fn search_songs(
    State(app_state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Song>> {
    let song = app_state.search.search(params.query.as_deref()).await?;
    Ok(Json(song))
}
