/// HTTP router
use crate::{api, state::AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
///
/// The playlist id always occupies the second path segment under the name
/// `:id`, so the static `create`/`update`/`delete`/`search` segments take
/// priority over it.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        // Playlists
        .route("/playlist/create", post(api::playlists::create_playlist))
        .route("/playlist/:id", get(api::playlists::get_playlist))
        .route("/playlist/update/:id", put(api::playlists::update_playlist))
        .route("/playlist/delete/:id", delete(api::playlists::delete_playlist))
        // Songs in playlists
        .route("/playlist/:id/add_song/:song_id", post(api::songs::add_song))
        .route(
            "/playlist/:id/remove_song/:song_id",
            delete(api::songs::remove_song),
        )
        // Search
        .route("/playlist/search", get(api::search::search_songs))
        .route("/playlist/search/:title", get(api::search::search_songs))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
