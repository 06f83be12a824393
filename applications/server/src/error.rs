/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mixtape_core::{FieldErrors, MixtapeError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(MixtapeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    pub fn playlist_not_found() -> Self {
        Self::NotFound("Playlist not found".to_string())
    }
}

impl From<FieldErrors> for ServerError {
    fn from(errors: FieldErrors) -> Self {
        ServerError::Validation(errors)
    }
}

impl From<MixtapeError> for ServerError {
    fn from(err: MixtapeError) -> Self {
        match err {
            MixtapeError::PlaylistNotFound(_) => ServerError::playlist_not_found(),
            MixtapeError::MembershipNotFound { .. } => {
                ServerError::NotFound("Song not found in playlist".to_string())
            }
            MixtapeError::NotFound { entity, .. } => {
                ServerError::NotFound(format!("{entity} not found"))
            }
            MixtapeError::SongIdConflict(id) => ServerError::Conflict(format!(
                "Song id {id} is already used by a different song"
            )),
            other @ MixtapeError::Database(_) => ServerError::Database(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
            }
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "message": msg })),
            ServerError::MissingParameter(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                internal()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                internal()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal server error" }),
    )
}
