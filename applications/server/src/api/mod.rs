/// API route modules
pub mod health;
pub mod playlists;
pub mod search;
pub mod songs;

use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// `{"message": ...}` confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Unwrap an optional JSON body. A missing or unparseable body becomes
/// `null`, which validation reports as an invalid input type.
pub(crate) fn body_or_null(body: Option<Json<Value>>) -> Value {
    body.map_or(Value::Null, |Json(value)| value)
}
