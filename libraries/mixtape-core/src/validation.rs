//! Request payload validation
//!
//! Inbound bodies arrive as untyped JSON. Each payload type implements
//! [`Validate`], which either produces a fully populated record or a
//! [`FieldErrors`] map describing every offending field. Partial records are
//! never returned.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::{CreatePlaylist, CreateSong, PlaylistId, SongId, UpdatePlaylist};

/// Widest text value accepted for any string column
pub const MAX_TEXT_LEN: usize = 255;

/// Key used for errors that concern the body as a whole
pub const SCHEMA_KEY: &str = "_schema";

pub const MSG_INVALID_INPUT: &str = "Invalid input type.";
pub const MSG_MISSING: &str = "Missing data for required field.";
pub const MSG_NULL: &str = "Field may not be null.";
pub const MSG_NOT_STRING: &str = "Not a valid string.";
pub const MSG_NOT_INTEGER: &str = "Not a valid integer.";
pub const MSG_EMPTY: &str = "Field may not be empty.";
pub const MSG_NUL_CHAR: &str = "Field may not contain null characters.";
pub const MSG_UNKNOWN: &str = "Unknown field.";

/// Per-field validation messages, serialized as `{"field": ["message", ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Build a typed record from an untyped request body
pub trait Validate: Sized {
    fn validate(body: &Value) -> Result<Self, FieldErrors>;
}

/// Walks a JSON object, collecting errors instead of stopping at the first one
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    fn new(body: &'a Value) -> Result<Self, FieldErrors> {
        match body {
            Value::Object(object) => Ok(Self {
                object,
                errors: FieldErrors::new(),
            }),
            _ => Err(FieldErrors::single(SCHEMA_KEY, MSG_INVALID_INPUT)),
        }
    }

    fn present(&mut self, field: &str) -> Option<&'a Value> {
        match self.object.get(field) {
            None => {
                self.errors.add(field, MSG_MISSING);
                None
            }
            Some(Value::Null) => {
                self.errors.add(field, MSG_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Non-blank string of at most `MAX_TEXT_LEN` characters.
    ///
    /// NUL is refused because SQLite's `length()` stops counting at it, which
    /// would trip the column CHECK constraints.
    fn text(&mut self, field: &str) -> Option<String> {
        let Value::String(text) = self.present(field)? else {
            self.errors.add(field, MSG_NOT_STRING);
            return None;
        };

        if text.trim().is_empty() {
            self.errors.add(field, MSG_EMPTY);
            return None;
        }

        if text.contains('\0') {
            self.errors.add(field, MSG_NUL_CHAR);
            return None;
        }

        if text.chars().count() > MAX_TEXT_LEN {
            self.errors
                .add(field, format!("Longer than maximum length {MAX_TEXT_LEN}."));
            return None;
        }

        Some(text.clone())
    }

    /// Integer given either as a JSON number or as a numeric string
    fn integer(&mut self, field: &str) -> Option<i64> {
        let parsed = match self.present(field)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        };

        if parsed.is_none() {
            self.errors.add(field, MSG_NOT_INTEGER);
        }
        parsed
    }

    fn finish(mut self, allowed: &[&str]) -> Result<(), FieldErrors> {
        for key in self.object.keys() {
            if !allowed.contains(&key.as_str()) {
                self.errors.add(key.clone(), MSG_UNKNOWN);
            }
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Body of playlist create and update requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistPayload {
    pub name: String,
    pub description: String,
}

impl Validate for PlaylistPayload {
    fn validate(body: &Value) -> Result<Self, FieldErrors> {
        let mut reader = FieldReader::new(body)?;
        let name = reader.text("name");
        let description = reader.text("description");
        reader.finish(&["name", "description", "id"])?;

        match (name, description) {
            (Some(name), Some(description)) => Ok(Self { name, description }),
            _ => Err(FieldErrors::single(SCHEMA_KEY, MSG_INVALID_INPUT)),
        }
    }
}

impl From<PlaylistPayload> for CreatePlaylist {
    fn from(payload: PlaylistPayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
        }
    }
}

impl From<PlaylistPayload> for UpdatePlaylist {
    fn from(payload: PlaylistPayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
        }
    }
}

/// Body of add-song requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPayload {
    pub title: String,
    pub artist: String,
    pub genre: String,
}

impl SongPayload {
    pub fn into_create(self, id: SongId) -> CreateSong {
        CreateSong {
            id,
            title: self.title,
            artist: self.artist,
            genre: self.genre,
        }
    }
}

impl Validate for SongPayload {
    fn validate(body: &Value) -> Result<Self, FieldErrors> {
        let mut reader = FieldReader::new(body)?;
        let title = reader.text("title");
        let artist = reader.text("artist");
        let genre = reader.text("genre");
        reader.finish(&["title", "artist", "genre", "id"])?;

        match (title, artist, genre) {
            (Some(title), Some(artist), Some(genre)) => Ok(Self {
                title,
                artist,
                genre,
            }),
            _ => Err(FieldErrors::single(SCHEMA_KEY, MSG_INVALID_INPUT)),
        }
    }
}

/// Membership coordinates, usually assembled from URL path segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistSongPayload {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
}

impl PlaylistSongPayload {
    /// Validate the raw path segments of a membership route
    pub fn from_path(playlist_id: &str, song_id: &str) -> Result<Self, FieldErrors> {
        Self::validate(&serde_json::json!({
            "playlist_id": playlist_id,
            "song_id": song_id,
        }))
    }
}

impl Validate for PlaylistSongPayload {
    fn validate(body: &Value) -> Result<Self, FieldErrors> {
        let mut reader = FieldReader::new(body)?;
        let playlist_id = reader.integer("playlist_id");
        let song_id = reader.integer("song_id");
        reader.finish(&["playlist_id", "song_id"])?;

        match (playlist_id, song_id) {
            (Some(playlist_id), Some(song_id)) => Ok(Self {
                playlist_id,
                song_id,
            }),
            _ => Err(FieldErrors::single(SCHEMA_KEY, MSG_INVALID_INPUT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn playlist_payload_accepts_complete_body() {
        let payload = PlaylistPayload::validate(&json!({
            "name": "Drive",
            "description": "road trip",
        }))
        .unwrap();

        assert_eq!(payload.name, "Drive");
        assert_eq!(payload.description, "road trip");
    }

    #[test]
    fn playlist_payload_tolerates_id() {
        let payload = PlaylistPayload::validate(&json!({
            "id": 99,
            "name": "Drive",
            "description": "road trip",
        }));
        assert!(payload.is_ok());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = PlaylistPayload::validate(&json!({})).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(&[MSG_MISSING.to_string()][..]));
        assert_eq!(
            errors.get("description"),
            Some(&[MSG_MISSING.to_string()][..])
        );
    }

    #[test]
    fn wrong_types_and_nulls_are_reported_per_field() {
        let errors = SongPayload::validate(&json!({
            "title": 12,
            "artist": null,
            "genre": "Pop",
        }))
        .unwrap_err();

        assert_eq!(errors.get("title"), Some(&[MSG_NOT_STRING.to_string()][..]));
        assert_eq!(errors.get("artist"), Some(&[MSG_NULL.to_string()][..]));
        assert!(errors.get("genre").is_none());
    }

    #[test]
    fn blank_strings_are_rejected() {
        let errors = PlaylistPayload::validate(&json!({
            "name": "   ",
            "description": "",
        }))
        .unwrap_err();

        assert_eq!(errors.get("name"), Some(&[MSG_EMPTY.to_string()][..]));
        assert_eq!(errors.get("description"), Some(&[MSG_EMPTY.to_string()][..]));
    }

    #[test]
    fn overlong_strings_are_rejected() {
        let errors = SongPayload::validate(&json!({
            "title": "x".repeat(MAX_TEXT_LEN + 1),
            "artist": "X",
            "genre": "Pop",
        }))
        .unwrap_err();

        assert_eq!(
            errors.get("title"),
            Some(&["Longer than maximum length 255.".to_string()][..])
        );

        let at_limit = SongPayload::validate(&json!({
            "title": "é".repeat(MAX_TEXT_LEN),
            "artist": "X",
            "genre": "Pop",
        }));
        assert!(at_limit.is_ok());
    }

    #[test]
    fn nul_characters_are_rejected() {
        let errors = SongPayload::validate(&json!({
            "title": "\u{0}Neon",
            "artist": "X\u{0}",
            "genre": "Pop",
        }))
        .unwrap_err();

        assert_eq!(errors.get("title"), Some(&[MSG_NUL_CHAR.to_string()][..]));
        assert_eq!(errors.get("artist"), Some(&[MSG_NUL_CHAR.to_string()][..]));
        assert!(errors.get("genre").is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let errors = PlaylistPayload::validate(&json!({
            "name": "Drive",
            "description": "road trip",
            "owner": "me",
        }))
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["owner"]);
        assert_eq!(errors.get("owner"), Some(&[MSG_UNKNOWN.to_string()][..]));
    }

    #[test]
    fn non_object_bodies_are_schema_errors() {
        for body in [json!(null), json!([1, 2]), json!("Drive"), json!(3)] {
            let errors = PlaylistPayload::validate(&body).unwrap_err();
            assert_eq!(
                errors.get(SCHEMA_KEY),
                Some(&[MSG_INVALID_INPUT.to_string()][..])
            );
        }
    }

    #[test]
    fn membership_path_segments_are_coerced() {
        let payload = PlaylistSongPayload::from_path("1", "5").unwrap();
        assert_eq!(payload.playlist_id, 1);
        assert_eq!(payload.song_id, 5);

        let errors = PlaylistSongPayload::from_path("1", "five").unwrap_err();
        assert_eq!(errors.get("song_id"), Some(&[MSG_NOT_INTEGER.to_string()][..]));
        assert!(errors.get("playlist_id").is_none());
    }

    #[test]
    fn song_payload_converts_with_path_id() {
        let song = SongPayload::validate(&json!({
            "title": "Neon",
            "artist": "X",
            "genre": "Pop",
        }))
        .unwrap()
        .into_create(5);

        assert_eq!(song.id, 5);
        assert_eq!(song.title, "Neon");
    }

    #[test]
    fn display_lists_each_message() {
        let errors = PlaylistPayload::validate(&json!({ "name": "Drive" })).unwrap_err();
        assert_eq!(errors.to_string(), "description: Missing data for required field.");
    }
}
