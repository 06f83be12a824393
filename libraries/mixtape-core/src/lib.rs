//! Mixtape Core
//!
//! Storage-agnostic domain types, request validation, and error handling for
//! the Mixtape playlist service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `PlaylistSong`
//! - **Validation**: typed request payloads built from untyped JSON bodies
//! - **Storage Trait**: `StorageContext`, implemented by `mixtape-storage`
//! - **Error Handling**: unified `MixtapeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::validation::{PlaylistPayload, Validate};
//! use serde_json::json;
//!
//! let payload = PlaylistPayload::validate(&json!({
//!     "name": "Drive",
//!     "description": "road trip",
//! }))
//! .unwrap();
//!
//! assert_eq!(payload.name, "Drive");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{MixtapeError, Result};
pub use storage::StorageContext;
pub use validation::{FieldErrors, Validate};

pub use types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, PlaylistSong, PlaylistSongId, Song, SongId,
    UpdatePlaylist,
};

#[cfg(feature = "mock")]
pub use storage::MockStorageContext;
