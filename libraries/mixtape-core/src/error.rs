/// Core error types for Mixtape
use thiserror::Error;

use crate::types::{PlaylistId, SongId};

/// Result type alias using `MixtapeError`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Core error type for Mixtape
#[derive(Error, Debug)]
pub enum MixtapeError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// No membership row links the song to the playlist
    #[error("Song {song_id} not found in playlist {playlist_id}")]
    MembershipNotFound {
        playlist_id: PlaylistId,
        song_id: SongId,
    },

    /// A song id is already taken by a song with different fields
    #[error("Song id already in use: {0}")]
    SongIdConflict(SongId),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl MixtapeError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// True for any of the "row does not exist" variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::PlaylistNotFound(_) | Self::MembershipNotFound { .. }
        )
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MixtapeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_are_classified() {
        assert!(MixtapeError::PlaylistNotFound(3).is_not_found());
        assert!(MixtapeError::not_found("Song", 7).is_not_found());
        assert!(MixtapeError::MembershipNotFound {
            playlist_id: 1,
            song_id: 2
        }
        .is_not_found());
        assert!(!MixtapeError::SongIdConflict(2).is_not_found());
        assert!(!MixtapeError::Database("disk full".to_string()).is_not_found());
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = MixtapeError::not_found("Song", 42);
        assert_eq!(err.to_string(), "Song not found: 42");
    }
}
