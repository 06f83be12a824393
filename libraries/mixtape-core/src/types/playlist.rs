//! Playlist types

use super::ids::PlaylistId;
use serde::{Deserialize, Serialize};

/// A named, described collection of songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: String,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: String,
}

/// Full replacement of a playlist's editable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    pub name: String,
    pub description: String,
}
