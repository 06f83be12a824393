//! Song types

use super::ids::SongId;
use serde::{Deserialize, Serialize};

/// A track in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub genre: String,
}

/// Data for creating a new song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSong {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub genre: String,
}

impl CreateSong {
    /// True when an existing row carries exactly these fields
    pub fn matches(&self, song: &Song) -> bool {
        self.id == song.id
            && self.title == song.title
            && self.artist == song.artist
            && self.genre == song.genre
    }
}

impl From<CreateSong> for Song {
    fn from(song: CreateSong) -> Self {
        Self {
            id: song.id,
            title: song.title,
            artist: song.artist,
            genre: song.genre,
        }
    }
}
