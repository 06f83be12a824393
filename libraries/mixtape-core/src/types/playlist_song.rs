//! Playlist membership types

use super::ids::{PlaylistId, PlaylistSongId, SongId};
use serde::{Deserialize, Serialize};

/// Link row associating one playlist with one song.
///
/// `(playlist_id, song_id)` is not unique: the same song may be linked to a
/// playlist more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSong {
    pub id: PlaylistSongId,
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
}
