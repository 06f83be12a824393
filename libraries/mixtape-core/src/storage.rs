//! Storage trait for the playlist service

use crate::error::Result;
use crate::types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, PlaylistSong, PlaylistSongId, Song, SongId,
    UpdatePlaylist,
};
use async_trait::async_trait;

/// Storage context providing access to database operations
///
/// Services receive an explicitly constructed implementation of this trait
/// rather than reaching for a global connection. The `SQLite` implementation
/// lives in `mixtape-storage`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Playlists
    // ========================================================================

    /// Create a playlist with a generated id
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Get playlist by ID
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Replace name and description; `None` if the playlist does not exist
    async fn update_playlist(
        &self,
        id: PlaylistId,
        playlist: UpdatePlaylist,
    ) -> Result<Option<Playlist>>;

    /// Delete a playlist and its memberships
    async fn delete_playlist(&self, id: PlaylistId) -> Result<()>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Get song by ID
    async fn get_song(&self, id: SongId) -> Result<Option<Song>>;

    /// Exact, case-sensitive title lookup. Lowest id wins among duplicates.
    async fn find_song_by_title(&self, title: &str) -> Result<Option<Song>>;

    // ========================================================================
    // Memberships
    // ========================================================================

    /// Insert the song (or reuse an identical one) and link it to the
    /// playlist. Both writes commit together or not at all.
    async fn add_song_to_playlist(
        &self,
        playlist_id: PlaylistId,
        song: CreateSong,
    ) -> Result<PlaylistSong>;

    /// First membership row (lowest id) linking the song to the playlist
    async fn find_membership(
        &self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<Option<PlaylistSong>>;

    /// Delete a single membership row
    async fn delete_membership(&self, id: PlaylistSongId) -> Result<()>;
}
