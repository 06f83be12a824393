use crate::{playlist_songs, playlists, songs};
use async_trait::async_trait;
use mixtape_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Playlists
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn update_playlist(
        &self,
        id: PlaylistId,
        playlist: UpdatePlaylist,
    ) -> Result<Option<Playlist>> {
        playlists::update(&self.pool, id, playlist).await
    }

    async fn delete_playlist(&self, id: PlaylistId) -> Result<()> {
        playlists::delete(&self.pool, id).await
    }

    // Songs
    async fn get_song(&self, id: SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn find_song_by_title(&self, title: &str) -> Result<Option<Song>> {
        songs::find_by_title(&self.pool, title).await
    }

    // Memberships
    async fn add_song_to_playlist(
        &self,
        playlist_id: PlaylistId,
        song: CreateSong,
    ) -> Result<PlaylistSong> {
        playlist_songs::add_song(&self.pool, playlist_id, song).await
    }

    async fn find_membership(
        &self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<Option<PlaylistSong>> {
        playlist_songs::find(&self.pool, playlist_id, song_id).await
    }

    async fn delete_membership(&self, id: PlaylistSongId) -> Result<()> {
        playlist_songs::delete(&self.pool, id).await
    }
}
