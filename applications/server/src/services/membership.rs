/// Adding songs to and removing songs from playlists
use crate::error::Result;
use mixtape_core::{
    validation::{PlaylistSongPayload, SongPayload, Validate},
    MixtapeError, PlaylistId, PlaylistSong, SongId, StorageContext,
};
use serde_json::Value;
use std::sync::Arc;

pub struct MembershipService {
    db: Arc<dyn StorageContext>,
}

impl MembershipService {
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self { db }
    }

    /// Store the song under `target.song_id` and link it to the playlist.
    ///
    /// The storage layer performs both writes in one transaction, so a
    /// failure never leaves a song without its membership.
    pub async fn add_song(
        &self,
        target: PlaylistSongPayload,
        body: &Value,
    ) -> Result<PlaylistSong> {
        let song = SongPayload::validate(body)?.into_create(target.song_id);
        let membership = self.db.add_song_to_playlist(target.playlist_id, song).await?;
        Ok(membership)
    }

    /// Remove the first membership linking the song to the playlist.
    /// The song itself stays in the catalog.
    pub async fn remove_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        let membership = self
            .db
            .find_membership(playlist_id, song_id)
            .await?
            .ok_or(MixtapeError::MembershipNotFound {
                playlist_id,
                song_id,
            })?;

        // A concurrent removal may have taken the row first
        self.db
            .delete_membership(membership.id)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    MixtapeError::MembershipNotFound {
                        playlist_id,
                        song_id,
                    }
                } else {
                    err
                }
            })?;
        Ok(())
    }
}
