/// Playlist create/read/update/delete
use crate::error::{Result, ServerError};
use mixtape_core::{
    validation::{PlaylistPayload, Validate},
    Playlist, PlaylistId, StorageContext,
};
use serde_json::Value;
use std::sync::Arc;

pub struct PlaylistService {
    db: Arc<dyn StorageContext>,
}

impl PlaylistService {
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self { db }
    }

    /// Validate the body and persist a new playlist. Duplicate names are fine.
    pub async fn create(&self, body: &Value) -> Result<Playlist> {
        let payload = PlaylistPayload::validate(body)?;
        let playlist = self.db.create_playlist(payload.into()).await?;
        Ok(playlist)
    }

    pub async fn get(&self, id: PlaylistId) -> Result<Playlist> {
        self.db
            .get_playlist(id)
            .await?
            .ok_or_else(ServerError::playlist_not_found)
    }

    /// Replace name and description.
    ///
    /// An unknown id is reported before the body is looked at.
    pub async fn update(&self, id: PlaylistId, body: &Value) -> Result<Playlist> {
        self.get(id).await?;

        let payload = PlaylistPayload::validate(body)?;
        self.db
            .update_playlist(id, payload.into())
            .await?
            .ok_or_else(ServerError::playlist_not_found)
    }

    /// Delete a playlist along with its memberships
    pub async fn delete(&self, id: PlaylistId) -> Result<()> {
        self.db.delete_playlist(id).await?;
        Ok(())
    }
}
