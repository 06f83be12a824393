/// Exact title search
use crate::error::{Result, ServerError};
use mixtape_core::{Song, StorageContext};
use std::sync::Arc;

pub struct SearchService {
    db: Arc<dyn StorageContext>,
}

impl SearchService {
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self { db }
    }

    /// Find a song whose title equals `query` exactly.
    ///
    /// A missing or empty query is rejected before storage is touched.
    pub async fn search(&self, query: Option<&str>) -> Result<Song> {
        let title = match query {
            Some(title) if !title.is_empty() => title,
            _ => {
                return Err(ServerError::MissingParameter(
                    "No search query provided".to_string(),
                ))
            }
        };

        tracing::debug!(title, "Searching songs by title");

        self.db
            .find_song_by_title(title)
            .await?
            .ok_or_else(|| ServerError::NotFound("No songs found with that title".to_string()))
    }
}
