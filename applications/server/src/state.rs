/// Shared application state
use crate::services::{MembershipService, PlaylistService, SearchService};
use mixtape_core::StorageContext;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub playlists: Arc<PlaylistService>,
    pub membership: Arc<MembershipService>,
    pub search: Arc<SearchService>,
}

impl AppState {
    /// Wire every service to the same storage handle
    pub fn new(db: Arc<dyn StorageContext>) -> Self {
        Self {
            playlists: Arc::new(PlaylistService::new(Arc::clone(&db))),
            membership: Arc::new(MembershipService::new(Arc::clone(&db))),
            search: Arc::new(SearchService::new(db)),
        }
    }
}
