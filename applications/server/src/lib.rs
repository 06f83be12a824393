//! Mixtape Server Library
//!
//! HTTP API for managing playlists, their songs, and title search.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{MembershipService, PlaylistService, SearchService};
pub use state::AppState;
