/// Server services
pub mod membership;
pub mod playlists;
pub mod search;

pub use membership::MembershipService;
pub use playlists::PlaylistService;
pub use search::SearchService;
