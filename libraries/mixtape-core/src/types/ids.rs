//! ID types for Mixtape entities
//!
//! All identifiers are SQLite integer primary keys.

/// Song identifier (the catalog id supplied when the song is first added)
pub type SongId = i64;

/// Playlist identifier (generated on insert)
pub type PlaylistId = i64;

/// Membership row identifier (generated on insert)
pub type PlaylistSongId = i64;

/// Parse an identifier taken from a URL path segment.
///
/// Returns `None` for anything that is not a base-10 integer, which callers
/// treat the same as an id that does not exist.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
