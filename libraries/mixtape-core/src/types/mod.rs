mod ids;
mod playlist;
mod playlist_song;
mod song;

pub use ids::{parse_id, PlaylistId, PlaylistSongId, SongId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
pub use playlist_song::PlaylistSong;
pub use song::{CreateSong, Song};
