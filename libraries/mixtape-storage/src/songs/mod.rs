use mixtape_core::{error::Result, types::*};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor};

fn from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        genre: row.get("genre"),
    }
}

/// Get song by ID
pub async fn get_by_id<'e, E>(executor: E, id: SongId) -> Result<Option<Song>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT id, title, artist, genre FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.as_ref().map(from_row))
}

/// Exact title lookup served by `idx_songs_title`.
///
/// Comparison uses the column's default `BINARY` collation, so it is
/// case-sensitive. When several songs share a title the lowest id is returned.
pub async fn find_by_title<'e, E>(executor: E, title: &str) -> Result<Option<Song>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        SELECT id, title, artist, genre
        FROM songs
        WHERE title = ?
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(title)
    .fetch_optional(executor)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// All songs sorted by title, then id
pub async fn get_all<'e, E>(executor: E) -> Result<Vec<Song>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query("SELECT id, title, artist, genre FROM songs ORDER BY title, id")
        .fetch_all(executor)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Insert a song under its caller-chosen id
pub async fn create<'e, E>(executor: E, song: &CreateSong) -> Result<Song>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO songs (id, title, artist, genre) VALUES (?, ?, ?, ?)")
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.genre)
        .execute(executor)
        .await?;

    tracing::info!(song_id = song.id, "Created song");

    Ok(song.clone().into())
}
