use crate::{playlists, songs};
use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};

fn from_row(row: &SqliteRow) -> PlaylistSong {
    PlaylistSong {
        id: row.get("id"),
        playlist_id: row.get("playlist_id"),
        song_id: row.get("song_id"),
    }
}

/// Add a song to a playlist.
///
/// Runs in one transaction: the playlist must exist, the song row is created
/// (or an identical existing row is reused), then the membership row is
/// inserted. Any error drops the transaction, rolling back both writes.
pub async fn add_song(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    song: CreateSong,
) -> Result<PlaylistSong> {
    let mut tx = pool.begin().await?;

    if playlists::get_by_id(&mut *tx, playlist_id).await?.is_none() {
        return Err(MixtapeError::PlaylistNotFound(playlist_id));
    }

    match songs::get_by_id(&mut *tx, song.id).await? {
        Some(existing) if song.matches(&existing) => {
            tracing::debug!(song_id = song.id, "Reusing existing song");
        }
        Some(_) => return Err(MixtapeError::SongIdConflict(song.id)),
        None => {
            songs::create(&mut *tx, &song).await?;
        }
    }

    let row = sqlx::query(
        r#"
        INSERT INTO playlist_songs (playlist_id, song_id)
        VALUES (?, ?)
        RETURNING id, playlist_id, song_id
        "#,
    )
    .bind(playlist_id)
    .bind(song.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    let membership = from_row(&row);
    tracing::info!(
        playlist_id,
        song_id = membership.song_id,
        membership_id = membership.id,
        "Added song to playlist"
    );

    Ok(membership)
}

/// First membership row (lowest id) for the pair, if any
pub async fn find<'e, E>(
    executor: E,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<Option<PlaylistSong>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        SELECT id, playlist_id, song_id
        FROM playlist_songs
        WHERE playlist_id = ? AND song_id = ?
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(playlist_id)
    .bind(song_id)
    .fetch_optional(executor)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// Membership rows of a playlist in insertion order
pub async fn get_by_playlist<'e, E>(
    executor: E,
    playlist_id: PlaylistId,
) -> Result<Vec<PlaylistSong>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        "SELECT id, playlist_id, song_id FROM playlist_songs WHERE playlist_id = ? ORDER BY id",
    )
    .bind(playlist_id)
    .fetch_all(executor)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Delete one membership row. The song row is left alone.
pub async fn delete<'e, E>(executor: E, id: PlaylistSongId) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM playlist_songs WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::not_found("PlaylistSong", id));
    }

    tracing::info!(membership_id = id, "Removed song from playlist");
    Ok(())
}
