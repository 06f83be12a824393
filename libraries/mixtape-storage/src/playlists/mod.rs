use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor};

fn from_row(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}

/// Get playlist by ID
pub async fn get_by_id<'e, E>(executor: E, id: PlaylistId) -> Result<Option<Playlist>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT id, name, description FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.as_ref().map(from_row))
}

/// Create new playlist
pub async fn create<'e, E>(executor: E, playlist: CreatePlaylist) -> Result<Playlist>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        INSERT INTO playlists (name, description)
        VALUES (?, ?)
        RETURNING id, name, description
        "#,
    )
    .bind(&playlist.name)
    .bind(&playlist.description)
    .fetch_one(executor)
    .await?;

    let created = from_row(&row);
    tracing::info!(playlist_id = created.id, "Created playlist");

    Ok(created)
}

/// Replace name and description. Returns `None` when no row matched.
pub async fn update<'e, E>(
    executor: E,
    id: PlaylistId,
    playlist: UpdatePlaylist,
) -> Result<Option<Playlist>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        UPDATE playlists
        SET name = ?, description = ?
        WHERE id = ?
        RETURNING id, name, description
        "#,
    )
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// Delete playlist. Memberships go with it through `ON DELETE CASCADE`.
pub async fn delete<'e, E>(executor: E, id: PlaylistId) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::PlaylistNotFound(id));
    }

    tracing::info!(playlist_id = id, "Deleted playlist");
    Ok(())
}
