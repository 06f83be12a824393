/// Service tests against a mocked storage context
use mixtape_core::{
    validation::PlaylistSongPayload, MixtapeError, MockStorageContext, Playlist, PlaylistSong, Song,
};
use mixtape_server::{MembershipService, PlaylistService, SearchService, ServerError};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_search_without_query_never_touches_storage() {
    let mut storage = MockStorageContext::new();
    storage.expect_find_song_by_title().never();

    let service = SearchService::new(Arc::new(storage));

    for query in [None, Some("")] {
        let err = service.search(query).await.unwrap_err();
        assert!(matches!(err, ServerError::MissingParameter(_)));
    }
}

#[tokio::test]
async fn test_search_passes_exact_title() {
    let mut storage = MockStorageContext::new();
    storage
        .expect_find_song_by_title()
        .withf(|title: &str| title == "Neon")
        .times(1)
        .returning(|_| {
            Ok(Some(Song {
                id: 5,
                title: "Neon".to_string(),
                artist: "X".to_string(),
                genre: "Pop".to_string(),
            }))
        });

    let service = SearchService::new(Arc::new(storage));
    let song = service.search(Some("Neon")).await.unwrap();

    assert_eq!(song.id, 5);
}

#[tokio::test]
async fn test_search_storage_failure_is_internal() {
    let mut storage = MockStorageContext::new();
    storage
        .expect_find_song_by_title()
        .returning(|_| Err(MixtapeError::Database("disk I/O error".to_string())));

    let service = SearchService::new(Arc::new(storage));
    let err = service.search(Some("Neon")).await.unwrap_err();

    assert!(matches!(err, ServerError::Database(_)));
}

#[tokio::test]
async fn test_create_playlist_invalid_body_skips_storage() {
    let mut storage = MockStorageContext::new();
    storage.expect_create_playlist().never();

    let service = PlaylistService::new(Arc::new(storage));
    let err = service.create(&json!({ "name": "Drive" })).await.unwrap_err();

    match err {
        ServerError::Validation(errors) => {
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["description"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_checks_existence_before_validating() {
    let mut storage = MockStorageContext::new();
    storage.expect_get_playlist().returning(|_| Ok(None));
    storage.expect_update_playlist().never();

    let service = PlaylistService::new(Arc::new(storage));
    let err = service.update(1, &json!(null)).await.unwrap_err();

    assert!(matches!(err, ServerError::NotFound(_)));
}

#[tokio::test]
async fn test_update_sends_full_replacement() {
    let mut storage = MockStorageContext::new();
    storage.expect_get_playlist().returning(|id| {
        Ok(Some(Playlist {
            id,
            name: "Old".to_string(),
            description: "old".to_string(),
        }))
    });
    storage
        .expect_update_playlist()
        .withf(|id, update| *id == 1 && update.name == "New" && update.description == "fresh")
        .times(1)
        .returning(|id, update| {
            Ok(Some(Playlist {
                id,
                name: update.name,
                description: update.description,
            }))
        });

    let service = PlaylistService::new(Arc::new(storage));
    let playlist = service
        .update(1, &json!({ "name": "New", "description": "fresh" }))
        .await
        .unwrap();

    assert_eq!(playlist.name, "New");
}

#[tokio::test]
async fn test_add_song_uses_path_song_id() {
    let mut storage = MockStorageContext::new();
    storage
        .expect_add_song_to_playlist()
        .withf(|playlist_id, song| *playlist_id == 1 && song.id == 5 && song.title == "Neon")
        .times(1)
        .returning(|playlist_id, song| {
            Ok(PlaylistSong {
                id: 1,
                playlist_id,
                song_id: song.id,
            })
        });

    let service = MembershipService::new(Arc::new(storage));
    let membership = service
        .add_song(
            PlaylistSongPayload {
                playlist_id: 1,
                song_id: 5,
            },
            &json!({ "title": "Neon", "artist": "X", "genre": "Pop" }),
        )
        .await
        .unwrap();

    assert_eq!(membership.song_id, 5);
}

#[tokio::test]
async fn test_remove_song_deletes_only_first_match() {
    let mut storage = MockStorageContext::new();
    storage.expect_find_membership().returning(|playlist_id, song_id| {
        Ok(Some(PlaylistSong {
            id: 11,
            playlist_id,
            song_id,
        }))
    });
    storage
        .expect_delete_membership()
        .withf(|id| *id == 11)
        .times(1)
        .returning(|_| Ok(()));

    let service = MembershipService::new(Arc::new(storage));
    service.remove_song(1, 5).await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_membership_is_not_found() {
    let mut storage = MockStorageContext::new();
    storage.expect_find_membership().returning(|_, _| Ok(None));
    storage.expect_delete_membership().never();

    let service = MembershipService::new(Arc::new(storage));
    let err = service.remove_song(1, 5).await.unwrap_err();

    assert!(matches!(err, ServerError::NotFound(ref msg) if msg == "Song not found in playlist"));
}

#[tokio::test]
async fn test_remove_song_lost_delete_reports_membership() {
    let mut storage = MockStorageContext::new();
    storage.expect_find_membership().returning(|playlist_id, song_id| {
        Ok(Some(PlaylistSong {
            id: 11,
            playlist_id,
            song_id,
        }))
    });
    storage
        .expect_delete_membership()
        .returning(|id| Err(MixtapeError::not_found("PlaylistSong", id)));

    let service = MembershipService::new(Arc::new(storage));
    let err = service.remove_song(1, 5).await.unwrap_err();

    assert!(matches!(err, ServerError::NotFound(ref msg) if msg == "Song not found in playlist"));
}
