//! End-to-end tests driving the router in-process against in-memory SQLite.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use core_library::repositories::{
    MediaTypeRepository, PlaylistRepository, SqlMediaTypeRepository, SqlPlaylistRepository,
};
use core_library::{create_test_pool, seed, AnyPool, SeedConfig, SeedMode};
use core_service::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    pool: AnyPool,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_limit(50).await
    }

    async fn with_limit(list_limit: u32) -> Self {
        let pool = create_test_pool().await.unwrap();
        let router = router(AppState::new(pool.clone(), list_limit));
        Self { router, pool }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send_raw(method, uri, body.map(|value| value.to_string()))
            .await
    }

    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(raw) => {
                request = request.header("content-type", "application/json");
                Body::from(raw)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    async fn list_len(&self, uri: &str) -> usize {
        let (status, body) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().unwrap().len()
    }

    /// Media types have no POST endpoint, so they go through the repository.
    async fn media_type(&self, name: &str) -> i64 {
        SqlMediaTypeRepository::new(self.pool.clone())
            .insert(name)
            .await
            .unwrap()
            .media_type_id
    }

    /// Artist, album, genre and media type a track can point at.
    async fn track_parents(&self) -> Value {
        let (_, artist) = self.post("/api/artists", json!({"Name": "Pink Floyd"})).await;
        let (_, album) = self
            .post(
                "/api/albums",
                json!({"Title": "The Wall", "ArtistId": artist["ArtistId"]}),
            )
            .await;
        let (_, genre) = self.post("/api/genres", json!({"Name": "Rock"})).await;
        let media_type_id = self.media_type("MPEG audio file").await;

        json!({
            "Name": "Comfortably Numb",
            "AlbumId": album["AlbumId"],
            "GenreId": genre["GenreId"],
            "MediaTypeId": media_type_id,
            "Composer": "David Gilmour, Roger Waters",
            "Milliseconds": 382_000,
            "Bytes": 6_100_000,
            "UnitPrice": 0.99
        })
    }
}

#[tokio::test]
async fn home_returns_welcome_message() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Welcome to the Music Store API"}));
}

#[tokio::test]
async fn docs_are_served() {
    let app = TestApp::new().await;

    let (status, spec) = app.get("/static/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(spec["info"]["title"], "Music Store API");
    assert!(spec["paths"]["/api/tracks/{id}"].is_object());

    let (status, page) = app.get("/docs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.as_str().unwrap().contains("/static/openapi.json"));
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/customers").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn created_artist_can_be_fetched() {
    let app = TestApp::new().await;

    let (status, created) = app.post("/api/artists", json!({"Name": "Queen"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["ArtistId"].as_i64().unwrap();
    assert_eq!(created["Name"], "Queen");

    let (status, fetched) = app.get(&format!("/api/artists/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = app.get("/api/artists").await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn created_album_and_genre_can_be_fetched() {
    let app = TestApp::new().await;
    let (_, artist) = app.post("/api/artists", json!({"Name": "Nirvana"})).await;

    let (status, album) = app
        .post(
            "/api/albums",
            json!({"Title": "Nevermind", "ArtistId": artist["ArtistId"]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, fetched) = app
        .get(&format!("/api/albums/{}", album["AlbumId"]))
        .await;
    assert_eq!(fetched["Title"], "Nevermind");
    assert_eq!(fetched["ArtistId"], artist["ArtistId"]);

    let (status, genre) = app.post("/api/genres", json!({"Name": "Grunge"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, fetched) = app
        .get(&format!("/api/genres/{}", genre["GenreId"]))
        .await;
    assert_eq!(fetched, genre);
}

#[tokio::test]
async fn created_track_can_be_fetched() {
    let app = TestApp::new().await;
    let payload = app.track_parents().await;

    let (status, created) = app.post("/api/tracks", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = app
        .get(&format!("/api/tracks/{}", created["TrackId"]))
        .await;
    assert_eq!(status, StatusCode::OK);
    for field in [
        "Name",
        "AlbumId",
        "GenreId",
        "MediaTypeId",
        "Composer",
        "Milliseconds",
        "Bytes",
        "UnitPrice",
    ] {
        assert_eq!(fetched[field], payload[field], "field {}", field);
    }
}

#[tokio::test]
async fn deleted_rows_are_gone() {
    let app = TestApp::new().await;
    let payload = app.track_parents().await;
    let (_, track) = app.post("/api/tracks", payload.clone()).await;
    let (_, album) = app
        .get(&format!("/api/albums/{}", payload["AlbumId"]))
        .await;

    // Children first so no foreign key blocks the delete.
    let rows = [
        format!("/api/tracks/{}", track["TrackId"]),
        format!("/api/albums/{}", payload["AlbumId"]),
        format!("/api/genres/{}", payload["GenreId"]),
        format!("/api/artists/{}", album["ArtistId"]),
    ];

    for uri in &rows {
        let (status, body) = app.delete(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body["message"].is_string());

        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body["error"].is_string());

        let (status, _) = app.delete(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }

    for list in ["/api/tracks", "/api/albums", "/api/genres", "/api/artists"] {
        assert_eq!(app.list_len(list).await, 0, "{}", list);
    }
}

#[tokio::test]
async fn update_of_missing_row_is_404_and_changes_nothing() {
    let app = TestApp::new().await;
    let payload = app.track_parents().await;
    let (_, track) = app.post("/api/tracks", payload.clone()).await;

    let (_, before_artists) = app.get("/api/artists").await;
    let (_, before_albums) = app.get("/api/albums").await;
    let (_, before_genres) = app.get("/api/genres").await;
    let (_, before_tracks) = app.get("/api/tracks").await;

    let updates = [
        ("/api/artists/999", json!({"Name": "Nobody"})),
        (
            "/api/albums/999",
            json!({"Title": "Lost", "ArtistId": before_artists[0]["ArtistId"]}),
        ),
        ("/api/genres/999", json!({"Name": "Jazz"})),
        ("/api/tracks/999", json!({"Milliseconds": 1000})),
    ];
    for (uri, body) in updates {
        let (status, error) = app.put(uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(error["error"].as_str().unwrap().contains("999"), "{}", uri);
    }

    assert_eq!(app.get("/api/artists").await.1, before_artists);
    assert_eq!(app.get("/api/albums").await.1, before_albums);
    assert_eq!(app.get("/api/genres").await.1, before_genres);
    assert_eq!(app.get("/api/tracks").await.1, before_tracks);
    assert_eq!(before_tracks, json!([track]));
}

#[tokio::test]
async fn empty_artist_body_is_rejected_without_insert() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::POST, "/api/artists", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Name"));

    let (status, _) = app.post("/api/artists", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/artists", json!({"Name": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.list_len("/api/artists").await, 0);
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/tracks", json!({"Name": "Time"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    for field in ["AlbumId", "MediaTypeId", "GenreId", "Milliseconds", "UnitPrice"] {
        assert!(message.contains(field), "{} missing from {}", field, message);
    }
    assert!(!message.contains("Composer"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/genres")
        .header("content-type", "application/json")
        .body(Body::from("{\"Name\": "))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn artist_update_replaces_name() {
    let app = TestApp::new().await;
    let (_, artist) = app.post("/api/artists", json!({"Name": "Prnce"})).await;
    let uri = format!("/api/artists/{}", artist["ArtistId"]);

    let (status, _) = app.put(&uri, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = app.put(&uri, json!({"Name": "Prince"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["Name"], "Prince");

    let (_, fetched) = app.get(&uri).await;
    assert_eq!(fetched["Name"], "Prince");
}

#[tokio::test]
async fn album_update_requires_every_field() {
    let app = TestApp::new().await;
    let (_, artist) = app.post("/api/artists", json!({"Name": "Queen"})).await;
    let (_, album) = app
        .post(
            "/api/albums",
            json!({"Title": "Jazz", "ArtistId": artist["ArtistId"]}),
        )
        .await;
    let uri = format!("/api/albums/{}", album["AlbumId"]);

    let (status, body) = app.put(&uri, json!({"Title": "News of the World"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("ArtistId"));

    let (status, updated) = app
        .put(
            &uri,
            json!({"Title": "News of the World", "ArtistId": artist["ArtistId"]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["Title"], "News of the World");
}

#[tokio::test]
async fn track_update_only_touches_supplied_fields() {
    let app = TestApp::new().await;
    let payload = app.track_parents().await;
    let (_, created) = app.post("/api/tracks", payload).await;
    let uri = format!("/api/tracks/{}", created["TrackId"]);

    let (status, updated) = app
        .put(&uri, json!({"UnitPrice": 1.49, "Composer": "Roger Waters"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["UnitPrice"], 1.49);
    assert_eq!(updated["Composer"], "Roger Waters");

    let (_, fetched) = app.get(&uri).await;
    assert_eq!(fetched, updated);
    for field in ["Name", "AlbumId", "GenreId", "MediaTypeId", "Milliseconds", "Bytes"] {
        assert_eq!(fetched[field], created[field], "field {}", field);
    }
}

#[tokio::test]
async fn empty_track_patch_is_rejected() {
    let app = TestApp::new().await;
    let payload = app.track_parents().await;
    let (_, created) = app.post("/api/tracks", payload).await;

    let (status, _) = app
        .put(&format!("/api/tracks/{}", created["TrackId"]), json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_track_values_are_rejected() {
    let app = TestApp::new().await;
    let mut payload = app.track_parents().await;
    payload["Milliseconds"] = json!(-5);

    let (status, body) = app.post("/api/tracks", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Milliseconds"));
    assert_eq!(app.list_len("/api/tracks").await, 0);
}

#[tokio::test]
async fn unknown_foreign_key_is_storage_error() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/albums", json!({"Title": "Orphan", "ArtistId": 4242}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("FOREIGN KEY"));
    assert_eq!(app.list_len("/api/albums").await, 0);
}

#[tokio::test]
async fn referenced_artist_cannot_be_deleted() {
    let app = TestApp::new().await;
    let (_, artist) = app.post("/api/artists", json!({"Name": "Metallica"})).await;
    app.post(
        "/api/albums",
        json!({"Title": "Master of Puppets", "ArtistId": artist["ArtistId"]}),
    )
    .await;

    let (status, _) = app
        .delete(&format!("/api/artists/{}", artist["ArtistId"]))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.list_len("/api/artists").await, 1);
}

#[tokio::test]
async fn lists_are_capped() {
    let app = TestApp::with_limit(3).await;
    for i in 0..5 {
        app.post("/api/artists", json!({"Name": format!("Artist {}", i)}))
            .await;
    }

    assert_eq!(app.list_len("/api/artists").await, 3);
}

#[tokio::test]
async fn non_numeric_id_is_json_404() {
    let app = TestApp::new().await;
    app.post("/api/artists", json!({"Name": "Queen"})).await;

    for resource in [
        "artists",
        "albums",
        "genres",
        "tracks",
        "media-types",
        "playlists",
    ] {
        for id in ["abc", "-1", "99999999999999999999"] {
            let uri = format!("/api/{}/{}", resource, id);
            let (status, body) = app.get(&uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(body["error"].as_str().unwrap().contains(id), "{}", uri);
        }
    }

    let (status, body) = app.put("/api/artists/abc", json!({"Name": "Nobody"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, body) = app.delete("/api/artists/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (_, artists) = app.get("/api/artists").await;
    assert_eq!(artists[0]["Name"], "Queen");
}

#[tokio::test]
async fn non_object_body_is_rejected_without_insert() {
    let app = TestApp::new().await;

    for raw in [r#"["Queen"]"#, r#""Queen""#, "42"] {
        let (status, body) = app
            .send_raw(Method::POST, "/api/artists", Some(raw.to_string()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", raw);
        assert!(body["error"].is_string());
    }
    assert_eq!(app.list_len("/api/artists").await, 0);

    let (_, genre) = app.post("/api/genres", json!({"Name": "Blues"})).await;
    let uri = format!("/api/genres/{}", genre["GenreId"]);
    let (status, _) = app
        .send_raw(Method::PUT, &uri, Some(r#"["Jazz"]"#.to_string()))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get(&uri).await.1["Name"], "Blues");
}

#[tokio::test]
async fn media_types_are_read_only() {
    let app = TestApp::new().await;
    let id = app.media_type("AAC audio file").await;

    let (status, body) = app.get(&format!("/api/media-types/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"MediaTypeId": id, "Name": "AAC audio file"}));
    assert_eq!(app.list_len("/api/media-types").await, 1);

    let (status, _) = app.post("/api/media-types", json!({"Name": "FLAC"})).await;
    assert!(status.is_client_error());
    assert_eq!(app.list_len("/api/media-types").await, 1);
}

#[tokio::test]
async fn playlist_includes_track_ids() {
    let app = TestApp::new().await;
    let payload = app.track_parents().await;
    let (_, first) = app.post("/api/tracks", payload.clone()).await;
    let (_, second) = app.post("/api/tracks", payload).await;
    let first_id = first["TrackId"].as_i64().unwrap();
    let second_id = second["TrackId"].as_i64().unwrap();

    let playlists = SqlPlaylistRepository::new(app.pool.clone());
    let playlist_id = playlists.insert("Road Trip").await.unwrap().playlist_id;
    playlists.add_track(playlist_id, second_id).await.unwrap();
    playlists.add_track(playlist_id, first_id).await.unwrap();

    let (status, body) = app.get(&format!("/api/playlists/{}", playlist_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"PlaylistId": playlist_id, "Name": "Road Trip", "TrackIds": [first_id, second_id]})
    );

    assert_eq!(app.list_len("/api/playlists").await, 1);
    let (status, _) = app.get("/api/playlists/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_database_is_served() {
    for mode in [SeedMode::Catalog, SeedMode::Random] {
        let app = TestApp::new().await;
        let config = SeedConfig::default().with_mode(mode).with_rng_seed(11);
        let report = seed(&app.pool, &config).await.unwrap();
        assert_eq!(report.artists, 20);
        assert_eq!(report.tracks, 20);

        assert_eq!(app.list_len("/api/artists").await, report.artists);
        assert_eq!(app.list_len("/api/albums").await, report.albums);
        assert_eq!(app.list_len("/api/genres").await, report.genres);
        assert_eq!(app.list_len("/api/media-types").await, report.media_types);
        assert_eq!(app.list_len("/api/tracks").await, report.tracks);
        assert_eq!(app.list_len("/api/playlists").await, report.playlists);

        let (_, tracks) = app.get("/api/tracks").await;
        for track in tracks.as_array().unwrap() {
            let (status, _) = app
                .get(&format!("/api/albums/{}", track["AlbumId"]))
                .await;
            assert_eq!(status, StatusCode::OK, "{:?}", mode);
        }

        let (status, playlist) = app.get("/api/playlists/1").await;
        assert_eq!(status, StatusCode::OK);
        let track_ids = playlist["TrackIds"].as_array().unwrap();
        assert!((5..=10).contains(&track_ids.len()), "{:?}", mode);
    }
}
