mod common;

use axum::http::{Method, StatusCode};
use catalog::config::IdStrategy;
use common::{app_with, ids, seeded_app, send};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn lists_seeded_genres() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/v1/genres", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Fiction"},
            {"id": 2, "name": "Non-Fiction"},
            {"id": 3, "name": "Science Fiction"},
            {"id": 4, "name": "Fantasy"},
        ])
    );
}

#[tokio::test]
async fn created_genre_shows_up_in_listing() {
    let app = seeded_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": " Horror "})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 5, "name": "Horror"}));

    let (_, all) = send(&app, Method::GET, "/api/v1/genres", None).await;
    assert!(all.as_array().unwrap().contains(&created));
}

#[tokio::test]
async fn duplicate_name_is_rejected_case_insensitively() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "fiction"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Genre already exists!");
}

#[tokio::test]
async fn create_genre_validates_name() {
    let app = seeded_app();
    for payload in [json!({}), json!({"name": ""}), json!({"name": "  "}), json!({"name": 3})] {
        let (status, body) = send(&app, Method::POST, "/api/v1/genres", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body["message"], "Invalid input. 'name' must be a non-empty string.");
    }

    let (status, _) = send(&app, Method::POST, "/api/v1/genres", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn genre_in_use_cannot_be_deleted() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::DELETE, "/api/v1/genres/1", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input. Genre is in use!");

    let (_, all) = send(&app, Method::GET, "/api/v1/genres", None).await;
    assert_eq!(ids(&all), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn genre_becomes_deletable_once_unused() {
    let app = seeded_app();
    send(&app, Method::DELETE, "/api/v1/books/3", None).await;

    let (status, body) = send(&app, Method::DELETE, "/api/v1/genres/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "name": "Non-Fiction"}));
}

#[tokio::test]
async fn delete_genre_rejects_bad_ids() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::DELETE, "/api/v1/genres/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input. Genre id must be valid");

    for uri in ["/api/v1/genres/99", "/api/v1/genres/0", "/api/v1/genres/1.5"] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {}", uri);
        assert_eq!(body["message"], "Invalid input. Genre is in use or not found!");
    }
}

#[tokio::test]
async fn books_can_reference_new_genres() {
    let app = seeded_app();
    let (_, genre) = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "Horror"})),
    )
    .await;

    let (status, book) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(json!({"title": "It", "author": "Stephen King", "genreId": genre["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, filtered) = send(&app, Method::GET, "/api/v1/books?filter=horror", None).await;
    assert_eq!(filtered, json!([book]));
}

#[tokio::test]
async fn counter_strategy_never_reuses_ids() {
    let app = app_with(IdStrategy::Counter, true);
    send(&app, Method::DELETE, "/api/v1/genres/4", None).await;

    let (_, genre) = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "Horror"})),
    )
    .await;
    assert_eq!(genre["id"], 5);
}

#[tokio::test]
async fn length_strategy_reuses_collection_length() {
    let app = app_with(IdStrategy::Length, true);
    send(&app, Method::DELETE, "/api/v1/genres/3", None).await;

    let (_, genre) = send(
        &app,
        Method::POST,
        "/api/v1/genres",
        Some(json!({"name": "Horror"})),
    )
    .await;
    assert_eq!(genre["id"], 4);

    let (_, all) = send(&app, Method::GET, "/api/v1/genres", None).await;
    assert_eq!(ids(&all), vec![1, 2, 4, 4]);
}

#[tokio::test]
async fn unseeded_app_starts_empty() {
    let app = app_with(IdStrategy::Counter, false);

    let (_, genres) = send(&app, Method::GET, "/api/v1/genres", None).await;
    assert_eq!(genres, json!([]));

    let (_, books) = send(&app, Method::GET, "/api/v1/books", None).await;
    assert_eq!(books, json!([]));
}
