//! Integration tests for the upload endpoint and the `/files` object route.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_json, post_multipart_file};
use sqlx::PgPool;
use tempfile::TempDir;

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_stores_bytes_retrievable_at_the_returned_url(pool: PgPool) {
    let storage = TempDir::new().unwrap();
    let config = common::test_config(storage.path());
    let payload = b"\x89PNG\r\n\x1a\nfake image bytes";

    let (app, _bus) = common::build_test_app_with_bus(pool.clone(), config.clone());
    let response = post_multipart_file(app, "/api/v1/admin/uploads", "photo.png", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let key = json["data"]["key"].as_str().unwrap().to_string();
    let url = json["data"]["url"].as_str().unwrap().to_string();

    // Key preserves the extension; URL is derived from the key.
    assert!(key.starts_with("scp-"));
    assert!(key.ends_with(".png"));
    assert_eq!(url, format!("http://localhost:3000/files/{key}"));

    // The stored object is retrievable through the public files route.
    let (app, _bus) = common::build_test_app_with_bus(pool, config);
    let response = get(app, &format!("/files/{key}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, payload);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_url_round_trips_through_a_record(pool: PgPool) {
    let storage = TempDir::new().unwrap();
    let config = common::test_config(storage.path());

    let (app, _bus) = common::build_test_app_with_bus(pool.clone(), config.clone());
    let response =
        post_multipart_file(app, "/api/v1/admin/uploads", "photo.png", b"bytes").await;
    let url = body_json(response).await["data"]["url"]
        .as_str()
        .unwrap()
        .to_string();

    // Store the URL on a record, exactly as returned.
    let (app, _bus) = common::build_test_app_with_bus(pool.clone(), config.clone());
    post_json(
        app,
        "/api/v1/admin/records",
        serde_json::json!({"id": "173", "title": "Pictured", "image_url": url}),
    )
    .await;

    let (app, _bus) = common::build_test_app_with_bus(pool, config);
    let json = body_json(get(app, "/api/v1/records/173").await).await;
    assert_eq!(json["data"]["image_url"], url.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn uploads_larger_than_the_framework_default_are_accepted(pool: PgPool) {
    let storage = TempDir::new().unwrap();
    let config = common::test_config(storage.path());

    // 3 MB, beyond axum's built-in 2 MB body limit but within ours.
    let payload = vec![0xAB_u8; 3 * 1024 * 1024];

    let (app, _bus) = common::build_test_app_with_bus(pool, config);
    let response =
        post_multipart_file(app, "/api/v1/admin/uploads", "large.jpg", &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hostile_filename_cannot_smuggle_a_path_into_the_key(pool: PgPool) {
    let storage = TempDir::new().unwrap();
    let config = common::test_config(storage.path());

    // A '/' in the claimed extension must not end up in the key; the
    // object still has to land in the storage root and stay retrievable.
    let (app, _bus) = common::build_test_app_with_bus(pool.clone(), config.clone());
    let response =
        post_multipart_file(app, "/api/v1/admin/uploads", "photo.p/ng", b"payload").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let key = body_json(response).await["data"]["key"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!key.contains('/'));

    let (app, _bus) = common::build_test_app_with_bus(pool, config);
    let response = get(app, &format!("/files/{key}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"payload".as_slice());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_file_field_is_rejected(pool: PgPool) {
    let storage = TempDir::new().unwrap();
    let (app, _bus) = common::build_test_app_with_bus(pool, common::test_config(storage.path()));

    let response = common::post_empty_multipart(app, "/api/v1/admin/uploads").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn two_uploads_of_the_same_filename_get_distinct_keys(pool: PgPool) {
    let storage = TempDir::new().unwrap();
    let config = common::test_config(storage.path());

    let (app, _bus) = common::build_test_app_with_bus(pool.clone(), config.clone());
    let first = body_json(
        post_multipart_file(app, "/api/v1/admin/uploads", "photo.png", b"one").await,
    )
    .await;

    let (app, _bus) = common::build_test_app_with_bus(pool, config);
    let second = body_json(
        post_multipart_file(app, "/api/v1/admin/uploads", "photo.png", b"two").await,
    )
    .await;

    assert_ne!(first["data"]["key"], second["data"]["key"]);
}
