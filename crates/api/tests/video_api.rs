//! Integration tests for the `/api/v1/videos` resource.

mod common;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use common::{body_json, TestApp};
use serde_json::json;

const VIDEOS: &str = "/api/v1/videos";

#[tokio::test]
async fn create_and_list_video() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            VIDEOS,
            json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "title": "Reel" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let video = body_json(response).await;
    assert!(video["id"].is_string());
    assert_eq!(video["title"], "Reel");

    let list = body_json(app.get(VIDEOS).await).await;
    assert_eq!(list, json!([video]));

    let persisted: serde_json::Value =
        serde_json::from_slice(&std::fs::read(app.data_file("videos.json")).unwrap()).unwrap();
    assert_eq!(persisted, list);
}

#[tokio::test]
async fn invalid_url_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_json(VIDEOS, json!({ "url": "not-a-url", "title": "x" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid URL format");
    assert_eq!(body_json(app.get(VIDEOS).await).await, json!([]));
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_json(VIDEOS, json!({ "url": "https://vimeo.com/1" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "URL and title are required");
}

#[tokio::test]
async fn malformed_json_body_gets_structured_error() {
    let app = TestApp::new().await;

    let request = Request::post(VIDEOS)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ nope"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn delete_video_then_delete_again_is_404() {
    let app = TestApp::new().await;
    let video = body_json(
        app.post_json(VIDEOS, json!({ "url": "https://vimeo.com/2", "title": "Two" }))
            .await,
    )
    .await;
    let uri = format!("{VIDEOS}/{}", video["id"].as_str().unwrap());

    assert_eq!(app.delete(&uri).await.status(), StatusCode::OK);
    assert_eq!(app.delete(&uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
}
