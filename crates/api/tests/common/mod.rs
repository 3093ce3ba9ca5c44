#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

/// Build a test `ServerConfig` rooted in `dir`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: dir.path().join("data"),
        upload_dir: dir.path().join("uploads"),
        public_base_url: BASE_URL.to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// A full application over temporary data and upload directories.
pub struct TestApp {
    pub router: Router,
    pub config: ServerConfig,
    dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let router = build_router(&config).await;
        Self {
            router,
            config,
            dir,
        }
    }

    /// Rebuild the app over the same directories, as a process restart would.
    pub async fn restart(&mut self) {
        self.router = build_router(&self.config).await;
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, json: serde_json::Value) -> Response<Body> {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send_form(&self, method: Method, uri: &str, form: Form) -> Response<Body> {
        self.send(form.into_request(method, uri)).await
    }

    /// Fetch an image reference through the app's `/uploads` static route.
    pub async fn fetch_reference(&self, reference: &str) -> Response<Body> {
        let path = reference
            .strip_prefix(BASE_URL)
            .expect("reference should start with the base URL");
        self.get(path).await
    }

    /// Number of files currently in the upload directory.
    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(&self.config.upload_dir).unwrap().count()
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.config.data_dir.join(name)
    }

    pub fn dir(&self) -> &TempDir {
        &self.dir
    }
}

async fn build_router(config: &ServerConfig) -> Router {
    let state = AppState::open(config).await.unwrap();
    build_app_router(state, config)
}

/// Minimal `multipart/form-data` body builder.
pub struct Form {
    boundary: &'static str,
    body: Vec<u8>,
}

impl Form {
    pub fn new() -> Self {
        Self {
            boundary: "folio-test-boundary-7MA4YWxkTrZu0gW",
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, method: Method, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", self.boundary),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
