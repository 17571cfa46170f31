#![cfg(feature = "server")]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;
use treescope::config::AppConfig;
use treescope::server::{AppState, build_app};

struct TestResponse {
    status: StatusCode,
    body: Value,
}

fn app_with_static(static_dir: &Path) -> Router {
    let mut config = AppConfig::default();
    config.server.static_dir = static_dir.to_path_buf();
    build_app(AppState::new(config))
}

fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "0123456789").unwrap();
    fs::write(dir.path().join(".b"), "01234").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.txt"), "c").unwrap();
    dir
}

fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> TestResponse {
    let (status, bytes) = get(app, uri).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, body }
}

fn tree_uri(path: &Path, extra: &str) -> String {
    format!(
        "/api/tree?path={}{}",
        encode(&path.to_string_lossy()),
        extra
    )
}

#[tokio::test]
async fn tree_endpoint_returns_tree() {
    let dir = fixture();
    let app = app_with_static(dir.path());

    let response = get_json(app, &tree_uri(dir.path(), "&depth=3")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "directory");
    let children = response.body["children"].as_array().unwrap();
    let names: Vec<&str> = children.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["a.txt", "sub"]);
    assert_eq!(children[0]["size"], 10);
    assert_eq!(children[1]["children"][0]["name"], "c.txt");
}

#[tokio::test]
async fn tree_endpoint_matches_library_output() {
    let dir = fixture();
    let app = app_with_static(dir.path());

    let response = get_json(app, &tree_uri(dir.path(), "&depth=1&hidden=true")).await;
    let expected = treescope::TreeBuilder::new(dir.path())
        .max_depth(1)
        .show_hidden(true)
        .build();
    assert_eq!(response.body, serde_json::to_value(&expected).unwrap());
}

#[tokio::test]
async fn hidden_parameter_is_case_insensitive() {
    let dir = fixture();
    let app = app_with_static(dir.path());

    let response = get_json(app.clone(), &tree_uri(dir.path(), "&hidden=TRUE")).await;
    let children = response.body["children"].as_array().unwrap();
    assert_eq!(children[0]["name"], ".b");

    let response = get_json(app, &tree_uri(dir.path(), "&hidden=nope")).await;
    let children = response.body["children"].as_array().unwrap();
    assert_eq!(children[0]["name"], "a.txt");
}

#[tokio::test]
async fn quoted_path_is_accepted() {
    let dir = fixture();
    let app = app_with_static(dir.path());
    let quoted = format!("\"{}\"", dir.path().display());

    let uri = format!("/api/tree?path={}&depth=0", encode(&quoted));
    let response = get_json(app, &uri).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["path"],
        dir.path().canonicalize().unwrap().to_string_lossy().as_ref()
    );
    assert_eq!(response.body["children"], serde_json::json!([]));
}

#[tokio::test]
async fn missing_path_is_ok_with_error_body() {
    let dir = fixture();
    let app = app_with_static(dir.path());

    let response = get_json(app, &tree_uri(&dir.path().join("missing"), "")).await;
    assert_eq!(response.status, StatusCode::OK);
    let object = response.body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(
        object["error"]
            .as_str()
            .unwrap()
            .starts_with("Path not found: ")
    );
}

#[tokio::test]
async fn non_integer_depth_is_bad_request() {
    let dir = fixture();
    let app = app_with_static(dir.path());

    let response = get_json(app, &tree_uri(dir.path(), "&depth=abc")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].as_str().unwrap().contains("depth"));
}

#[tokio::test]
async fn oversized_depth_walks_whole_tree() {
    let dir = fixture();
    let app = app_with_static(dir.path());

    let response = get_json(app, &tree_uri(dir.path(), "&depth=99999999999999999999")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "directory");
    assert!(response.body.get("error").is_none());
}

#[tokio::test]
async fn health_reports_version() {
    let dir = fixture();
    let response = get_json(app_with_static(dir.path()), "/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn static_files_are_served() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<html>tree</html>").unwrap();
    fs::write(dir.path().join("script.js"), "console.log(1);").unwrap();
    let app = app_with_static(dir.path());

    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>tree</html>");

    let (status, body) = get(app.clone(), "/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log(1);");

    let (status, _) = get(app, "/nothing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
