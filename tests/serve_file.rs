//! HTTP endpoints over a real file.

use std::io::Write;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use bv::serve::{ServeState, router};
use bv::source::{FileSource, Meta};
use tempfile::NamedTempFile;
use tokio::sync::mpsc;
use tower::ServiceExt;

fn fixture(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let data: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();
    file.write_all(&data).unwrap();
    file.flush().unwrap();
    file
}

fn app(file: &NamedTempFile) -> Router {
    let (tx, _rx) = mpsc::unbounded_channel();
    let source = FileSource::open(file.path()).unwrap();
    router(ServeState::new(Arc::new(source), "fixture.bin", tx))
}

#[tokio::test]
async fn test_meta_reports_size_and_path() {
    let file = fixture(400);
    let response = app(&file)
        .oneshot(Request::builder().uri("/meta").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let meta: Meta = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        meta,
        Meta {
            size: 400,
            path: "fixture.bin".to_string()
        }
    );
}

#[tokio::test]
async fn test_bytes_page_at_eof_returns_five_bytes() {
    let file = fixture(400);
    let response = app(&file)
        .oneshot(
            Request::builder()
                .uri("/bytes?offset=395&length=384")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/octet-stream"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let expected: Vec<u8> = (395..400).map(|i: usize| (i * 7 % 256) as u8).collect();
    assert_eq!(body.to_vec(), expected);
}

#[tokio::test]
async fn test_bytes_full_page() {
    let file = fixture(1000);
    let response = app(&file)
        .oneshot(
            Request::builder()
                .uri("/bytes?offset=384&length=384")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body.len(), 384);
    assert_eq!(body[0], (384 * 7 % 256) as u8);
}

#[tokio::test]
async fn test_bytes_past_eof_is_empty() {
    let file = fixture(10);
    let response = app(&file)
        .oneshot(
            Request::builder()
                .uri("/bytes?offset=50&length=16")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}
