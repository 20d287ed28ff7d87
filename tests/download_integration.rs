//! Integration tests for streaming downloads.

use brightday_downloader::download::download_to_path;
use brightday_downloader::{BrightDayApi, Error, RetryPolicy};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> BrightDayApi {
    BrightDayApi::new("jwt", "cookie", &server.uri(), RetryPolicy::none()).unwrap()
}

#[tokio::test]
async fn test_download_preserves_content() {
    let server = MockServer::start().await;
    let content: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    Mock::given(method("GET"))
        .and(path("/signed/big.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.clone()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("big.mp4");
    let url = format!("{}/signed/big.mp4", server.uri());
    let written = download_to_path(&api_for(&server), &url, &dest, false)
        .await
        .unwrap();

    assert_eq!(written, content.len() as u64);
    assert_eq!(std::fs::read(&dest).unwrap(), content);
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signed/photo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"short".to_vec()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("photo.png");
    std::fs::write(&dest, b"a much longer previous file").unwrap();

    let url = format!("{}/signed/photo.png", server.uri());
    download_to_path(&api_for(&server), &url, &dest, false)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"short");
}

#[tokio::test]
async fn test_download_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signed/expired"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("expired.jpg");
    let url = format!("{}/signed/expired", server.uri());
    let result = download_to_path(&api_for(&server), &url, &dest, false).await;

    assert!(matches!(result, Err(Error::DownloadStatus(403))));
    assert!(!dest.exists(), "no file is created before the response succeeds");
}

#[tokio::test]
async fn test_missing_destination_folder_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signed/a"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"a".to_vec()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("missing").join("a.jpg");
    let url = format!("{}/signed/a", server.uri());
    let result = download_to_path(&api_for(&server), &url, &dest, false).await;

    assert!(matches!(result, Err(Error::Io(_))));
}
