mod helpers;

use helpers::start_ingest_server;
use hookrelay_api_client::ApiClient;
use hookrelay_core::WatchEventKind;
use std::path::Path;

#[tokio::test]
async fn test_upload_file_streams_and_parses_response() {
    let server = start_ingest_server("forward-key").await;

    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("note.txt");
    std::fs::write(&file, b"hello world").expect("write");

    let client = ApiClient::new(server.upload_url.clone(), "forward-key".to_string(), 10)
        .expect("client");

    let response = client
        .upload_file(&file, WatchEventKind::Change)
        .await
        .expect("upload succeeds");

    assert!(response.success);
    assert_eq!(response.data.size, 11);
    assert_eq!(response.data.event_type, "change");
    assert_eq!(response.data.original_path, file.display().to_string());

    let staged = server.staged_files();
    assert_eq!(staged.len(), 1);
    let name = staged[0].file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with("-note.txt"));
    assert_eq!(std::fs::read(&staged[0]).unwrap(), b"hello world");
}

#[tokio::test]
async fn test_upload_file_with_wrong_key_is_rejected() {
    let server = start_ingest_server("right-key").await;

    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("secret.txt");
    std::fs::write(&file, b"payload").expect("write");

    let client =
        ApiClient::new(server.upload_url.clone(), "wrong-key".to_string(), 10).expect("client");

    let error = client
        .upload_file(&file, WatchEventKind::Add)
        .await
        .expect_err("upload must fail");

    assert!(error.to_string().contains("401"), "got: {}", error);
    assert!(server.staged_files().is_empty());
}

#[tokio::test]
async fn test_upload_missing_local_file_errors() {
    let server = start_ingest_server("any-key").await;

    let client =
        ApiClient::new(server.upload_url.clone(), "any-key".to_string(), 10).expect("client");

    let error = client
        .upload_file(Path::new("/nonexistent/gone.json"), WatchEventKind::Add)
        .await
        .expect_err("upload must fail");

    assert!(error.to_string().contains("Failed to open file"), "got: {}", error);
}
