mod helpers;

use helpers::start_ingest_server;
use hookrelay_api_client::ApiClient;
use hookrelay_watcher::{forwarder, observer, stabilizer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// End-to-end: a file created under a watched root is stabilized, forwarded,
/// and lands in the server's staging directory. Pre-existing files and
/// dot-prefixed files never upload.
#[tokio::test]
async fn test_pipeline_forwards_new_files_only() {
    let server = start_ingest_server("pipeline-key").await;

    let watch_dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(watch_dir.path().join("existing.json"), b"old").expect("write");

    let client = Arc::new(
        ApiClient::new(server.upload_url.clone(), "pipeline-key".to_string(), 10)
            .expect("client"),
    );

    let (raw_tx, raw_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel(8);

    let observer =
        observer::start(&[watch_dir.path().to_path_buf()], raw_tx).expect("observer starts");
    tokio::spawn(stabilizer::run(
        raw_rx,
        event_tx,
        Duration::from_millis(200),
        Duration::from_millis(50),
    ));
    tokio::spawn(forwarder::run(event_rx, client));

    // Let the watch registration settle before producing changes.
    tokio::time::sleep(Duration::from_millis(300)).await;

    std::fs::write(watch_dir.path().join(".hidden.swp"), b"dot").expect("write");
    std::fs::write(watch_dir.path().join("t1.json"), b"hello").expect("write");

    let staged = server.wait_for_staged(1, Duration::from_secs(10)).await;
    assert_eq!(staged.len(), 1, "exactly one upload expected");

    let name = staged[0].file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with("-t1.json"), "got: {}", name);
    assert_eq!(std::fs::read(&staged[0]).unwrap(), b"hello");

    // Give any stray events a moment; neither the pre-existing file nor the
    // dotfile may ever arrive.
    tokio::time::sleep(Duration::from_millis(500)).await;
    let staged = server.staged_files();
    assert_eq!(staged.len(), 1);
    assert!(!staged
        .iter()
        .any(|p| p.to_string_lossy().contains("existing")));
    assert!(!staged.iter().any(|p| p.to_string_lossy().contains("hidden")));

    drop(observer);
}

#[tokio::test]
async fn test_observer_rejects_all_missing_roots() {
    let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
    let missing = std::path::PathBuf::from("/nonexistent/hookrelay-test-root");

    let result = observer::start(&[missing], raw_tx);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_observer_skips_missing_root_but_watches_the_rest() {
    let watch_dir = tempfile::tempdir().expect("tempdir");
    let (raw_tx, _raw_rx) = mpsc::unbounded_channel();

    let roots = vec![
        std::path::PathBuf::from("/nonexistent/hookrelay-test-root"),
        watch_dir.path().to_path_buf(),
    ];

    let observer = observer::start(&roots, raw_tx).expect("one watchable root is enough");
    assert_eq!(observer.watched, vec![watch_dir.path().to_path_buf()]);
}
