//! Filesystem observer
//!
//! Bridges raw notify events into the async pipeline. Hidden (dot-prefixed)
//! paths are dropped here, before stabilization. Only changes observed after
//! watch registration are reported; files already present at start-up never
//! produce events.

use anyhow::Result;
use hookrelay_core::WatchEventKind;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// A raw, unstabilized filesystem change.
#[derive(Debug, Clone)]
pub struct RawChange {
    pub kind: WatchEventKind,
    pub path: PathBuf,
}

/// Holds the watch registration. Dropping it releases the observer handle
/// and closes the raw-change channel.
pub struct Observer {
    _watcher: RecommendedWatcher,
    /// Roots that were successfully registered.
    pub watched: Vec<PathBuf>,
}

/// Start watching `roots` recursively, sending raw changes into `raw_tx`.
///
/// A root that cannot be registered (missing, permission denied) is logged
/// and skipped; watching continues for the remaining roots. Zero watchable
/// roots is a startup error.
pub fn start(roots: &[PathBuf], raw_tx: mpsc::UnboundedSender<RawChange>) -> Result<Observer> {
    let mut watcher = RecommendedWatcher::new(
        move |result: notify::Result<Event>| match result {
            Ok(event) => {
                if let Some(kind) = classify(&event.kind) {
                    for path in event.paths {
                        if is_hidden(&path) {
                            continue;
                        }
                        // Receiver gone means the pipeline is shutting down.
                        let _ = raw_tx.send(RawChange {
                            kind,
                            path,
                        });
                    }
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Watcher error");
            }
        },
        notify::Config::default(),
    )?;

    let mut watched = Vec::new();
    for root in roots {
        match watcher.watch(root, RecursiveMode::Recursive) {
            Ok(()) => watched.push(root.clone()),
            Err(error) => {
                tracing::warn!(
                    path = %root.display(),
                    error = %error,
                    "Failed to watch path, skipping"
                );
            }
        }
    }

    if watched.is_empty() {
        anyhow::bail!("None of the {} configured paths could be watched", roots.len());
    }

    Ok(Observer {
        _watcher: watcher,
        watched,
    })
}

/// Map a notify event kind onto the wire event kinds. Metadata-only changes
/// and removals are not forwarded.
fn classify(kind: &EventKind) -> Option<WatchEventKind> {
    match kind {
        EventKind::Create(_) => Some(WatchEventKind::Add),
        EventKind::Modify(ModifyKind::Metadata(_)) => None,
        EventKind::Modify(_) => Some(WatchEventKind::Change),
        _ => None,
    }
}

/// True for editor swap files, OS metadata files, and anything else whose
/// base name starts with a dot.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
