//! Write-burst stabilization
//!
//! A raw change does not forward immediately: the file is tracked until no
//! write activity is observed for the configured quiet period, polled at a
//! short interval. This prevents forwarding partially-written files. Each
//! path has its own timer; multiple paths stabilize concurrently.

use crate::observer::RawChange;
use chrono::Utc;
use hookrelay_core::{WatchEvent, WatchEventKind};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Per-path stabilization state.
struct Pending {
    /// First-seen kind wins: a create followed by writes still forwards as `add`.
    kind: WatchEventKind,
    len: u64,
    modified: Option<SystemTime>,
    quiet_since: Instant,
}

/// Consume raw changes until the observer is dropped, emitting a
/// [`WatchEvent`] for each path once it has been quiet for `threshold`.
/// Emission applies backpressure through the bounded `event_tx` channel.
pub async fn run(
    mut raw_rx: mpsc::UnboundedReceiver<RawChange>,
    event_tx: mpsc::Sender<WatchEvent>,
    threshold: Duration,
    poll_interval: Duration,
) {
    let mut pending: HashMap<PathBuf, Pending> = HashMap::new();
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut raw_closed = false;

    loop {
        tokio::select! {
            raw = raw_rx.recv(), if !raw_closed => {
                match raw {
                    Some(change) => track(&mut pending, change),
                    None => {
                        raw_closed = true;
                        if pending.is_empty() {
                            break;
                        }
                    }
                }
            }
            _ = ticker.tick() => {
                if poll(&mut pending, &event_tx, threshold).await.is_err() {
                    // Forwarder is gone; nothing left to emit to.
                    break;
                }
                if raw_closed && pending.is_empty() {
                    break;
                }
            }
        }
    }
}

/// Record or refresh a pending entry from a raw change. A path that cannot
/// be read (already gone, or a directory) is not tracked.
fn track(pending: &mut HashMap<PathBuf, Pending>, change: RawChange) {
    let Some((len, modified)) = snapshot(&change.path) else {
        return;
    };
    match pending.entry(change.path) {
        Entry::Occupied(mut occupied) => {
            let entry = occupied.get_mut();
            entry.len = len;
            entry.modified = modified;
            entry.quiet_since = Instant::now();
        }
        Entry::Vacant(vacant) => {
            vacant.insert(Pending {
                kind: change.kind,
                len,
                modified,
                quiet_since: Instant::now(),
            });
        }
    }
}

/// Stat a path, returning (len, mtime) for regular files only.
fn snapshot(path: &PathBuf) -> Option<(u64, Option<SystemTime>)> {
    let metadata = std::fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    Some((metadata.len(), metadata.modified().ok()))
}

/// One polling pass: drop vanished paths, reset timers on ongoing writes,
/// emit entries that have been quiet long enough. Errors only when the
/// receiving side of `event_tx` is gone.
async fn poll(
    pending: &mut HashMap<PathBuf, Pending>,
    event_tx: &mpsc::Sender<WatchEvent>,
    threshold: Duration,
) -> Result<(), mpsc::error::SendError<WatchEvent>> {
    let mut ready: Vec<(PathBuf, WatchEventKind)> = Vec::new();
    let mut gone: Vec<PathBuf> = Vec::new();

    for (path, entry) in pending.iter_mut() {
        match snapshot(path) {
            None => {
                tracing::debug!(path = %path.display(), "Path vanished during stabilization");
                gone.push(path.clone());
            }
            Some((len, modified)) => {
                if len != entry.len || modified != entry.modified {
                    // Still being written; restart the quiet period.
                    entry.len = len;
                    entry.modified = modified;
                    entry.quiet_since = Instant::now();
                } else if entry.quiet_since.elapsed() >= threshold {
                    ready.push((path.clone(), entry.kind));
                }
            }
        }
    }

    for path in gone {
        pending.remove(&path);
    }

    for (path, kind) in ready {
        pending.remove(&path);
        event_tx
            .send(WatchEvent {
                kind,
                path,
                detected_at: Utc::now(),
            })
            .await?;
    }

    Ok(())
}
