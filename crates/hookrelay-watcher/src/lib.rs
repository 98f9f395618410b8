//! Hookrelay watcher
//!
//! Observes configured directories for file creation and modification,
//! debounces write bursts until each file is stable, and forwards stabilized
//! files to the ingest server. Exposed as a library so integration tests can
//! drive the pipeline directly.

pub mod forwarder;
pub mod observer;
pub mod stabilizer;
pub mod telemetry;

/// Capacity of the bounded channel between the stabilizer and the forwarder.
/// A full channel applies backpressure to stabilization rather than dropping
/// events.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
