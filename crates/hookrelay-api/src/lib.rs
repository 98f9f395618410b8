//! Hookrelay ingest server
//!
//! Accepts authenticated multipart uploads from the watcher, persists them to
//! a local staging directory, and acknowledges with JSON. Exposed as a
//! library so integration tests can build the router directly.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use routes::setup_routes;
pub use state::AppState;
