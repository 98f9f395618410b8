use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an env-filter override (`RUST_LOG` style).
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "hookrelay=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
