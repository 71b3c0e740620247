use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset: info for the library, this crate and both binaries.
pub const DEFAULT_FILTER: &str = "cavegen=info,tools=info,cave=info,sweep=info";

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. Stdout is left free for map output.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
