use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = concat!(env!("CARGO_CRATE_NAME"), "=debug,tower_http=info");

/// Initializes the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to debug logs for this
/// crate and request logs from `tower_http`.
pub fn init_tracing_subscriber() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_ansi(true))
		.init();
}
