//! Tracing initialization shared by chatcmd hosts, examples and tests.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Timestamps as "[YYYY-MM-DD HH:MM:SS.micros]" in local time.
struct LocalMicros;

impl FormatTime for LocalMicros {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now: chrono::DateTime<chrono::Local> = std::time::SystemTime::now().into();
		write!(w, "{}", now.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

/// Initialize console logging: INFO by default, overridable with the
/// `RUST_LOG` environment variable.
///
/// # Example
///
/// ```no_run
/// chatcmd_telemetry::init();
/// tracing::info!("resolver ready");
/// ```
pub fn init() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(
			fmt::layer()
				.with_timer(LocalMicros)
				.with_target(true)
				.with_file(false)
				.with_line_number(false),
		)
		.init();
}

/// Like [`init`], but tolerates an already-installed subscriber. Meant for
/// tests, where several cases may race to install one.
pub fn try_init() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let _ = tracing_subscriber::registry()
		.with(env_filter)
		.with(fmt::layer().with_timer(LocalMicros))
		.try_init();
}
