//! Diagnostic logging to stderr.
//!
//! Stdout carries only the report (mismatch lines and benchmark lines), so everything logged here
//! goes to stderr.

use tracing_subscriber::EnvFilter;

/// Crate targets that should receive log output. The `civil` library does not log.
const CRATE_TARGETS: &[&str] = &["date_algorithms"];

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace"
	};

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

/// Filter directive enabling `level` for every crate target.
fn default_filter(level: &str) -> String {
	CRATE_TARGETS
		.iter()
		.map(|t| format!("{t}={level}"))
		.collect::<Vec<_>>()
		.join(",")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_filter_test() {
		assert_eq!(default_filter("info"), "date_algorithms=info");
		assert!(EnvFilter::try_new(default_filter("trace")).is_ok());
	}
}
