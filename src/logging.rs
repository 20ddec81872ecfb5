//! Tracing subscriber setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `default_directive` (for example `"payroll_registry=info"`). Calling
/// this more than once is harmless; later calls are ignored.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
