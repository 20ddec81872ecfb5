//! Interactive payroll console.
//!
//! Usage: `payroll [CONFIG_PATH]` (defaults to `./config/payroll.yaml`).
//! Log output goes to stderr and is quiet unless `RUST_LOG` is set.

use std::io;
use std::process::ExitCode;

use payroll_registry::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use payroll_registry::console::Console;
use payroll_registry::logging;
use payroll_registry::registry::PayrollRegistry;
use tracing::error;

fn main() -> ExitCode {
    logging::init("payroll_registry=warn");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load_or_default(&config_path);
    let registry = PayrollRegistry::with_limits(config.limits().clone());
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut console = Console::new(registry, stdin, stdout);

    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Console terminated");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
