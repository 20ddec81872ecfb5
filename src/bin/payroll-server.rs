//! Payroll HTTP server.
//!
//! Usage: `payroll-server [CONFIG_PATH]` (defaults to `./config/payroll.yaml`).

use payroll_registry::api::{AppState, create_router};
use payroll_registry::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use payroll_registry::error::PayrollResult;
use payroll_registry::logging;
use payroll_registry::registry::PayrollRegistry;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> PayrollResult<()> {
    logging::init("payroll_registry=info");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load_or_default(&config_path);

    let registry = PayrollRegistry::with_limits(config.limits().clone());
    let router = create_router(AppState::new(registry));

    let listener = TcpListener::bind(&config.server().bind_address).await?;
    info!(address = %config.server().bind_address, "Payroll server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
