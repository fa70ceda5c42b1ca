//! Payroll HTTP server.
//!
//! Environment:
//!
//! - `PAYROLL_CONFIG_DIR`: configuration directory with `holidays.yaml` and
//!   `rates/*.yaml`. The built-in Kenyan tables are used when unset.
//! - `PAYROLL_BIND_ADDR`: listen address, default `0.0.0.0:3000`.
//! - `PAYROLL_DIVISOR_FALLBACK`: `lenient` (default) or `strict`.
//! - `RUST_LOG`: log filter, default `info`.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use kenya_payroll::api::{AppState, create_router};
use kenya_payroll::calculation::DivisorFallback;
use kenya_payroll::config::{ConfigLoader, PayrollConfig};
use kenya_payroll::engine::EngineOptions;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match env::var("PAYROLL_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir)?.into_config(),
        Err(_) => {
            info!("PAYROLL_CONFIG_DIR not set; using built-in Kenyan tables");
            PayrollConfig::kenya()
        }
    };

    let divisor_fallback = match env::var("PAYROLL_DIVISOR_FALLBACK").as_deref() {
        Ok("strict") => DivisorFallback::Strict,
        _ => DivisorFallback::Lenient,
    };

    let state = AppState::with_options(config, EngineOptions { divisor_fallback });
    let app = create_router(state);

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, ?divisor_fallback, "Payroll server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
