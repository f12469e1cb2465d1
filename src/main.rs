//! WeServeFood - Delivery Order Management API
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌──────────┐    ┌────────────┐
//! │  Config  │───▶│  Gateway   │───▶│ Handlers │───▶│OrderService│
//! │  (YAML)  │    │(log+valid.)│    │  (JSON)  │    │(Mutex map) │
//! └──────────┘    └────────────┘    └──────────┘    └────────────┘
//! ```
//!
//! Usage: `weservefood [--env <name>] [--port <port>]`

use std::sync::Arc;

use weservefood::config::AppConfig;
use weservefood::gateway;
use weservefood::{OrderService, OrderStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = weservefood::logging::init_logging(&app_config);

    tracing::info!(
        "Starting WeServeFood in {} mode (git {})",
        env,
        env!("GIT_HASH")
    );

    let orders = Arc::new(OrderService::new(OrderStore::new()));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(gateway::run_server(&app_config.gateway, orders))
}
