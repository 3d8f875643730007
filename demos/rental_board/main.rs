//! Rental board demo
//!
//! Serves the bundled fixture file by default:
//!
//! ```text
//! cargo run --example rental_board
//! curl 'http://127.0.0.1:3000/rentals?name=smith&startDate=2024-06-01'
//! ```
//!
//! Pass another YAML config as first argument to point at a live endpoint.

use rental_board::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "demos/rental_board/board.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = BoardConfig::from_yaml_file(&path)?;
    let bind = config.bind.clone();

    println!("🚗 Rental board on http://{}", bind);
    println!("   GET  /rentals?name=&startDate=&endDate=&page=");
    println!("   POST /rentals/refresh");

    ServerBuilder::new().with_config(config).serve(&bind).await
}
