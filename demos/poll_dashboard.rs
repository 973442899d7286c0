//! Polls a stormberry station and logs every display update.
//!
//! Run with `RUST_LOG=info cargo run --example poll_dashboard --features demos -- http://weatherpi.local:5000`.

use std::env;
use std::time::Duration;
use stormberry_dashboard::{Dashboard, DashboardError, LogView};

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    // Set RUST_LOG=info (or debug) to see the updates
    env_logger::init();

    let base_url = env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let period = env::args()
        .nth(2)
        .and_then(|secs| secs.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(60));

    let dashboard = Dashboard::builder()
        .base_url(base_url)
        .view(LogView)
        .build()?;

    println!("Polling every {:?}, press Ctrl-C to stop", period);
    let rounds = dashboard
        .run_periodic(period, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Could not listen for Ctrl-C: {}", e);
            }
        })
        .await;
    println!("Finished after {} refresh rounds", rounds);

    Ok(())
}
