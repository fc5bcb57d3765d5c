//! Status command - check server health and current stats
//!
//! # Usage
//!
//! ```bash
//! # Check if server is running
//! poptap status
//!
//! # JSON output
//! poptap status --json
//! ```

use anyhow::{Context, Result};
use clap::Args;

use poptap_client::PoptapClient;

/// Status command arguments
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// API server endpoint URL
    #[arg(long, default_value = "http://127.0.0.1:3001")]
    pub endpoint: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let client = PoptapClient::new(&args.endpoint);

    let health = client
        .health()
        .await
        .with_context(|| format!("server not reachable at {}", args.endpoint))?;
    let stats = client.get_stats().await.context("failed to fetch stats")?;
    let board = client
        .leaderboard()
        .await
        .context("failed to fetch leaderboard")?;

    if args.json {
        let out = serde_json::json!({
            "status": health.status,
            "timestamp": health.timestamp,
            "totalTaps": stats.total_taps,
            "activeUsers": stats.active_users,
            "countries": stats.countries,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Server:      {} ({})", args.endpoint, health.status);
    println!("Time:        {}", health.timestamp);
    println!("Total taps:  {}", stats.total_taps);
    println!("Countries:   {}", stats.countries.len());

    if !board.countries.is_empty() {
        println!();
        println!("Leaderboard:");
        for (rank, entry) in board.countries.iter().enumerate() {
            println!(
                "  {:>2}. {:<4} {:>10}  ({:.1}%)",
                rank + 1,
                entry.country,
                entry.count,
                entry.percentage
            );
        }
    }

    Ok(())
}
