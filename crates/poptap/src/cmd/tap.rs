//! Tap command - send test taps to a running server
//!
//! Taps go through the client's macro guard, so a large `--count` with no
//! delay demonstrates the anti-macro suppression end to end.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use poptap_client::{PoptapClient, TapOutcome};

/// Tap command arguments
#[derive(Args, Debug)]
pub struct TapArgs {
    /// API server endpoint URL
    #[arg(long, default_value = "http://127.0.0.1:3001")]
    pub endpoint: String,

    /// Number of taps to attempt
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,

    /// Delay between taps in milliseconds
    #[arg(short, long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Run the tap command
pub async fn run(args: TapArgs) -> Result<()> {
    let mut client = PoptapClient::new(&args.endpoint);

    let mut recorded = 0u32;
    let mut suppressed = 0u32;
    let mut last_total = 0u64;

    for _ in 0..args.count {
        match client.tap().await.context("tap request failed")? {
            TapOutcome::Recorded(tap) => {
                recorded += 1;
                last_total = tap.global_total;
            }
            TapOutcome::Suppressed => suppressed += 1,
        }

        if args.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
        }
    }

    println!("Recorded:   {}", recorded);
    if suppressed > 0 {
        println!("Suppressed: {} (macro guard)", suppressed);
    }
    if recorded > 0 {
        println!("Global:     {}", last_total);
    }

    Ok(())
}
