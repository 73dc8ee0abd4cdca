//! CLI tool to watch the live crowd zones.
//!
//! Opens a navigation view (which starts the simulation on the server) and
//! polls the zone snapshot on an interval.

use clap::Parser;
use pilgrim_cli::PilgrimClient;
use std::time::Duration;
use tokio::time;

/// Poll crowd zone radii from a running PilgrimPath server
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// PilgrimPath server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Login email
    #[arg(long, default_value = "cli@pilgrimpath.local")]
    email: String,

    /// Poll interval in seconds
    #[arg(long, default_value_t = 2)]
    interval: u64,

    /// Number of snapshots to take
    #[arg(long, default_value_t = 10)]
    count: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut client = PilgrimClient::new(&args.url);
    client.login(&args.email, "cli-session").await?;
    client.enter_view().await?;
    println!("Watching crowd zones ({} snapshots)...", args.count);

    let mut ticker = time::interval(Duration::from_secs(args.interval));
    for i in 0..args.count {
        ticker.tick().await;
        let zones = client.zones().await?;
        println!("--- snapshot {} ---", i + 1);
        if let Some(zones) = zones.as_array() {
            for zone in zones {
                println!(
                    "  {:<24} {:>6.1}m  [{}]",
                    zone["name"].as_str().unwrap_or("?"),
                    zone["radius_m"].as_f64().unwrap_or(0.0),
                    zone["level"].as_str().unwrap_or("?")
                );
            }
        }
    }

    // Leave the view so the server can stop the simulation.
    client.exit_view().await?;
    Ok(())
}
