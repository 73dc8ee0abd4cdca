//! CLI tool to resolve a route against a running PilgrimPath server.
//!
//! Logs in, applies the selection, triggers "find route" when the start is
//! not the user position, and prints the resolved path.

use clap::Parser;
use pilgrim_cli::PilgrimClient;

/// Resolve a route between two registered markers
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// PilgrimPath server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Start marker key
    #[arg(long, default_value = "user")]
    start: String,

    /// End marker key
    #[arg(long, default_value = "mahakaleshwar")]
    end: String,

    /// Route preference (ai or shortest), only valid when starting at "user"
    #[arg(long)]
    preference: Option<String>,

    /// Login email
    #[arg(long, default_value = "cli@pilgrimpath.local")]
    email: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("Connecting to PilgrimPath Server at {}...", args.url);
    let mut client = PilgrimClient::new(&args.url);
    let login = client.login(&args.email, "cli-session").await?;
    println!("Logged in as {} ({})", args.email, login.role);

    client
        .update_selection(Some(&args.start), Some(&args.end), None)
        .await?;
    if let Some(preference) = args.preference.as_deref() {
        client
            .update_selection(None, None, Some(preference))
            .await?;
    }

    // A non-user start shows nothing until "find route" is pressed.
    let state = if args.start == "user" {
        client.nav_state().await?
    } else {
        client.find_route().await?
    };

    match &state["route"] {
        route if route.is_null() => {
            if let Some(notice) = state["notice"].as_str() {
                println!("No route: {}", notice);
            } else {
                println!("No route resolved.");
            }
        }
        route => {
            println!();
            println!("{}", route["name"].as_str().unwrap_or("Route"));
            println!("  {}", route["description"].as_str().unwrap_or(""));
            println!(
                "  Color: {}  Distance: {}m",
                route["color"].as_str().unwrap_or("?"),
                route["distance_m"].as_i64().unwrap_or(0)
            );
            if let Some(path) = route["path"].as_array() {
                println!("  Path ({} points):", path.len());
                for point in path {
                    println!("    ({}, {})", point["lat"], point["lon"]);
                }
            }
        }
    }

    Ok(())
}
