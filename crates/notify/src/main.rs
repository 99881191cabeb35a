//! Readwise notifier CLI - deliver recent highlights to a Slack webhook.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use readwise_notify::{pipeline, Config};

/// Fetch recent Readwise highlights and post them to a Slack webhook.
#[derive(Parser)]
#[command(name = "readwise-notify")]
#[command(about = "Deliver recent Readwise highlights to a Slack webhook")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Render the digest but skip the webhook delivery
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("readwise_notify=debug,info")
    } else {
        EnvFilter::new("readwise_notify=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = Config::from_env()?;

    let outcome = if cli.dry_run {
        pipeline::dry_run(&config).await?
    } else {
        pipeline::run(&config).await?
    };

    println!("\n📊 Run Summary");
    println!("   Fetched: {}", outcome.fetched);
    println!("   Delivered: {}", if outcome.delivered { "yes" } else { "no" });

    Ok(())
}
