//! Command-line link preview.
//!
//! Resolves a single URL through the same pipeline as the HTTP service,
//! without a cache.
//!
//! # Usage
//!
//! ```bash
//! # Scrape a page
//! cargo run --bin preview -- https://example.com
//!
//! # Map link, printed as the JSON body the API would return
//! cargo run --bin preview -- https://maps.app.goo.gl/abc --kind maps --json
//! ```
//!
//! # Exit Status
//!
//! - `0` - a card was produced (also when the upstream was unreachable)
//! - `2` - the URL was missing or rejected by the resolver

use link_preview::application::services::ResolverKind;
use link_preview::config;
use link_preview::domain::capabilities::Fetcher;
use link_preview::domain::entities::PreviewOutcome;
use link_preview::infrastructure::cache::NullCache;
use link_preview::infrastructure::http::HttpFetcher;
use link_preview::state::build_service;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Resolve a link card for a URL.
#[derive(Parser)]
#[command(name = "preview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to resolve
    url: String,

    /// Resolver to use
    #[arg(short, long, value_enum, default_value_t = Kind::Generic)]
    kind: Kind,

    /// Print the JSON body instead of a formatted card
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Generic,
    Maps,
    MapsOembed,
}

impl From<Kind> for ResolverKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Generic => ResolverKind::Generic,
            Kind::Maps => ResolverKind::Maps,
            Kind::MapsOembed => ResolverKind::MapsOEmbed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so --json output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_from_env().context("Failed to load configuration")?;

    let fetcher: Arc<dyn Fetcher> = Arc::new(
        HttpFetcher::new(config.fetcher_settings()).context("Failed to build HTTP client")?,
    );
    let service = build_service(&config, cli.kind.into(), fetcher, Arc::new(NullCache::new()))?;

    let outcome = service.resolve(&cli.url).await;

    if cli.json {
        print_json(&outcome)?;
    } else {
        print_card(service.kind(), &outcome);
    }

    Ok(match outcome {
        PreviewOutcome::Success(_) | PreviewOutcome::Degraded { .. } => ExitCode::SUCCESS,
        PreviewOutcome::Rejected { .. } | PreviewOutcome::CallerError { .. } => ExitCode::from(2),
    })
}

/// Prints the body the HTTP API would send for this outcome.
fn print_json(outcome: &PreviewOutcome) -> Result<()> {
    let body = match outcome {
        PreviewOutcome::Success(result) | PreviewOutcome::Degraded { result, .. } => {
            serde_json::to_value(result)?
        }
        PreviewOutcome::Rejected { message } | PreviewOutcome::CallerError { message } => {
            serde_json::json!({ "error": message })
        }
    };

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn print_card(kind: ResolverKind, outcome: &PreviewOutcome) {
    match outcome {
        PreviewOutcome::Success(result) => {
            println!("{} {}", "✔".green().bold(), kind.to_string().dimmed());
            println!("  {}: {}", "Title".bright_white(), result.title.cyan());
            println!("  {}: {}", "Image".bright_white(), display_image(&result.image));
        }
        PreviewOutcome::Degraded { result, reason } => {
            println!("{} {}", "⚠".yellow().bold(), kind.to_string().dimmed());
            println!("  {}: {}", "Title".bright_white(), result.title.cyan());
            println!("  {}: {}", "Image".bright_white(), display_image(&result.image));
            println!("  {}: {}", "Reason".bright_white(), reason.yellow());
        }
        PreviewOutcome::Rejected { message } | PreviewOutcome::CallerError { message } => {
            eprintln!("{} {}", "✘".red().bold(), message.red());
        }
    }
}

fn display_image(image: &str) -> ColoredString {
    if image.is_empty() {
        "(none)".dimmed()
    } else {
        image.bright_yellow()
    }
}
