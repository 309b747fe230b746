//! Marquee main entry point
//!
//! This is the command-line interface for the Marquee catalog scraper.

use clap::Parser;
use marquee::config::load_config;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Marquee: a paginated movie-catalog scraper
///
/// Marquee fetches a fixed run of listing pages from one catalog site,
/// extracts a record per movie card, and writes the results to a CSV file
/// that spreadsheet tools open with the correct encoding.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version)]
#[command(about = "A paginated movie-catalog scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else {
        handle_scrape(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("marquee=info,warn"),
            1 => EnvFilter::new("marquee=debug,info"),
            2 => EnvFilter::new("marquee=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &marquee::config::Config) {
    println!("=== Marquee Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Pages: 1..={}", config.site.page_count);
    println!("  First page URL: {}", config.site.page_url(1));

    println!("\nClient:");
    println!("  User agent: {}", config.client.user_agent);
    println!("  Timeout: {}s", config.client.timeout_secs);

    println!("\nThrottle:");
    println!(
        "  Inter-page delay: {}ms - {}ms",
        config.throttle.min_delay_ms, config.throttle.max_delay_ms
    );

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\nSelector chains:");
    println!("  card:   {}", config.selectors.card.join(", "));
    println!("  title:  {}", config.selectors.title.join(", "));
    println!("  detail: {}", config.selectors.detail.join(", "));
    println!("  image:  {}", config.selectors.image.join(", "));
    println!("  rating: {}", config.selectors.rating.join(", "));
    println!("  types:  {}", config.selectors.types.join(", "));

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch {} pages from {}",
        config.site.page_count, config.site.base_url
    );
}

/// Handles the main scrape operation
async fn handle_scrape(config: marquee::config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let csv_path = config.output.csv_path.clone();

    tracing::info!(
        "Scraping {} pages from {}",
        config.site.page_count,
        config.site.base_url
    );

    let records = marquee::scrape(config).await?;

    if records.is_empty() {
        tracing::warn!("No records scraped");
    }

    match marquee::write_records(&records, Path::new(&csv_path)) {
        Ok(()) => {
            println!("Saved {} rows to {}", records.len(), csv_path);
        }
        Err(e) => {
            tracing::error!("Failed to write output: {}", e);
            return Err(e.into());
        }
    }

    // Quick sample of what was scraped
    for (i, record) in records.iter().take(5).enumerate() {
        println!(
            "{}. {} | {} | {}",
            i + 1,
            record.title,
            record.rating,
            record.types
        );
    }

    Ok(())
}
