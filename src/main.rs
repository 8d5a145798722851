//! Mashina crawler main entry point
//!
//! This is the command-line interface for the vehicle-listing crawler.

use clap::Parser;
use mashina_crawler::config::{load_config_with_hash, validate, Config};
use mashina_crawler::crawler::crawl;
use mashina_crawler::logging;
use mashina_crawler::output::print_statistics;
use std::path::{Path, PathBuf};

/// Mashina crawler: a vehicle-listing harvester
///
/// Walks every search results page of m.mashina.kg, fetches each listing's
/// detail page and writes one JSON record per vehicle.
#[derive(Parser, Debug)]
#[command(name = "mashina-crawler")]
#[command(version = "1.0.0")]
#[command(about = "A vehicle-listing harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the results file path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The log file location lives in the config, so load it before logging
    let loaded = cli
        .config
        .as_deref()
        .map(load_config_with_hash)
        .transpose();

    let log_path = match &loaded {
        Ok(Some((config, _))) => config.output.log_path.clone(),
        _ => None,
    };
    let _log_guard = logging::init(cli.verbose, cli.quiet, log_path.as_deref().map(Path::new))?;

    let mut config = match (loaded, &cli.config) {
        (Ok(Some((cfg, hash))), Some(path)) => {
            tracing::info!("Loaded configuration from: {}", path.display());
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        (Err(e), _) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
        _ => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.results_path = output.display().to_string();
    }

    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Mashina Crawler Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Seed URL: {}", config.site.seed_url);
    println!("  Page parameter: {}", config.site.page_param);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);

    println!("\nCrawler:");
    match config.crawler.max_concurrent_fetches {
        0 => println!("  Max concurrent fetches: unbounded"),
        limit => println!("  Max concurrent fetches: {}", limit),
    }

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);
    match &config.output.log_path {
        Some(log_path) => println!("  Log file: {}", log_path),
        None => println!("  Log file: none (stdout only)"),
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", config.site.seed_url);
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting crawl from {}", config.site.seed_url);

    match crawl(config).await {
        Ok(stats) => {
            tracing::info!("Crawl completed successfully");
            print_statistics(&stats);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
