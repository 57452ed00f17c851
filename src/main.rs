//! sitecopy main entry point
//!
//! This is the command-line interface for the sitecopy site mirror.

use anyhow::Context;
use clap::Parser;
use sitecopy::config::{load_file_config, CrawlConfig};
use sitecopy::crawler::run_crawl;
use sitecopy::output::print_statistics;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// sitecopy: download a website and everything it references
///
/// Starting from URL, sitecopy downloads every same-domain page, stylesheet,
/// script, image and media source it can reach, and mirrors the site's
/// paths under the output directory.
#[derive(Parser, Debug)]
#[command(name = "sitecopy")]
#[command(version)]
#[command(about = "Website crawler that downloads all resources recursively", long_about = None)]
struct Cli {
    /// Starting URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Output directory for downloaded files [default: ./downloaded]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Maximum recursion depth (negative or omitted: unlimited)
    #[arg(short = 'd', long, value_name = "DEPTH", allow_negative_numbers = true)]
    max_depth: Option<i64>,

    /// Show detailed progress information (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "STRING")]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Critical error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("sitecopy=error"),
        1 => EnvFilter::new("sitecopy=debug,info"),
        2 => EnvFilter::new("sitecopy=trace,debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the run configuration: defaults, then the config file, then flags
fn build_config(cli: &Cli) -> anyhow::Result<CrawlConfig> {
    let mut config = CrawlConfig::new(cli.url.clone());

    if let Some(path) = &cli.config {
        let file = load_file_config(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        tracing::debug!("Loaded defaults from {}", path.display());
        config = config.merge_file(&file);
    }

    if let Some(output) = &cli.output {
        config = config.with_output_root(output.clone());
    }
    if cli.max_depth.is_some() {
        config = config.with_max_depth(cli.max_depth);
    }
    if let Some(user_agent) = &cli.user_agent {
        config = config.with_user_agent(user_agent.clone());
    }

    Ok(config.with_verbose(cli.verbose > 0))
}

/// Handles the crawl operation
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    let verbose = config.verbose;

    let stats = run_crawl(config).await?;

    if verbose {
        println!();
        print_statistics(&stats);
    }

    Ok(())
}
