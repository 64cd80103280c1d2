use anyhow::{Context, Result};
use balancex::{loader, BalanceReporter, ReportConfig};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Config {
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log every request to stderr
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    report: ReportConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = Config::parse();
    init_logging(config.verbose, config.debug);

    let addresses = loader::load(&config.report.file);

    let reporter = BalanceReporter::from_config(&config.report)
        .context("Failed to initialize chain clients")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    reporter.report(&addresses, &mut out).await?;

    Ok(())
}

fn init_logging(verbose: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
