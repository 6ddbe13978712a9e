use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

/// Build a legislator/award CSV report from a funding agency's public API
#[derive(Parser)]
#[command(name = "grantline")]
#[command(
    about = "Fetch federal research awards and join them to congressional districts",
    long_about = None
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("grantline started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli.config).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => grantline::config::load_config(&path)?,
        None => grantline::config::ReportConfig::default(),
    };
    grantline::pipeline::run(&config).await?;
    Ok(())
}
