//! viq-sso-sync - interactive export/import of SSO users between VIQs
//!
//! Option 1 exports the account users of a source VIQ to the sheet file.
//! Option 2 reads the sheet and creates the missing SSO users as external
//! users in a target VIQ.

use std::path::PathBuf;

use clap::Parser;

use viq_sso_sync::config::{Config, ConfigPaths};
use viq_sso_sync::controller::Controller;
use viq_sso_sync::error::{CliError, CliResult};
use viq_sso_sync::interactive::require_interactive;
use viq_sso_sync::logging::{init_global_logger, LogConfig};

/// Sync SSO users between ExtremeCloud IQ instances
#[derive(Parser)]
#[command(name = "viq-sso-sync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sheet file to export to and import from
    #[arg(long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Base URL of the platform API
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Show workflow progress details
    #[arg(short, long)]
    verbose: bool,

    /// Show HTTP requests and responses
    #[arg(long)]
    debug: bool,

    /// Show HTTP bodies (secrets are redacted)
    #[arg(long)]
    trace: bool,

    /// Suppress diagnostic output
    #[arg(short, long, conflicts_with_all = ["verbose", "debug", "trace"])]
    quiet: bool,

    /// Also write diagnostics to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let log_config = LogConfig::from_args_and_env(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_file.clone(),
    );
    init_global_logger(log_config)
        .map_err(|e| CliError::Io(format!("Cannot open log file: {e}")))?;

    let config = load_config(&cli)?;
    require_interactive()?;

    Controller::new(config).run().await
}

fn load_config(cli: &Cli) -> CliResult<Config> {
    let paths = ConfigPaths::new()?;
    let mut config = Config::load(&paths)?;

    if let Some(ref file) = cli.file {
        config.sheet_file = file.clone();
    }
    if let Some(ref url) = cli.api_url {
        config.api_url = url.clone();
    }
    config.validate()?;

    Ok(config)
}
