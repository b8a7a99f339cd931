//! lookout CLI binary
//!
//! Probe agent endpoints and render agent configuration maps.

use clap::{Parser, Subcommand};
use cli::{AgentConfigArgs, CliError};
use schema::{ProbeReport, DEFAULT_TIMEOUT_MESSAGE, DEFAULT_TIMEOUT_MS};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "lookout")]
#[command(about = "Probe agent endpoints and build agent configuration for integration tests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe one URL (http(s) or ws(s)) once
    Probe {
        url: String,
        /// Time allowed for the endpoint to answer
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
        timeout_ms: u64,
        /// Error text reported if the timeout elapses
        #[arg(long, default_value = DEFAULT_TIMEOUT_MESSAGE)]
        message: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Probe every endpoint in a harness config file
    Check {
        #[arg(long, value_name = "FILE")]
        config: PathBuf,
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the agent configuration map as JSON
    AgentConfig {
        /// Harness config providing the [agent] section
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// REST controller URL; selects the REST agent variant
        #[arg(long, value_name = "URL")]
        rest: Option<String>,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        db_namespace: Option<String>,
        /// DID resolver URL (repeatable)
        #[arg(long = "http-resolver", value_name = "URL")]
        http_resolvers: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = lookout_core::utils::init_tracing(&cli.log_level) {
        eprintln!("failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli.command).await {
        error!("Command failed [{}]: {}", e.code(), e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> cli::Result<()> {
    match command {
        Commands::Probe {
            url,
            timeout_ms,
            message,
            json,
        } => {
            let report = cli::probe_url(&url, timeout_ms, &message).await?;
            print_reports(std::slice::from_ref(&report), json)?;
            cli::ensure_all_reachable(&[report])
        }
        Commands::Check { config, json } => {
            let reports = cli::check_config(&config).await?;
            print_reports(&reports, json)?;
            cli::ensure_all_reachable(&reports)
        }
        Commands::AgentConfig {
            config,
            rest,
            label,
            db_namespace,
            http_resolvers,
        } => {
            let map = cli::agent_config_map(&AgentConfigArgs {
                config,
                rest_url: rest,
                label,
                db_namespace,
                http_resolvers,
            })?;
            println!("{}", serde_json::to_string_pretty(&map)?);
            Ok(())
        }
    }
}

fn print_reports(reports: &[ProbeReport], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            println!("{}", cli::render_report(report));
        }
    }
    Ok(())
}
