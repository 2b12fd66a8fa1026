//! Incubator CLI - Command-line interface for the incubator
//!
//! Gives programme staff a terminal view of:
//! - Role dashboards (admin, mentor, founder)
//! - Funding round and resource allocation
//! - Programme reports as text or CSV
//!
//! Each invocation starts from a fresh catalog; nothing is persisted.

use clap::{Parser, Subcommand};
use incubator_runtime::{Incubator, ReportKind};
use incubator_types::{Catalog, Role};
use std::ffi::OsString;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{catalog, dashboard, funding, report, resource};
pub use config::CliConfig;
pub use error::{CliError, CliResult};

/// Incubator CLI application
#[derive(Parser)]
#[command(name = "incubator")]
#[command(about = "Incubator - startup programme management CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Configuration file path
    #[arg(short, long, env = "INCUBATOR_CONFIG")]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for a role
    Dashboard {
        /// Role to view as (admin, mentor, founder)
        #[arg(short, long)]
        role: Option<Role>,

        /// Email of the mentor or founder to view as
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Funding rounds and their allocations
    Funding {
        #[command(subcommand)]
        command: funding::FundingCommands,
    },

    /// Shared resources and their allocations
    Resource {
        #[command(subcommand)]
        command: resource::ResourceCommands,
    },

    /// Show one pool by key (funding round or resource ID)
    Pool {
        /// Pool key, e.g. fund-1 or res-2
        key: String,
    },

    /// Generate a programme report
    Report {
        /// Report kind (performance, progress, funding, comprehensive)
        kind: ReportKind,

        /// Reporting period label
        #[arg(short, long, default_value = "Current")]
        period: String,

        /// Render as CSV instead of text
        #[arg(long)]
        csv: bool,
    },

    /// List startups
    Startups,

    /// List mentors
    Mentors,

    /// List events by date
    Events,

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr so json/yaml output stays parseable
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    let mut incubator = if config.sample_data {
        Incubator::with_sample_data(config.ledger.clone())
    } else {
        Incubator::with_config(Catalog::new(), config.ledger.clone())
    };

    match cli.command {
        Commands::Dashboard { role, email } => {
            let role = role.or(config.default_role).ok_or_else(|| {
                CliError::InvalidArgument(
                    "--role is required when no default_role is configured".into(),
                )
            })?;
            dashboard::execute(&incubator, role, email, cli.output)
        }
        Commands::Funding { command } => funding::execute(command, &mut incubator, cli.output),
        Commands::Resource { command } => resource::execute(command, &mut incubator, cli.output),
        Commands::Pool { key } => {
            let pool = incubator.resolve_pool(&key)?;
            let outcome = incubator.summary(&pool)?;
            funding::show_outcome(&outcome, "Pool summary", cli.output)
        }
        Commands::Report { kind, period, csv } => {
            report::execute(&incubator, kind, &period, csv, cli.output)
        }
        Commands::Startups => catalog::list_startups(&incubator, cli.output),
        Commands::Mentors => catalog::list_mentors(&incubator, cli.output),
        Commands::Events => catalog::list_events(&incubator, cli.output),
        Commands::Config => output::print_structured(&config, cli.output),
    }
}
