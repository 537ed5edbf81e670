//! Medius - containerdisks artifact registry
//!
//! Assembles the artifact registry for a build run and shows which entries a
//! focus string selects.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use medius_core::registry::RegistryConfig;

mod images_cli;

/// Trace modules for discovery tracing
#[derive(Debug, Clone, ValueEnum)]
enum TraceModule {
    Registry,
    Gatherers,
    All,
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "medius",
    about = "Artifact registry and discovery for containerdisks builds",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Enable discovery tracing (comma-separated: registry,gatherers,all)
    #[clap(long, value_delimiter = ',', global = true)]
    trace: Vec<TraceModule>,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Registry configuration file (defaults to medius.yaml in the config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Skip run-time discovery and use the static table only
    #[clap(long, global = true)]
    offline: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Inspect the artifact registry
    Images {
        #[clap(subcommand)]
        command: images_cli::ImagesCommand,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so stdout stays machine readable.
fn initialize_tracing(log_level: &LogLevel, trace_modules: &[TraceModule]) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    for module in trace_modules {
        let directive = match module {
            TraceModule::Registry => "medius_core::registry=trace",
            TraceModule::Gatherers => "medius_core::artifacts=trace",
            TraceModule::All => "medius_core=trace",
        };

        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }

    if !trace_modules.is_empty() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!(trace_modules = ?trace_modules, "Medius discovery tracing enabled");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, &cli.trace);

    let mut config = RegistryConfig::load(cli.config.as_deref())?;
    if cli.offline {
        config = config.offline();
    }

    match cli.command {
        Command::Images { command } => command.execute(&config).await,
    }
}
