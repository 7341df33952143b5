//! Lanai Trie - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs the concurrent
//! workload against a shared trie.

use clap::{Parser, Subcommand};
use lanai_trie_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig, Validate};
use lanai_trie_lib::error::{LanaiError, LanaiResult};
use lanai_trie_lib::workload;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Lanai Trie driver.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the concurrent insert/search workload
    Stress {
        /// Override the number of worker threads
        #[clap(short, long)]
        threads: Option<usize>,

        /// Override the number of keys each worker inserts
        #[clap(short, long)]
        keys: Option<usize>,

        /// Print the report as JSON on stdout
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system on stderr, keeping stdout for reports.
/// `RUST_LOG` takes precedence over `log.level`.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let result = if log.json {
        tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_file(log.source_location)
                .with_line_number(log.source_location)
                .json()
                .finish(),
        )
    } else {
        tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_file(log.source_location)
                .with_line_number(log.source_location)
                .with_thread_names(true)
                .pretty()
                .finish(),
        )
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads configuration, exiting with an error log on failure.
fn load_or_exit(loader: &ConfigLoader) -> LanaiConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet, fall back to defaults to report
            let _ = init_logging(&LogConfig::default());
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command.unwrap_or(Command::Stress {
        threads: None,
        keys: None,
        json: false,
    }) {
        Command::Stress {
            threads,
            keys,
            json,
        } => {
            let mut config = load_or_exit(&loader);
            init_logging(&config.log)?;

            if let Some(threads) = threads {
                config.workload.threads = threads;
            }
            if let Some(keys) = keys {
                config.workload.keys_per_thread = keys;
            }
            config.workload.validate()?;

            let report = workload::run(&config.workload)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                info!(
                    threads = report.threads,
                    inserts = report.inserts,
                    verified = report.verified,
                    mismatches = report.mismatches,
                    trie_size = report.trie_size,
                    keys = report.keys,
                    values = report.values,
                    insert_ms = report.insert_ms,
                    search_ms = report.search_ms,
                    "Workload finished"
                );
            }

            if report.mismatches > 0 {
                return Err(LanaiError::Workload(format!(
                    "{} searches returned unexpected values",
                    report.mismatches
                )));
            }
            Ok(())
        }
        Command::Validate => {
            let config = load_or_exit(&loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
