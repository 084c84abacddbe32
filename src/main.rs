//! Mauka Phonebook - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the requested command
//! against a fresh in-memory directory.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mauka_phonebook_lib::config::{ConfigLoader, LogConfig, PhonebookConfig, ENV_PREFIX};
use mauka_phonebook_lib::directory::{Directory, Lookup, PhoneNumber};
use mauka_phonebook_lib::error::{
    report_error, set_error_reporter, ErrorContext, PhonebookError, PhonebookResult,
    TracingErrorReporter,
};
use mauka_phonebook_lib::shell::Shell;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Mauka Phonebook.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Phonebook", version, author, about)]
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
    /// Run the interactive contact menu
    Shell,

    /// Search a prefix among contacts given on the command line
    Lookup {
        /// Name or prefix to search for
        prefix: String,

        /// Contact to load first, as NAME=PHONE (repeatable)
        #[clap(short = 'C', long = "contact", value_parser = parse_contact)]
        contacts: Vec<(String, PhoneNumber)>,
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

/// Parses a `NAME=PHONE` pair.
fn parse_contact(raw: &str) -> Result<(String, PhoneNumber), String> {
    let (name, phone) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PHONE, got '{raw}'"))?;
    let phone = phone
        .trim()
        .parse()
        .map_err(|e| format!("invalid phone number '{phone}': {e}"))?;
    Ok((name.trim().to_string(), phone))
}

/// Initialize the logging system. Logs go to stderr so they never mix with
/// shell output.
fn init_logging(log: &LogConfig) -> PhonebookResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| PhonebookError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let command = args.command.unwrap_or(Command::Shell);
    if let Command::GenConfig { output } = &command {
        let toml = PhonebookConfig::default().to_toml_string()?;
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(output, toml).with_context(|| format!("writing {}", output.display()))?;
        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging comes up even when the configuration is broken, so the error is visible
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(
                ErrorContext::new(e.into(), "config")
                    .with_details(format!("config file: {:?}", args.config)),
            );
            process::exit(1);
        }
    };

    match command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::Shell => {
            let mut directory = Directory::with_config(&config)?;
            let stdin = io::stdin();
            Shell::new(&mut directory, stdin.lock(), io::stdout())
                .run()
                .context("shell session failed")?;
            Ok(())
        }
        Command::Lookup { prefix, contacts } => {
            let mut directory = Directory::with_config(&config)?;
            for (name, phone) in &contacts {
                directory
                    .insert_contact(name, *phone)
                    .with_context(|| format!("loading contact '{name}'"))?;
            }

            let mut stdout = io::stdout().lock();
            match directory.lookup_by_prefix(&prefix)? {
                Lookup::Found { contacts, .. } => {
                    for contact in contacts {
                        writeln!(stdout, "{}  {}", contact.name, contact.phone)?;
                    }
                }
                Lookup::NotFound { .. } => writeln!(stdout, "Not found")?,
            }
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
