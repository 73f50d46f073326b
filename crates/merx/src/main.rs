// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merx - extension plugins for an e-commerce host platform.
//!
//! This is the CLI entry point: it inspects the built-in plugin catalog
//! and diagnoses the configured host environment. Plugin registration
//! itself happens inside the host's startup sequence, not here.

use clap::{Parser, Subcommand};

mod doctor;
mod host;
mod status;

/// Merx - extension plugins for an e-commerce host platform.
#[derive(Parser, Debug)]
#[command(name = "merx", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the plugin catalog and requirement-check outcomes.
    Status {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Run diagnostic checks against the configuration.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Search the built-in plugin catalog.
    Plugins {
        /// Filter by slug, name, or description.
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match merx_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            merx_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    match cli.command {
        Some(Commands::Status { plain }) => {
            status::run_status(&config, plain);
        }
        Some(Commands::Doctor { plain }) => {
            doctor::run_doctor(&config, plain);
        }
        Some(Commands::Plugins { query }) => {
            let results = merx_plugin::search_catalog(query.as_deref().unwrap_or(""));
            if results.is_empty() {
                println!("no plugins match");
            }
            for descriptor in results {
                println!(
                    "{:<26} {:<8} {}",
                    descriptor.slug, descriptor.version, descriptor.description
                );
            }
        }
        None => {
            println!("merx: use --help for available commands");
        }
    }
}

/// Install the tracing subscriber from config.
///
/// `RUST_LOG` takes precedence; otherwise the `[log]` section decides the
/// level, with the debug flag raising it to `debug`.
fn init_tracing(config: &merx_config::MerxConfig) {
    use tracing_subscriber::EnvFilter;

    let default_level = if config.log.debug {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
