/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! bibhtml CLI - Main entry point

use anyhow::Result;
use bibhtml_core::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Convert BibJSON to marked up HTML.
///
/// Output is always written to output.html in the working directory.
#[derive(Parser)]
#[command(name = "bibhtml")]
#[command(version, about, long_about = None)]
struct Cli {
    /// BibJSON file to be converted
    bibjson: PathBuf,

    /// BibTeX file to be converted
    bibtex: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibhtml=info,bibhtml_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::default();

    tracing::debug!(bibjson = %cli.bibjson.display(), bibtex = %cli.bibtex.display(), "Converting");
    match bibhtml_core::convert(&cli.bibjson, &cli.bibtex, &config) {
        Ok(_) => Ok(()),
        // Load errors print the bare message.
        Err(err) if err.is_load_error() => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
