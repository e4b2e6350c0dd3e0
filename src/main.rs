// SPDX-License-Identifier: PMPL-1.0-or-later

//! plotly-locales: inspect, validate and export Plotly locale records
//!
//! Builds the locale table from the compiled-in locales plus any configured
//! locale directories, then answers one command against it.

use anyhow::{anyhow, bail, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use plotly_locales::config::Config;
use plotly_locales::global;
use plotly_locales::report::{self, ReportFormatter};
use plotly_locales::storage::{self, RecordFormat};
use plotly_locales::{LocaleRecord, LocaleTable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plotly-locales")]
#[command(version)]
#[command(about = "Inspect, validate and export Plotly locale records")]
#[command(long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Additional directory of locale files (repeatable)
    #[arg(short = 'L', long = "locale-dir", global = true)]
    locale_dirs: Vec<PathBuf>,

    /// Locale to fall back to for unknown codes
    #[arg(short, long, global = true)]
    default_locale: Option<String>,

    /// Accept dictionary phrases outside the host vocabulary
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered locales
    List,

    /// Show a locale's names, formats and dictionary coverage
    Show {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Validate locale files without registering them
    Validate {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Write a registered locale to a file
    Export {
        #[arg(value_name = "CODE")]
        code: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "js")]
        format: RecordFormat,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Translate a UI phrase, falling back to the default locale
    Translate {
        #[arg(value_name = "CODE")]
        code: String,

        #[arg(value_name = "PHRASE")]
        phrase: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let formatter = ReportFormatter::new();

    match cli.command {
        Commands::Validate { files } => {
            let checks = report::check_files(&files, config.strict);
            formatter.print_checks(&checks);
            if checks.iter().any(|check| !check.passed()) {
                bail!("locale validation failed");
            }
        }

        Commands::List => formatter.print_table(load_table(&config)?),

        Commands::Show { code } => {
            let record = registered(load_table(&config)?, &code)?;
            formatter.print_record(record, &Local::now().naive_local());
        }

        Commands::Export {
            code,
            format,
            output,
        } => {
            let record = registered(load_table(&config)?, &code)?;
            let path = storage::write_record(record, &output, format)?;
            println!("Locale {} saved to: {}", code, path.display());
        }

        Commands::Translate { code, phrase } => {
            let table = load_table(&config)?;
            if !table.contains(&code) {
                log::warn!("locale {} is not registered, using {}", code, table.default_locale());
            }
            println!("{}", table.translate(&code, &phrase));
        }
    }

    Ok(())
}

fn load_table(config: &Config) -> Result<&'static LocaleTable> {
    global::init(config.build_table()?)
}

fn registered<'a>(table: &'a LocaleTable, code: &str) -> Result<&'a LocaleRecord> {
    table
        .lookup(code)
        .ok_or_else(|| anyhow!("locale {} is not registered", code))
}

/// Config file, then environment, then command line flags.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env();
    config.locale_dirs.extend(cli.locale_dirs.iter().cloned());
    if let Some(code) = &cli.default_locale {
        config.default_locale = code.clone();
    }
    if cli.lenient {
        config.strict = false;
    }
    Ok(config)
}
