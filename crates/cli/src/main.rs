//! Buildmeta CLI - evaluates the project manifest and prints the derived
//! build metadata (version fields and resolved dependency coordinates).

use std::path::PathBuf;

use anyhow::{Context, Result};
use buildmeta_core::application::{evaluate, Evaluation};
use buildmeta_infra_config::load_manifest;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_MANIFEST: &str = "buildmeta.toml";

#[derive(Parser)]
#[command(name = "buildmeta")]
#[command(about = "Build metadata evaluator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the project manifest
    #[arg(long, env = "BUILDMETA_MANIFEST", default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Section {
    Libraries,
    Plugins,
    All,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the four derived version fields
    Version,

    /// Print resolved dependency coordinates
    Catalog {
        /// Which catalog section to print
        #[arg(long, value_enum, default_value = "all")]
        section: Section,
    },

    /// Evaluate the manifest and fail on any configuration error
    Check,
}

#[derive(Tabled)]
struct FieldRow {
    field: &'static str,
    value: String,
}

#[derive(Tabled)]
struct CoordinateRow {
    alias: String,
    coordinate: String,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let manifest = load_manifest(&cli.manifest)
        .with_context(|| format!("failed to load {}", cli.manifest.display()))?;
    let evaluation = evaluate::execute(&manifest).context("manifest evaluation failed")?;

    info!(
        project = %evaluation.project,
        code = evaluation.fields.code,
        "manifest evaluated"
    );

    match cli.command {
        Commands::Version => print_version(&evaluation, cli.format)?,
        Commands::Catalog { section } => print_catalog(&evaluation, section, cli.format)?,
        Commands::Check => {
            println!(
                "{} {} {} evaluates cleanly",
                "✓".green().bold(),
                evaluation.project.bold(),
                evaluation.fields.name
            );
        }
    }

    Ok(())
}

fn init_logging() {
    let log_format = std::env::var("BUILDMETA_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("buildmeta=warn"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

fn print_version(evaluation: &Evaluation, format: Format) -> Result<()> {
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&evaluation.fields)?);
        return Ok(());
    }

    let rows = vec![
        FieldRow {
            field: "code",
            value: evaluation.fields.code.to_string(),
        },
        FieldRow {
            field: "database",
            value: evaluation.fields.database.to_string(),
        },
        FieldRow {
            field: "name",
            value: evaluation.fields.name.clone(),
        },
        FieldRow {
            field: "snapshot",
            value: evaluation.fields.snapshot.clone(),
        },
    ];

    println!("{}", Table::new(rows));
    Ok(())
}

fn print_catalog(evaluation: &Evaluation, section: Section, format: Format) -> Result<()> {
    let mut entries = Vec::new();
    if section != Section::Plugins {
        entries.extend(evaluation.libraries.iter());
    }
    if section != Section::Libraries {
        entries.extend(evaluation.plugins.iter());
    }

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "catalog is empty".yellow());
        return Ok(());
    }

    let rows: Vec<CoordinateRow> = entries
        .into_iter()
        .map(|entry| CoordinateRow {
            alias: entry.alias.clone(),
            coordinate: entry.coordinate.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
