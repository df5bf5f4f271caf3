use std::cmp::Ordering;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use questionpy_common::config::{CliConfig, OutputFormat};
use questionpy_common::logging::init_logging;
use questionpy_common::{APIVersion, SemVer, Size, SizeUnit};
use serde_json::json;
use tracing::debug;

#[derive(Parser)]
#[command(name = "qpy-common")]
#[command(version, about = "Inspect QuestionPy versions and sizes")]
struct Cli {
    /// Configuration file (defaults to the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a semantic version
    Semver { version: String },
    /// Parse an API version
    Api { version: String },
    /// Parse a size such as "1.5 GiB"
    Size {
        size: String,
        /// Also express the size in this unit
        #[arg(long)]
        to: Option<SizeUnit>,
    },
    /// Compare two versions, printing <, = or >
    Compare {
        left: String,
        right: String,
        /// Treat both arguments as API versions
        #[arg(long)]
        api: bool,
    },
    /// Check a semantic version against an expression such as ">=1.2.0"
    Matches { version: String, expr: String },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.log_file.is_some() {
        config.log.file = cli.log_file;
    }
    let _guard = init_logging(&config.log)?;
    debug!("Loaded configuration: {:?}", config);

    run(cli.command, config.output.format)
}

fn run(command: Command, format: OutputFormat) -> anyhow::Result<ExitCode> {
    match command {
        Command::Semver { version } => {
            let version = SemVer::from_string(&version)?;
            emit(
                format,
                &version.to_string(),
                json!({
                    "version": version,
                    "major": version.major(),
                    "minor": version.minor(),
                    "patch": version.patch(),
                    "prerelease": version.prerelease(),
                    "build": version.build(),
                }),
            );
        }
        Command::Api { version } => {
            let version = APIVersion::from_string(&version)?;
            emit(
                format,
                &version.to_string(),
                json!({
                    "version": version,
                    "major": version.major(),
                    "minor": version.minor(),
                }),
            );
        }
        Command::Size { size, to } => {
            let size = Size::from_string(&size)?;
            let converted = to.map(|unit| size.convert_to(unit));
            let plain = match (to, converted) {
                (Some(unit), Some(value)) => format!("{} ({} bytes, {} {})", size, size.bytes(), value, unit),
                _ => format!("{} ({} bytes)", size, size.bytes()),
            };
            emit(
                format,
                &plain,
                json!({
                    "bytes": size.bytes(),
                    "display": size.to_string(),
                    "unit": to,
                    "converted": converted,
                }),
            );
        }
        Command::Compare { left, right, api } => {
            let ordering = if api {
                APIVersion::from_string(&left)?.cmp(&APIVersion::from_string(&right)?)
            } else {
                SemVer::from_string(&left)?.cmp(&SemVer::from_string(&right)?)
            };
            let symbol = match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            emit(format, symbol, json!({ "ordering": symbol }));
        }
        Command::Matches { version, expr } => {
            let matched = SemVer::from_string(&version)?
                .matches(&expr)
                .with_context(|| format!("Failed to evaluate '{expr}'"))?;
            emit(format, &matched.to_string(), json!({ "matches": matched }));
            if !matched {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn emit(format: OutputFormat, plain: &str, value: serde_json::Value) {
    match format {
        OutputFormat::Plain => println!("{plain}"),
        OutputFormat::Json => println!("{value}"),
    }
}
