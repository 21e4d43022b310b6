//! openfire-tool: inspect and verify the shared OpenFIRE board tables.

use clap::{Parser, Subcommand};
use openfire_rs::config::{self, Config, ExportFormat};
use openfire_rs::{check, export, inspect, ToolError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "openfire.toml";

#[derive(Parser, Debug)]
#[command(name = "openfire-tool", about = "Inspect and verify OpenFIRE pin presets, layouts and serial codes.")]
struct Cli {
    /// Path to a TOML config file (defaults to ./openfire.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the config file
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify every compiled-in table and the config's custom presets
    Check,
    /// List supported boards
    Boards,
    /// Show a board's default or alternate pin mapping
    Preset {
        /// Board token; falls back to the config's board
        board: Option<String>,
        /// Name of an alternate preset
        #[arg(long)]
        alt: Option<String>,
    },
    /// Classify serial command bytes (decimal or 0x-prefixed hex)
    Classify {
        #[arg(required = true)]
        bytes: Vec<String>,
    },
    /// Export the full shared vocabulary
    Export {
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load(cli: &Cli) -> Result<Config, ToolError> {
    match &cli.config {
        Some(path) => Ok(config::load_config(path)?),
        None if Path::new(DEFAULT_CONFIG).exists() => Ok(config::load_config(DEFAULT_CONFIG)?),
        None => Ok(Config::default()),
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode, ToolError> {
    match cli.command {
        Commands::Check => {
            // Findings are logged by run_check; stdout only gets the verdict.
            let report = check::run_check(&config);
            if report.is_ok() {
                println!("OK ({} warnings)", report.warnings.len());
                Ok(ExitCode::SUCCESS)
            } else {
                println!(
                    "FAILED ({} errors, {} warnings)",
                    report.errors.len(),
                    report.warnings.len()
                );
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Boards => {
            print!("{}", inspect::render_boards());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Preset { board, alt } => {
            let token = board.unwrap_or_else(|| config.tool.board.clone());
            print!("{}", inspect::render_preset(&token, alt.as_deref())?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Classify { bytes } => {
            for arg in &bytes {
                let byte = inspect::parse_command_byte(arg)?;
                println!("{}", inspect::describe_byte(byte));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Export { format, output } => {
            let format = format.unwrap_or(config.export.format);
            let text = export::export(format, config.export.pretty)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    tracing::info!("Wrote {:?} export to {}", format, path.display());
                }
                None => println!("{text}"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load(&cli);
    let (level, level_problem) = config::startup_log_level(cli.verbose, loaded.as_ref().ok());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    if let Some(e) = level_problem {
        tracing::warn!("{}, using {}", e, level);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
