//! Command-line interface for the c4express utility
//!
//! Provides a CLI to expand compact architecture diagram definitions into C4
//! workspace JSON.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::colorizer::{format_messages, ColorChoice};
use c4express::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use c4express::core::{Messages, PaperSize};
use c4express::{Orchestrator, Transformation};

/// c4express - Expand compact architecture diagram definitions
#[derive(Parser)]
#[command(name = "c4express")]
#[command(about = "A Rust utility to expand compact architecture diagram definitions into C4 workspace JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error); logging is off unless set
    /// or --verbose is given
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a definition to workspace JSON
    Convert {
        /// Input file containing the JSON definition (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the workspace JSON (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,

        /// Refuse to write output when any error or warning was recorded
        #[arg(long)]
        strict: bool,

        /// When to use colors in message output
        #[arg(
            long,
            value_enum,
            default_value_t = ColorChoice::Auto
        )]
        color: ColorChoice,
    },

    /// Check a definition and report its errors and warnings
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Report messages as JSON
        #[arg(long)]
        json: bool,

        /// When to use colors in message output
        #[arg(
            long,
            value_enum,
            default_value_t = ColorChoice::Auto
        )]
        color: ColorChoice,
    },

    /// Show supported paper sizes
    PaperSizes {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PaperSizeEntry {
    name: &'static str,
    width: u32,
    height: u32,
}

/// Main CLI application
pub struct C4ExpressApp {
    orchestrator: Orchestrator,
}

impl C4ExpressApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self {
            orchestrator: Orchestrator::new(),
        }
    }

    /// Pick the log level: environment first, then flags
    fn log_level(cli: &Cli) -> String {
        std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| cli.log_level.map(|level| level.as_str().to_string()))
            .unwrap_or_else(|| {
                if cli.verbose {
                    "info".to_string()
                } else {
                    "off".to_string()
                }
            })
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = Self::log_level(&cli);
        let log_format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("c4express v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                compact,
                strict,
                color,
            } => self.convert_command(input, output, compact, strict, color, cli.verbose),
            Commands::Validate { input, json, color } => {
                self.validate_command(input, json, color, cli.verbose)
            }
            Commands::PaperSizes { json } => self.paper_sizes_command(json, cli.verbose),
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        compact: bool,
        strict: bool,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let Transformation {
            workspace,
            messages,
        } = self.orchestrator.run(&content);
        Self::report(&messages, color.enabled());

        let Some(workspace) = workspace else {
            bail!("The definition could not be decoded");
        };
        debug!(
            errors = messages.errors().len(),
            warnings = messages.warnings().len(),
            "Definition converted"
        );

        if strict && !messages.is_empty() {
            bail!(
                "Not writing output: {} error(s) and {} warning(s) recorded",
                messages.errors().len(),
                messages.warnings().len()
            );
        }

        let json = if compact {
            serde_json::to_string(&workspace)?
        } else {
            serde_json::to_string_pretty(&workspace)?
        };
        self.write_output(output, &json)?;
        info!(bytes = json.len(), views = workspace.view_count(), "Workspace written");

        if verbose {
            eprintln!(
                "Wrote workspace with {} view(s)",
                workspace.view_count()
            );
        }

        if messages.has_errors() {
            bail!("{} error(s) recorded", messages.errors().len());
        }
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(
        &self,
        input: Option<PathBuf>,
        json: bool,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let result = self.orchestrator.run(&content);

        if json {
            println!("{}", serde_json::to_string_pretty(&result.messages)?);
        } else if result.messages.is_empty() {
            println!("✓ Valid definition");
        } else {
            for line in format_messages(&result.messages, color.enabled()) {
                println!("{}", line);
            }
        }

        if result.has_errors() {
            bail!("{} error(s) recorded", result.messages.errors().len());
        }
        Ok(())
    }

    /// Handle the paper-sizes command
    fn paper_sizes_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported paper sizes");
        }

        let entries: Vec<_> = PaperSize::ALL
            .iter()
            .map(|size| {
                let (width, height) = size.dimensions();
                PaperSizeEntry {
                    name: size.name(),
                    width,
                    height,
                }
            })
            .collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            println!("Supported paper sizes:");
            for entry in &entries {
                let marker = if entry.name == PaperSize::default().name() {
                    " (default)"
                } else {
                    ""
                };
                println!(
                    "  {:<18} {:>5} x {:<5}{}",
                    entry.name, entry.width, entry.height, marker
                );
            }
            println!();
            println!("Total: {} paper sizes supported", entries.len());
        }

        Ok(())
    }

    /// Print messages to stderr, errors first
    fn report(messages: &Messages, colorize: bool) {
        for line in format_messages(messages, colorize) {
            eprintln!("{}", line);
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                writeln!(stdout, "{}", content)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for C4ExpressApp {
    fn default() -> Self {
        Self::new()
    }
}
