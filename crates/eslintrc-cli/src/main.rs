//! eslintrc CLI tool.
//!
//! Usage:
//! ```bash
//! eslintrc emit --preset react [DIR]
//! eslintrc show --preset base
//! eslintrc list-presets
//! eslintrc check --preset react [DIR]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use eslintrc_presets::Preset;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Emit, inspect, and drift-check shared ESLint configuration presets
#[derive(Parser)]
#[command(name = "eslintrc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a local overrides file (TOML)
    #[arg(short, long, global = true)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write .eslintrc.json for a preset
    Emit {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Preset to emit
        #[arg(short, long, default_value = "base")]
        preset: PresetArg,

        /// Overwrite an existing .eslintrc.json
        #[arg(long)]
        force: bool,
    },

    /// Print a preset document
    Show {
        /// Preset to print
        #[arg(short, long, default_value = "base")]
        preset: PresetArg,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// List available presets
    ListPresets,

    /// Check a project's .eslintrc.json for drift against a preset
    Check {
        /// Directory holding the .eslintrc.json (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Preset the project was generated from
        #[arg(short, long, default_value = "base")]
        preset: PresetArg,
    },
}

/// Preset selection on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PresetArg {
    /// Server-side / general TypeScript code.
    Base,
    /// TypeScript + React client code.
    React,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Base => Self::Base,
            PresetArg::React => Self::React,
        }
    }
}

/// Output format for the show command.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Engine-shaped pretty JSON.
    #[default]
    Json,
    /// One rule per line.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Emit { dir, preset, force } => {
            commands::emit::run(&dir, preset.into(), cli.overrides.as_deref(), force)
        }
        Commands::Show { preset, format } => commands::show::run(preset.into(), format),
        Commands::ListPresets => {
            commands::list_presets::run();
            Ok(())
        }
        Commands::Check { dir, preset } => {
            commands::check::run(&dir, preset.into(), cli.overrides.as_deref())
        }
    }
}
