//! Stepped grid CLI: generate, export and inspect step meshes.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

mod commands;
mod generator;
mod grid_file;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "stepgrid")]
#[command(version, about = "Watertight stepped relief meshes from 2D height grids")]
struct Cli {
    /// Log mesh construction details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a random bordered grid file (JSON).
    Generate {
        /// Output grid file.
        #[arg(short, long, default_value = "grid.json")]
        output: PathBuf,

        /// Seed for a reproducible grid.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Optional settings file (TOML) with a `[generator]` table.
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Mesh a grid and write it as STL or JSON.
    Export {
        /// Grid file to mesh; a random grid is generated when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: `demo.stl` or `demo.json`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Stl)]
        format: Format,

        /// Optional settings file (TOML) with `[export]` and `[generator]` tables.
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Seed used when generating the grid in memory.
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print face counts, bounds and closure of a grid's mesh.
    Inspect {
        /// Grid file to inspect; a random grid is generated when omitted.
        input: Option<PathBuf>,

        /// Seed used when generating the grid in memory.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Mesh output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// ASCII STL solid.
    Stl,
    /// JSON preview buffers.
    Json,
}

impl Format {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Stl => "stl",
            Format::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            output,
            seed,
            settings,
        } => commands::generate(&output, seed, settings.as_deref()),
        Commands::Export {
            input,
            output,
            format,
            settings,
            seed,
        } => commands::export(input.as_deref(), output, format, settings.as_deref(), seed),
        Commands::Inspect { input, seed } => commands::inspect(input.as_deref(), seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["stepgrid", "export"]).unwrap();
        match cli.command {
            Commands::Export {
                input,
                output,
                format,
                ..
            } => {
                assert!(input.is_none());
                assert!(output.is_none());
                assert_eq!(format, Format::Stl);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["stepgrid", "inspect", "grid.json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Inspect { input: Some(_), .. }));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(Format::Stl.extension(), "stl");
        assert_eq!(Format::Json.extension(), "json");
    }
}
