//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use metainfo_xml::ParserMode;

#[derive(Parser)]
#[command(name = "metainfo")]
#[command(about = "Inspect, convert and validate AppStream metadata", long_about = None)]
pub(crate) struct Cli {
    /// Locale to keep translations for ("ALL" keeps every translation)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print a summary of every component in a metadata file
    Show {
        /// Upstream metainfo file or distro catalog
        file: PathBuf,

        /// Print the parsed components as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a metadata file as an upstream file or a distro catalog
    Convert {
        /// Upstream metainfo file or distro catalog
        file: PathBuf,

        /// Output shape: upstream or distro
        #[arg(long)]
        to: ParserMode,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Origin to stamp on the catalog and its components
        #[arg(long)]
        origin: Option<String>,
    },

    /// Check that every component in a metadata file is valid
    Validate {
        /// Upstream metainfo file or distro catalog
        file: PathBuf,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved parser settings and where each value came from
    Show,

    /// Print the settings file path
    Path,
}
