//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::ListStyle;
use crate::domain::CollisionPolicy;

/// In-memory namespace tree driven by CREATE/DELETE/MOVE/LIST commands
#[derive(Parser, Debug)]
#[command(name = "nstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding .nstree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    /// LIST rendering: indent or tree
    #[arg(long, global = true)]
    pub style: Option<ListStyle>,

    /// Name collisions on CREATE/MOVE: replace or reject
    #[arg(long, global = true)]
    pub on_collision: Option<CollisionPolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a command file (stdin if omitted or "-")
    Run {
        /// Command file, one command per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Exit with code 65 if any command failed
        #[arg(long)]
        strict: bool,
    },

    /// Execute commands given as arguments, e.g. "CREATE fruits" LIST
    Exec {
        /// Command lines
        #[arg(required = true, num_args = 1..)]
        commands: Vec<String>,
        /// Exit with code 65 if any command failed
        #[arg(long)]
        strict: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show {
        /// Show a single config file on top of defaults instead
        #[arg(long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
