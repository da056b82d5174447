use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates perfect mazes and finds the way out.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Write logs to a daily-rotated file in this directory instead of stderr.
    /// The level is taken from the MAZESCAPE_LOG environment variable.
    #[clap(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new random maze
    Generate {
        /// Number of rows, at least 3
        height: usize,
        /// Number of columns, at least 3
        width: usize,
        /// Seed for a reproducible maze
        #[clap(short, long)]
        seed: Option<u64>,
        /// Save the maze in its text format to this file
        #[clap(short, long)]
        export: Option<PathBuf>,
        #[clap(flatten)]
        render: RenderArgs,
    },
    /// Load a maze from its text format
    Load {
        /// File holding the maze
        file: PathBuf,
        #[clap(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RenderArgs {
    /// Find the escape route and draw it
    #[clap(long)]
    pub solve: bool,
    /// Draw with terminal colors
    #[clap(long)]
    pub color: bool,
}
