//! Command-line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quiver", version, about = "Run tools restored as project dependencies")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a command name to a process specification without running it
    Resolve {
        /// The tool command name
        command: String,
        /// Arguments to pass to the tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
        /// Print the specification as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a command and launch it
    Run {
        /// The tool command name
        command: String,
        /// Arguments to pass to the tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
