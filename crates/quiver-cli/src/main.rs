//! Quiver CLI
//!
//! Resolves tool command names against the current project's restored
//! dependencies and either prints the resulting process specification or
//! launches it.

mod cli;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;
use quiver_resolver::{CommandSpec, ResolverChain, ToolCommandRequest};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{Error, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .init();
        tracing::debug!("verbose mode enabled");
    }

    match cli.command {
        Commands::Resolve { command, args, json } => cmd_resolve(&command, args, json),
        Commands::Run { command, args } => cmd_run(&command, args),
    }
}

fn resolve(command: &str, args: Vec<String>) -> Result<CommandSpec> {
    let resolver_config = config::load_resolver_config()?;
    let chain = ResolverChain::default_chain(resolver_config, config::search_path());

    let project_dir = std::env::current_dir()?;
    let request = ToolCommandRequest::new(command, args, project_dir);

    chain.resolve(&request)?.ok_or_else(|| Error::CommandNotFound {
        command: command.to_string(),
    })
}

fn cmd_resolve(command: &str, args: Vec<String>, json: bool) -> Result<()> {
    let spec = resolve(command, args)?;
    if json {
        let value = serde_json::json!({
            "executable": spec.executable,
            "argv": spec.argv,
            "args": spec.args,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", spec.executable.display());
        for arg in &spec.args {
            println!("  {arg}");
        }
    }
    Ok(())
}

fn cmd_run(command: &str, args: Vec<String>) -> Result<()> {
    let spec = resolve(command, args)?;
    tracing::debug!(executable = %spec.executable.display(), "launching");

    // Discrete argv elements go to the process as-is; the escaped form is
    // only for rendering a joined command line.
    let status = std::process::Command::new(&spec.executable)
        .args(&spec.argv)
        .status()
        .map_err(|source| Error::Launch {
            executable: spec.executable.clone(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
