mod generate;
mod init;
mod resolve;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use resolve::ResolveCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use declgen_core::config::{DeclgenConfig, LoggingConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// declgen - TypeScript declarations for a host's scripting events
#[derive(Parser)]
#[command(name = "declgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Write a default declgen.toml.
    Init(InitCommand),

    /// Generate declaration files from a snapshot.
    Generate(GenerateCommand),

    /// Show how a metadata property resolves for one class.
    Resolve(ResolveCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Generate(cmd) => cmd.execute(),
            Commands::Resolve(cmd) => cmd.execute(),
        }
    }
}

/// Load `path`, falling back to defaults when the file does not exist.
fn load_config(path: &str) -> Result<DeclgenConfig> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(DeclgenConfig::default());
    }
    DeclgenConfig::from_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}
