use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use declgen_core::config::DeclgenConfig;
use std::fs;
use std::path::Path;

/// Write a default configuration file.
#[derive(Parser)]
pub struct InitCommand {
    /// Configuration file path.
    #[arg(short, long, default_value = "declgen.toml")]
    pub config: String,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self) -> Result<()> {
        let path = Path::new(&self.config);
        write_default_config(path, self.force)?;

        println!(
            "{} Created {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        Ok(())
    }
}

/// Write the default configuration to `path`, refusing to clobber unless `force`.
fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let content = DeclgenConfig::default().to_toml()?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
