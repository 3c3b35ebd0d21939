use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use declgen_codegen::{load_snapshot, GenerationReport, TypeScriptGenerator};
use declgen_core::config::DeclgenConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Generate declaration files from a snapshot.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Configuration file path. Defaults apply when it does not exist.
    #[arg(short, long, default_value = "declgen.toml")]
    pub config: String,

    /// Snapshot file or directory (overrides config).
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip the built-in registry, tag and language overrides.
    #[arg(long)]
    pub no_specials: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<()> {
        let config = self.resolve_config()?;
        super::init_tracing(&config.logging, self.verbose);

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));

        pb.set_message("Loading snapshot...");
        let snapshot_path = Path::new(&config.snapshot.path);
        let snapshot = load_snapshot(snapshot_path)
            .with_context(|| format!("Failed to load snapshot from {}", snapshot_path.display()))?;
        tracing::info!(
            project = %config.project.name,
            classes = snapshot.classes.len(),
            groups = snapshot.groups.len(),
            "Loaded snapshot"
        );

        pb.set_message("Generating declarations...");
        let generator = TypeScriptGenerator::new(&config.output.dir, config.clone());
        let overrides = generator.build_overrides(&snapshot);
        let report = generator
            .generate(&snapshot, &overrides)
            .context("Declaration generation failed")?;

        pb.finish_and_clear();
        print_summary(&report);
        Ok(())
    }

    /// Load the config file, then apply command-line overrides.
    fn resolve_config(&self) -> Result<DeclgenConfig> {
        let mut config = super::load_config(&self.config)?;

        if let Some(snapshot) = &self.snapshot {
            config.snapshot.path = snapshot.clone();
        }
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if self.no_specials {
            config.specials.enabled = false;
        }
        Ok(config)
    }
}

fn print_summary(report: &GenerationReport) {
    println!();
    println!(
        "  {} Generated {} groups with {} members ({} overridden)",
        style("✓").green(),
        style(report.groups).cyan(),
        style(report.members).cyan(),
        style(report.overridden).cyan()
    );
    println!(
        "  {} Resolved against {} classes",
        style("✓").green(),
        style(report.classes).cyan()
    );
    println!(
        "  {} Output: {}",
        style("→").dim(),
        style(report.events_path.display()).cyan()
    );
    if let Some(lang_path) = &report.lang_path {
        println!(
            "  {} Output: {}",
            style("→").dim(),
            style(lang_path.display()).cyan()
        );
    }
    println!();
}
