use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use declgen_codegen::{
    load_snapshot, BlockCommentMerger, CommentMerger, DepthFirstResolver, NamespacedFormatter,
    PropertyResolver, TypeFormatter,
};
use declgen_core::config::DeclgenConfig;
use declgen_core::schema::{Metadata, MetadataKind, TypeGraph};
use declgen_core::DeclError;
use std::path::Path;

/// Show how a metadata property resolves for one class.
#[derive(Parser)]
pub struct ResolveCommand {
    /// Configuration file path. Defaults apply when it does not exist.
    #[arg(short, long, default_value = "declgen.toml")]
    pub config: String,

    /// Snapshot file or directory (overrides config).
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Fully qualified class name to start from.
    #[arg(long)]
    pub class: String,

    /// Metadata kind: comment or extra.
    #[arg(long)]
    pub kind: MetadataKind,

    /// Print every fragment in walk order instead of the nearest one.
    #[arg(long)]
    pub all: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self) -> Result<()> {
        let config = self.resolve_config()?;
        let snapshot_path = Path::new(&config.snapshot.path);
        let snapshot = load_snapshot(snapshot_path)
            .with_context(|| format!("Failed to load snapshot from {}", snapshot_path.display()))?;
        let graph = snapshot.type_graph();

        let lines = render_resolution(
            &graph,
            &self.class,
            self.kind,
            self.all,
            &formatter_for(&config),
        )?;

        println!(
            "{} {} of {}",
            style("→").dim(),
            style(self.kind).bold(),
            style(&self.class).cyan()
        );
        if lines.is_empty() {
            println!("  {}", style("(not found)").yellow());
        }
        for line in lines {
            println!("  {}", line);
        }
        Ok(())
    }

    /// Load the config file, then apply the snapshot override.
    fn resolve_config(&self) -> Result<DeclgenConfig> {
        let mut config = super::load_config(&self.config)?;
        if let Some(snapshot) = &self.snapshot {
            config.snapshot.path = snapshot.clone();
        }
        Ok(config)
    }
}

/// The same type rendering `generate` uses for this configuration.
fn formatter_for(config: &DeclgenConfig) -> NamespacedFormatter {
    NamespacedFormatter::new(config.output.type_namespace.clone())
}

fn render_resolution(
    graph: &TypeGraph,
    class: &str,
    kind: MetadataKind,
    all: bool,
    formatter: &dyn TypeFormatter,
) -> Result<Vec<String>> {
    if graph.descriptor_for(class).is_none() {
        return Err(DeclError::NotFound(format!("class {}", class)).into());
    }

    let resolver = DepthFirstResolver;
    let found: Vec<&Metadata> = if all {
        resolver.collect_property(graph, class, kind)
    } else {
        resolver
            .find_property(graph, class, kind)
            .into_iter()
            .collect()
    };

    let merger = BlockCommentMerger;
    let mut lines = Vec::new();
    for metadata in found {
        match metadata {
            Metadata::Comment(fragment) => lines.extend(merger.format_lines(fragment, 0)),
            Metadata::Extra { ty } => lines.push(formatter.format(ty)),
        }
    }
    Ok(lines)
}
