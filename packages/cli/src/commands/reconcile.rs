use super::load_document;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use flowcanvas_editor::reconcile as reconcile_graph;
use flowcanvas_model::Graph;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Document the graph was edited from
    pub document: PathBuf,

    /// Edited graph JSON file ({ nodes, edges })
    pub graph: PathBuf,

    /// Write the updated document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn reconcile(args: ReconcileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let prior = load_document(&args.document)?;

    let source = fs::read_to_string(&args.graph)
        .with_context(|| format!("Cannot read {}", args.graph.display()))?;
    let graph: Graph = serde_json::from_str(&source)
        .with_context(|| format!("Invalid graph in {}", args.graph.display()))?;

    let updated = reconcile_graph(&graph, &prior, &config.editor)
        .with_context(|| format!("Cannot derive a {} document from {}", prior.kind(), args.graph.display()))?;
    let json = updated.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
