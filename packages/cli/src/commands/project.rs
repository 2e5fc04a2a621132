use super::{load_document, Format};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flowcanvas_model::Graph;
use flowcanvas_projection::{project as project_document, project_fresh};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Document JSON file
    pub input: PathBuf,

    /// Ignore the cached graph and lay out from scratch
    #[arg(long)]
    pub fresh: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn project(args: ProjectArgs, cwd: &str) -> Result<()> {
    let format = Format::parse(&args.format)?;
    let config = Config::load(cwd)?;
    let document = load_document(&args.input)?;

    let graph = if args.fresh {
        project_fresh(&document, &config.editor.layout)
    } else {
        project_document(&document, &config.editor.layout)
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
        Format::Text => print_graph(&graph),
    }

    Ok(())
}

pub(crate) fn print_graph(graph: &Graph) {
    println!("{} ({})", "Nodes".bold(), graph.nodes.len());
    for node in &graph.nodes {
        println!(
            "  {} {} @ ({}, {})",
            node.id.bright_white(),
            format!("[{}]", node.data.label).dimmed(),
            node.position.x,
            node.position.y
        );
    }

    println!("{} ({})", "Edges".bold(), graph.edges.len());
    for edge in &graph.edges {
        match &edge.label {
            Some(label) => println!("  {} --{}--> {}", edge.source, label.cyan(), edge.target),
            None => println!("  {} --> {}", edge.source, edge.target),
        }
    }
}
