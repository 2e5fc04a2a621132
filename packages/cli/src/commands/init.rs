use super::template::starter_document;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for documents
    #[arg(short, long, default_value = "documents")]
    pub documents_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing FlowCanvas project...".bright_blue().bold());

    let documents_dir = PathBuf::from(cwd).join(&args.documents_dir);
    if !documents_dir.exists() {
        fs::create_dir_all(&documents_dir)?;
        println!("  {} Created {}/", "✓".green(), args.documents_dir);
    }

    for kind in ["tree", "fsm"] {
        let file = documents_dir.join(format!("{}.json", kind));
        if !file.exists() {
            fs::write(&file, starter_document(kind)?.to_json_pretty()?)?;
            println!("  {} Created {}.json", "✓".green(), kind);
        }
    }

    let config = Config {
        documents_dir: args.documents_dir.clone(),
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: flowcanvas project {}/tree.json", args.documents_dir);
    println!("  2. Run: flowcanvas simulate {}/fsm.json start resolve", args.documents_dir);
    println!("  3. Run: flowcanvas lint");

    Ok(())
}
