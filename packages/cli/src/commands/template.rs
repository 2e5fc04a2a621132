use anyhow::{bail, Result};
use clap::Args;
use flowcanvas_model::{templates, Document};

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Document kind (tree, fsm)
    pub kind: String,
}

pub fn template(args: TemplateArgs, _cwd: &str) -> Result<()> {
    let document = starter_document(&args.kind)?;
    println!("{}", document.to_json_pretty()?);
    Ok(())
}

pub(crate) fn starter_document(kind: &str) -> Result<Document> {
    match kind {
        "tree" => Ok(templates::default_tree()),
        "fsm" => Ok(templates::default_fsm()),
        other => bail!("Unknown document kind '{}'. Use: tree or fsm", other),
    }
}
