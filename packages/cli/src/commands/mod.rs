pub mod init;
pub mod lint;
pub mod project;
pub mod reconcile;
pub mod simulate;
pub mod template;

pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
pub use project::{project, ProjectArgs};
pub use reconcile::{reconcile, ReconcileArgs};
pub use simulate::{simulate, SimulateArgs};
pub use template::{template, TemplateArgs};

use anyhow::{bail, Context, Result};
use flowcanvas_model::Document;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a canonical document from a JSON file
pub(crate) fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let document = Document::from_json(&source)
        .with_context(|| format!("Invalid document in {}", path.display()))?;
    debug!(path = %path.display(), kind = %document.kind(), "Loaded document");
    Ok(document)
}

/// Output formats shared by the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

impl Format {
    pub(crate) fn parse(format: &str) -> Result<Self> {
        match format {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => bail!("Unknown format '{}'. Use: text or json", other),
        }
    }
}
