use flowcanvas_editor::EditorOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "flowcanvas.config.json";

/// FlowCanvas configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Layout, depth limit and history settings
    #[serde(flatten)]
    pub editor: EditorOptions,

    /// Directory `lint` scans when no input is given
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,
}

fn default_documents_dir() -> String {
    "documents".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_documents_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.documents_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorOptions::default(),
            documents_dir: default_documents_dir(),
        }
    }
}
