//! Editor configuration

use flowcanvas_model::MAX_TREE_DEPTH;
use flowcanvas_projection::LayoutOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    /// Fresh-layout spacing for projection
    pub layout: LayoutOptions,

    /// Deepest tree level reconstruction will descend to, capped at
    /// [`MAX_TREE_DEPTH`] (see [`tree_depth_limit`](Self::tree_depth_limit))
    pub max_tree_depth: usize,

    /// Undo levels kept (0 = unlimited)
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            max_tree_depth: MAX_TREE_DEPTH,
            history_limit: 100,
        }
    }
}

impl EditorOptions {
    /// Depth bound actually enforced: deeper trees could not be saved and
    /// loaded again
    pub fn tree_depth_limit(&self) -> usize {
        self.max_tree_depth.min(MAX_TREE_DEPTH)
    }
}
