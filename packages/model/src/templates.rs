//! Starter documents for a freshly mounted editor.

use crate::document::Document;
use crate::fsm::{FsmDocument, StateConfig};
use crate::tree::TreeNode;
use serde_json::json;

/// Screen with a header and a content container
pub fn default_tree() -> Document {
    Document::tree(
        TreeNode::new("root", "Screen")
            .with_tag("wcag-2.1")
            .with_child(TreeNode::new("header", "Header").with_prop("title", json!("Untitled")))
            .with_child(TreeNode::new("content", "Container")),
    )
}

/// Request lifecycle: idle → loading → success | error
pub fn default_fsm() -> Document {
    Document::fsm(
        FsmDocument::new()
            .with_state("idle", StateConfig::initial())
            .with_state("loading", StateConfig::new().with_field("spinner", json!(true)))
            .with_state("success", StateConfig::new().with_type("final"))
            .with_state("error", StateConfig::new().with_field("message", json!("Something went wrong")))
            .with_transition("idle", "loading", "start")
            .with_transition("loading", "success", "resolve")
            .with_transition("loading", "error", "reject")
            .with_transition("error", "loading", "retry"),
    )
}
