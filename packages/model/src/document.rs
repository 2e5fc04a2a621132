//! # Canonical Documents
//!
//! The authoritative, render-agnostic data the editors operate on.
//!
//! Both document kinds may carry the [`Graph`] they were last reconciled
//! from. That cache is editor working state: export and compliance checks
//! read the document fields and ignore it.
//!
//! ## Lifecycle
//!
//! ```text
//! mount (server data / template) → project → edit → reconcile → ... → unmount
//!                                     ↑                  │
//!                                     └── cached graph ──┘
//! ```
//!
//! A wholesale replacement (e.g. an AI-generated document) arrives without a
//! cache, which forces a fresh layout.

use crate::error::{ModelError, ModelResult};
use crate::fsm::FsmDocument;
use crate::graph::Graph;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};

/// Component tree plus its editor graph cache
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeDocument {
    pub root: TreeNode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
}

impl TreeDocument {
    pub fn new(root: TreeNode) -> Self {
        Self { root, graph: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Tree,
    Fsm,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Tree => "tree",
            DocumentKind::Fsm => "fsm",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical document of either kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "documentType", rename_all = "camelCase")]
pub enum Document {
    Tree(TreeDocument),
    Fsm(FsmDocument),
}

impl Document {
    pub fn tree(root: TreeNode) -> Self {
        Document::Tree(TreeDocument::new(root))
    }

    pub fn fsm(document: FsmDocument) -> Self {
        Document::Fsm(document)
    }

    pub fn from_json(source: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Tree(_) => DocumentKind::Tree,
            Document::Fsm(_) => DocumentKind::Fsm,
        }
    }

    /// Graph from the last reconciliation, if any
    pub fn cached_graph(&self) -> Option<&Graph> {
        match self {
            Document::Tree(doc) => doc.graph.as_ref(),
            Document::Fsm(doc) => doc.graph.as_ref(),
        }
    }

    pub fn set_cached_graph(&mut self, graph: Graph) {
        match self {
            Document::Tree(doc) => doc.graph = Some(graph),
            Document::Fsm(doc) => doc.graph = Some(graph),
        }
    }

    /// Drop the graph cache so the next projection lays out from scratch
    pub fn invalidate_cache(&mut self) {
        match self {
            Document::Tree(doc) => doc.graph = None,
            Document::Fsm(doc) => doc.graph = None,
        }
    }

    pub fn without_cache(mut self) -> Self {
        self.invalidate_cache();
        self
    }

    pub fn as_tree(&self) -> ModelResult<&TreeDocument> {
        match self {
            Document::Tree(doc) => Ok(doc),
            other => Err(ModelError::kind_mismatch("tree", other.kind().as_str())),
        }
    }

    pub fn as_fsm(&self) -> ModelResult<&FsmDocument> {
        match self {
            Document::Fsm(doc) => Ok(doc),
            other => Err(ModelError::kind_mismatch("fsm", other.kind().as_str())),
        }
    }
}

impl From<TreeNode> for Document {
    fn from(root: TreeNode) -> Self {
        Document::tree(root)
    }
}

impl From<FsmDocument> for Document {
    fn from(document: FsmDocument) -> Self {
        Document::Fsm(document)
    }
}
