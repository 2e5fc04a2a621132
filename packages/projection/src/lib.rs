//! # FlowCanvas Projection
//!
//! Derives the positioned node/edge graph the editors render from a
//! canonical document.
//!
//! Projection is a pure function of its input:
//!
//! - a document carrying a cached graph (from a previous reconciliation)
//!   projects to that graph unchanged, so user-arranged positions survive;
//! - otherwise the document is laid out from scratch, as a tree
//!   ([`project_tree`]) or as a grid of states ([`project_fsm`]).
//!
//! Malformed input never fails projection: missing children are empty,
//! duplicate ids are replaced, dangling transitions are dropped with a
//! warning.

mod edge_ids;
pub mod fsm;
pub mod layout;
pub mod tree;

pub use fsm::project_fsm;
pub use layout::LayoutOptions;
pub use tree::project_tree;

use flowcanvas_model::{Document, Graph};
use tracing::debug;

/// Project a document, reusing its cached graph when present
pub fn project(document: &Document, layout: &LayoutOptions) -> Graph {
    if let Some(graph) = document.cached_graph() {
        debug!(
            kind = %document.kind(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "Reusing cached graph"
        );
        return graph.clone();
    }

    project_fresh(document, layout)
}

/// Project a document ignoring any cached graph
pub fn project_fresh(document: &Document, layout: &LayoutOptions) -> Graph {
    match document {
        Document::Tree(tree) => project_tree(&tree.root, layout),
        Document::Fsm(fsm) => project_fsm(fsm, layout),
    }
}
