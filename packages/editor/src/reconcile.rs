//! # Reconciliation
//!
//! Derives an updated canonical document from the editor graph.
//!
//! One [`DocumentStrategy`] per document kind plugs projection and
//! reconstruction into the shared [`GraphDocument`](crate::GraphDocument):
//!
//! - [`TreeStrategy`] reads the graph back as a tree: the single node without
//!   a parent is the root, children follow outgoing edges in edge order, each
//!   child's fields come from its own node data. The graph is validated
//!   first; recursion is bounded by `max_depth`.
//! - [`FsmStrategy`] merges each node's data over the prior state config and
//!   rebuilds the transition list from the edges.
//!
//! Dangling edges are dropped in both modes. The returned document carries
//! the graph it was derived from so the next projection reuses it.

use crate::errors::ReconcileError;
use crate::options::EditorOptions;
use flowcanvas_common::GraphIndex;
use flowcanvas_model::{
    Document, DocumentKind, FsmDocument, Graph, NodeType, StateConfig, Transition, TreeDocument,
    TreeNode,
};
use flowcanvas_projection::LayoutOptions;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Per-kind projection and reconstruction
pub trait DocumentStrategy: std::fmt::Debug {
    fn kind(&self) -> DocumentKind;

    /// Type of the nodes this editor holds
    fn node_type(&self) -> NodeType;

    fn project(&self, document: &Document, layout: &LayoutOptions) -> Graph {
        flowcanvas_projection::project(document, layout)
    }

    /// Derive the canonical document from `graph` (already free of dangling
    /// edges), using `prior` for anything the graph does not carry
    fn reconstruct(&self, graph: &Graph, prior: &Document) -> Result<Document, ReconcileError>;
}

#[derive(Debug, Clone)]
pub struct TreeStrategy {
    pub max_depth: usize,
}

impl DocumentStrategy for TreeStrategy {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Tree
    }

    fn node_type(&self) -> NodeType {
        NodeType::Component
    }

    fn reconstruct(&self, graph: &Graph, _prior: &Document) -> Result<Document, ReconcileError> {
        let root = reconstruct_tree(graph, self.max_depth)?;
        Ok(Document::Tree(TreeDocument::new(root)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FsmStrategy;

impl DocumentStrategy for FsmStrategy {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Fsm
    }

    fn node_type(&self) -> NodeType {
        NodeType::UiState
    }

    fn reconstruct(&self, graph: &Graph, prior: &Document) -> Result<Document, ReconcileError> {
        let empty = FsmDocument::default();
        let prior = match prior {
            Document::Fsm(fsm) => fsm,
            Document::Tree(_) => &empty,
        };
        Ok(Document::Fsm(reconcile_fsm(graph, prior)))
    }
}

/// Strategy for a document kind
pub fn strategy_for(kind: DocumentKind, options: &EditorOptions) -> Box<dyn DocumentStrategy> {
    match kind {
        DocumentKind::Tree => {
            let max_depth = options.tree_depth_limit();
            if max_depth < options.max_tree_depth {
                warn!(
                    configured = options.max_tree_depth,
                    limit = max_depth,
                    "Tree depth limit capped to what document JSON can reload"
                );
            }
            Box::new(TreeStrategy { max_depth })
        }
        DocumentKind::Fsm => Box::new(FsmStrategy),
    }
}

/// Derive an updated document from a graph and the document it was edited
/// from. The result carries the (sanitized) graph as its cache.
pub fn reconcile(graph: &Graph, prior: &Document, options: &EditorOptions) -> Result<Document, ReconcileError> {
    let graph = without_dangling_edges(graph);
    let mut document = strategy_for(prior.kind(), options).reconstruct(&graph, prior)?;
    document.set_cached_graph(graph);
    Ok(document)
}

/// Copy of `graph` minus edges whose source or target is not a node
pub fn without_dangling_edges(graph: &Graph) -> Graph {
    let index = GraphIndex::new(graph);
    let dangling = index.dangling_edges();
    if dangling.is_empty() {
        return graph.clone();
    }

    for edge in dangling {
        warn!(edge = %edge.id, source = %edge.source, target = %edge.target, "Dropping dangling edge");
    }

    Graph::new(
        graph.nodes.clone(),
        graph
            .edges
            .iter()
            .filter(|edge| index.contains(&edge.source) && index.contains(&edge.target))
            .cloned()
            .collect(),
    )
}

/// Read a graph back as a component tree
pub fn reconstruct_tree(graph: &Graph, max_depth: usize) -> Result<TreeNode, ReconcileError> {
    let index = GraphIndex::new(graph);
    let root = index.check_tree()?;
    let tree = build_subtree(&index, root, 0, max_depth)?;
    debug!(root = %tree.id, nodes = tree.node_count(), "Reconstructed component tree");
    Ok(tree)
}

fn build_subtree(index: &GraphIndex<'_>, id: &str, depth: usize, max_depth: usize) -> Result<TreeNode, ReconcileError> {
    if depth > max_depth {
        return Err(ReconcileError::DepthExceeded { limit: max_depth });
    }

    let mut node = match index.node(id) {
        Some(graph_node) => {
            let mut node = TreeNode::from_payload(&graph_node.data.fields);
            node.id = graph_node.id.clone();
            node
        }
        None => TreeNode::new(id, ""),
    };

    for edge in index.outgoing(id) {
        node.children
            .push(build_subtree(index, &edge.target, depth + 1, max_depth)?);
    }

    Ok(node)
}

/// Merge node data into states and rebuild transitions from edges.
///
/// Node data is merged over the prior state config, never substituted for
/// it: a field dropped from a node's data (a [`NodeChange::Data`] edit
/// replaces the whole payload) stays in the canonical state while the
/// cached graph no longer shows it. Removing a field from a state means
/// editing the document itself.
///
/// [`NodeChange::Data`]: crate::NodeChange::Data
pub fn reconcile_fsm(graph: &Graph, prior: &FsmDocument) -> FsmDocument {
    let mut states: IndexMap<String, StateConfig> = IndexMap::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        let mut config = prior.states.get(&node.id).cloned().unwrap_or_default();
        let mut data = node.data.fields.clone();
        data.remove("id");
        config.merge(&data);
        states.insert(node.id.clone(), config);
    }

    let mut transitions = Vec::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        if !states.contains_key(&edge.source) || !states.contains_key(&edge.target) {
            warn!(edge = %edge.id, "Dropping transition edge with an unknown endpoint");
            continue;
        }
        transitions.push(Transition::new(
            edge.source.clone(),
            edge.target.clone(),
            edge.label.clone().unwrap_or_default(),
        ));
    }

    debug!(states = states.len(), transitions = transitions.len(), "Reconciled state machine");
    FsmDocument {
        states,
        transitions,
        graph: None,
    }
}
