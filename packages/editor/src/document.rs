//! # Graph Document
//!
//! Editing session for one canonical document shown as a node graph.
//!
//! A `GraphDocument` owns three things:
//! - the **canonical document** (source of truth, handed to the owner)
//! - the **working graph** the canvas renders and the user edits
//! - a queue of **pending notifications** delivered on [`GraphDocument::commit`]
//!
//! ## Lifecycle
//!
//! ```text
//! Document ─project─▶ Graph ─changes─▶ Graph' ─reconstruct─▶ Document'
//!                                                              │
//!                                            queue ◀──────────┘
//!                                              │
//!                                       commit ▼
//!                                        on_change(&Document')
//! ```
//!
//! Tree edits that leave the graph with zero or several roots are kept on the
//! canvas but the canonical document is held back until the shape is a tree
//! again ([`ApplyOutcome::Pending`]). Cycles, shared children and excessive
//! depth roll the edit back.

use crate::changes::{ChangeError, Connection, EdgeChange, NodeChange};
use crate::commit::{ChangeListener, CommitQueue, Notification};
use crate::errors::{EditorError, ReconcileError};
use crate::options::EditorOptions;
use crate::reconcile::{strategy_for, without_dangling_edges, DocumentStrategy};
use crate::undo_stack::UndoStack;
use flowcanvas_model::{Document, DocumentKind, Graph};
use tracing::{debug, warn};

/// What happened to the canonical document after an edit
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// Document updated, notification queued
    Committed { version: u64 },

    /// Graph updated, document held at its last valid state
    Pending { issue: ReconcileError },

    /// The edit did not change the graph
    Unchanged,
}

impl ApplyOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, ApplyOutcome::Committed { .. })
    }
}

/// Graph-backed editing session
pub struct GraphDocument {
    version: u64,
    document: Document,
    graph: Graph,
    strategy: Box<dyn DocumentStrategy>,
    options: EditorOptions,
    history: UndoStack,
    queue: CommitQueue,
    listener: Option<ChangeListener>,
    pending: Option<ReconcileError>,
}

impl GraphDocument {
    /// Open a session, projecting the document (its cached graph if it has one)
    pub fn new(document: Document, options: EditorOptions) -> Self {
        let strategy = strategy_for(document.kind(), &options);
        let graph = strategy.project(&document, &options.layout);
        debug!(
            kind = %document.kind(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "Opened graph document"
        );

        Self {
            version: 0,
            document,
            graph,
            strategy,
            history: UndoStack::with_max_levels(options.history_limit),
            options,
            queue: CommitQueue::new(),
            listener: None,
            pending: None,
        }
    }

    /// Register the owner callback invoked on [`commit`](Self::commit)
    pub fn with_listener(mut self, listener: impl FnMut(&Document) + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&Document) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Incremented on each committed or replaced document
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn kind(&self) -> DocumentKind {
        self.strategy.kind()
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Why the document is currently behind the graph, if it is
    pub fn pending_issue(&self) -> Option<&ReconcileError> {
        self.pending.as_ref()
    }

    pub fn has_pending_notifications(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Apply a batch of node changes atomically
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) -> Result<ApplyOutcome, EditorError> {
        let expected = self.strategy.node_type();
        let mut next = self.graph.clone();

        for change in changes {
            if let NodeChange::Add { node } = change {
                if node.node_type != expected {
                    return Err(ChangeError::WrongNodeType {
                        id: node.id.clone(),
                        expected,
                        found: node.node_type,
                    }
                    .into());
                }
            }
            change.apply(&mut next)?;
        }

        self.transition(next)
    }

    /// Apply a batch of edge changes atomically
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) -> Result<ApplyOutcome, EditorError> {
        let mut next = self.graph.clone();
        for change in changes {
            change.apply(&mut next)?;
        }

        self.transition(next)
    }

    /// Link two existing nodes
    pub fn connect(&mut self, connection: Connection) -> Result<ApplyOutcome, EditorError> {
        for endpoint in [&connection.source, &connection.target] {
            if !self.graph.contains_node(endpoint) {
                return Err(ChangeError::NodeNotFound(endpoint.clone()).into());
            }
        }

        let edge = connection.to_edge(&self.graph);
        if self.graph.edges.iter().any(|existing| existing.connects_same(&edge)) {
            debug!(source = %connection.source, target = %connection.target, "Connection already exists");
            return Ok(ApplyOutcome::Unchanged);
        }

        self.apply_edge_changes(&[EdgeChange::Add { edge }])
    }

    /// Swap in a new canonical document (AI generation, external reload).
    /// The cache is dropped, the graph re-projected and history cleared.
    /// The caller already has the document, so no notification is queued.
    pub fn replace_document(&mut self, document: Document) -> Result<(), EditorError> {
        if document.kind() != self.kind() {
            return Err(EditorError::WrongDocumentKind {
                expected: self.kind().as_str(),
                found: document.kind().as_str(),
            });
        }

        let document = document.without_cache();
        self.graph = self.strategy.project(&document, &self.options.layout);
        self.document = document;
        self.history.clear();
        self.queue.clear();
        self.pending = None;
        self.version += 1;

        debug!(version = self.version, nodes = self.graph.nodes.len(), "Replaced document");
        Ok(())
    }

    /// Deliver queued notifications to the listener. Without a listener the
    /// queue is kept for [`take_notifications`](Self::take_notifications).
    pub fn commit(&mut self) -> usize {
        match self.listener.as_mut() {
            Some(listener) => self.queue.flush(&mut **listener),
            None => 0,
        }
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.queue.drain()
    }

    /// Group the following edits into one undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch();
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    pub fn undo(&mut self) -> Result<ApplyOutcome, EditorError> {
        match self.history.undo() {
            Some(graph) => self.restore(graph),
            None => Ok(ApplyOutcome::Unchanged),
        }
    }

    pub fn redo(&mut self) -> Result<ApplyOutcome, EditorError> {
        match self.history.redo() {
            Some(graph) => self.restore(graph),
            None => Ok(ApplyOutcome::Unchanged),
        }
    }

    /// Move to an edited graph, recording history
    fn transition(&mut self, next: Graph) -> Result<ApplyOutcome, EditorError> {
        let next = without_dangling_edges(&next);
        if next == self.graph {
            return Ok(ApplyOutcome::Unchanged);
        }

        let before = self.graph.clone();
        let outcome = self.settle(next)?;
        self.history.record(before, self.graph.clone());
        Ok(outcome)
    }

    /// Move to a graph from history
    fn restore(&mut self, graph: Graph) -> Result<ApplyOutcome, EditorError> {
        if graph == self.graph {
            return Ok(ApplyOutcome::Unchanged);
        }
        self.settle(graph)
    }

    /// Reconstruct the document from `graph` and adopt both, or hold the
    /// graph as pending, or reject it leaving the session untouched
    fn settle(&mut self, graph: Graph) -> Result<ApplyOutcome, EditorError> {
        match self.strategy.reconstruct(&graph, &self.document) {
            Ok(mut document) => {
                document.set_cached_graph(graph.clone());
                self.graph = graph;
                self.pending = None;
                self.version += 1;
                self.queue.schedule(self.version, document.clone());
                self.document = document;
                debug!(version = self.version, kind = %self.kind(), "Committed document update");
                Ok(ApplyOutcome::Committed {
                    version: self.version,
                })
            }
            Err(issue) if issue.is_recoverable() => {
                warn!(%issue, "Graph kept, document update withheld");
                self.graph = graph;
                self.pending = Some(issue.clone());
                Ok(ApplyOutcome::Pending { issue })
            }
            Err(issue) => {
                warn!(%issue, "Rejected edit");
                Err(EditorError::Rejected(issue))
            }
        }
    }
}

impl std::fmt::Debug for GraphDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphDocument")
            .field("version", &self.version)
            .field("kind", &self.kind())
            .field("nodes", &self.graph.nodes.len())
            .field("edges", &self.graph.edges.len())
            .field("pending", &self.pending)
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}
