//! # Undo/Redo Stack
//!
//! Tracks graph history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each kept edit records the graph before and after it
//! - Undo hands back the `before` graph and moves the batch to the redo stack
//! - Redo hands back the `after` graph
//! - New edits clear the redo stack
//! - Supports batched operations (group multiple edits as one undo step)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//!
//! stack.record(before, after);
//!
//! // Graph to restore
//! let graph = stack.undo().unwrap();
//! let graph = stack.redo().unwrap();
//! ```

use flowcanvas_model::Graph;

/// A group of edits that should be undone/redone together
#[derive(Debug, Clone)]
pub struct GraphBatch {
    /// Graph before the first edit of the batch
    pub before: Graph,

    /// Graph after the last edit of the batch
    pub after: Graph,

    pub edits: usize,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl GraphBatch {
    pub fn single(before: Graph, after: Graph) -> Self {
        Self {
            before,
            after,
            edits: 1,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for graph editing
#[derive(Debug)]
pub struct UndoStack {
    /// Applied batches (most recent last)
    undo_stack: Vec<GraphBatch>,

    /// Undone batches (most recent last)
    redo_stack: Vec<GraphBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Open batch, if any; `None` inside means nothing recorded yet
    current_batch: Option<Option<GraphBatch>>,

    pending_description: Option<String>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
            pending_description: None,
        }
    }

    /// Record an edit that turned `before` into `after`
    pub fn record(&mut self, before: Graph, after: Graph) {
        let Some(open) = self.current_batch.as_mut() else {
            self.push_batch(GraphBatch::single(before, after));
            return;
        };

        match open {
            Some(batch) => {
                batch.after = after;
                batch.edits += 1;
            }
            None => {
                let mut batch = GraphBatch::single(before, after);
                batch.description = self.pending_description.take();
                *open = Some(batch);
            }
        }
    }

    /// Start a batch of edits (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(None);
        self.pending_description = None;
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(Some(batch)) = self.current_batch.take() {
            self.push_batch(batch);
        }
        self.pending_description = None;
    }

    pub fn in_batch(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        match &mut self.current_batch {
            Some(Some(batch)) => batch.description = Some(description),
            Some(None) => self.pending_description = Some(description),
            None => {}
        }
    }

    fn push_batch(&mut self, batch: GraphBatch) {
        self.undo_stack.push(batch);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Undo the most recent batch, returning the graph to restore
    pub fn undo(&mut self) -> Option<Graph> {
        self.end_batch();
        let batch = self.undo_stack.pop()?;
        let graph = batch.before.clone();
        self.redo_stack.push(batch);
        Some(graph)
    }

    /// Redo the most recently undone batch, returning the graph to restore
    pub fn redo(&mut self) -> Option<Graph> {
        let batch = self.redo_stack.pop()?;
        let graph = batch.after.clone();
        self.undo_stack.push(batch);
        Some(graph)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || matches!(self.current_batch, Some(Some(_)))
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
        self.pending_description = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowcanvas_model::{GraphNode, NodeData, NodeType, Position};

    fn graph_with(ids: &[&str]) -> Graph {
        Graph::new(
            ids.iter()
                .map(|id| GraphNode::new(*id, NodeType::UiState, Position::default(), NodeData::default()))
                .collect(),
            vec![],
        )
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_record_undo_redo() {
        let mut stack = UndoStack::new();
        stack.record(graph_with(&["a"]), graph_with(&["a", "b"]));
        assert!(stack.can_undo());

        assert_eq!(stack.undo(), Some(graph_with(&["a"])));
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 1);

        assert_eq!(stack.redo(), Some(graph_with(&["a", "b"])));
        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.redo(), None);
    }

    #[test]
    fn test_batched_edits() {
        let mut stack = UndoStack::new();
        stack.begin_batch();
        stack.set_batch_description("Add two states");
        stack.record(graph_with(&["a"]), graph_with(&["a", "b"]));
        stack.record(graph_with(&["a", "b"]), graph_with(&["a", "b", "c"]));
        stack.end_batch();

        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Add two states"));
        assert_eq!(stack.undo(), Some(graph_with(&["a"])));
        assert_eq!(stack.redo(), Some(graph_with(&["a", "b", "c"])));
    }

    #[test]
    fn test_empty_batch_is_dropped() {
        let mut stack = UndoStack::new();
        stack.begin_batch();
        stack.end_batch();
        assert_eq!(stack.undo_levels(), 0);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut stack = UndoStack::new();
        stack.record(graph_with(&[]), graph_with(&["a"]));
        stack.undo();
        assert_eq!(stack.redo_levels(), 1);

        stack.record(graph_with(&[]), graph_with(&["b"]));
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(2);
        for i in 0..3 {
            let id = format!("s{}", i);
            stack.record(graph_with(&[]), graph_with(&[id.as_str()]));
        }
        assert_eq!(stack.undo_levels(), 2);
    }
}
