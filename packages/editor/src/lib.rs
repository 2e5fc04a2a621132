//! # FlowCanvas Editor
//!
//! Keeps a canonical document and its node/edge graph in sync while the
//! user edits the graph.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: canonical documents (tree / fsm)     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ projection: document → positioned graph     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: GraphDocument session               │
//! │  - Apply node/edge changes atomically       │
//! │  - Reconstruct the document from the graph  │
//! │  - Queue owner notifications until commit   │
//! │  - Undo/redo over graph snapshots           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: the graph is a derived, cached view
//! 2. **One engine, two strategies**: tree and state machine differ only in
//!    how a graph is read back
//! 3. **No re-entrant callbacks**: the owner hears about changes on `commit`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flowcanvas_editor::{Connection, EditorOptions, GraphDocument};
//! use flowcanvas_model::templates;
//!
//! let mut editor = GraphDocument::new(templates::default_fsm(), EditorOptions::default())
//!     .with_listener(|doc| save(doc));
//!
//! editor.connect(Connection::new("error", "idle").with_label("dismiss"))?;
//!
//! // Listener runs here, after the mutating call returned
//! editor.commit();
//! ```

mod changes;
mod commit;
mod document;
mod errors;
mod options;
mod reconcile;
mod undo_stack;

pub use changes::{unique_edge_id, ChangeError, Connection, EdgeChange, NodeChange};
pub use commit::{ChangeListener, CommitQueue, Notification};
pub use document::{ApplyOutcome, GraphDocument};
pub use errors::{EditorError, ReconcileError};
pub use options::EditorOptions;
pub use reconcile::{
    reconcile, reconcile_fsm, reconstruct_tree, strategy_for, without_dangling_edges,
    DocumentStrategy, FsmStrategy, TreeStrategy,
};
pub use undo_stack::{GraphBatch, UndoStack};
