//! # FlowCanvas Model
//!
//! Canonical documents edited through the diagram editors, and the graph
//! shapes they are projected into.
//!
//! ```text
//! ┌──────────────────────────┐      project      ┌──────────────────────┐
//! │ Document                 │ ────────────────→ │ Graph                │
//! │  - Tree(TreeDocument)    │                   │  - nodes: GraphNode  │
//! │  - Fsm(FsmDocument)      │ ←──────────────── │  - edges: GraphEdge  │
//! └──────────────────────────┘     reconcile     └──────────────────────┘
//! ```
//!
//! The document is the source of truth. A [`Graph`] cached on a document is
//! editor working state that lets re-projection keep user-arranged positions.

pub mod document;
pub mod error;
pub mod fsm;
pub mod graph;
pub mod id_generator;
pub mod templates;
pub mod tree;

pub use document::{Document, DocumentKind, TreeDocument};
pub use error::{ModelError, ModelResult};
pub use fsm::{FsmDocument, StateConfig, Transition, INITIAL_STATE_TYPE};
pub use graph::{edge_id, Graph, GraphEdge, GraphNode, NodeData, NodeType, Position};
pub use id_generator::{get_namespace_id, IDGenerator};
pub use tree::{TreeNode, MAX_TREE_DEPTH};
