//! Error types for the editor

use flowcanvas_common::GraphShapeError;
use thiserror::Error;

/// Why a graph could not be turned back into a canonical document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconcileError {
    #[error("Graph is not a tree: {0}")]
    Shape(#[from] GraphShapeError),

    #[error("Tree is deeper than the limit of {limit} levels")]
    DepthExceeded { limit: usize },
}

impl ReconcileError {
    /// Root ambiguity is held as pending; anything else rejects the edit
    pub fn is_recoverable(&self) -> bool {
        match self {
            ReconcileError::Shape(shape) => shape.is_root_ambiguity(),
            ReconcileError::DepthExceeded { .. } => false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Change error: {0}")]
    Change(#[from] crate::changes::ChangeError),

    #[error("Edit rejected: {0}")]
    Rejected(ReconcileError),

    #[error("Cannot load a {found} document into a {expected} editor")]
    WrongDocumentKind {
        expected: &'static str,
        found: &'static str,
    },
}
