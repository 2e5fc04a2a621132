use thiserror::Error;

/// Why a graph cannot be read back as a single tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphShapeError {
    #[error("Graph has no root node")]
    NoRoot,

    #[error("Graph has {} root nodes: {}", .0.len(), .0.join(", "))]
    MultipleRoots(Vec<String>),

    #[error("Cycle detected: {}", .0.join(" -> "))]
    Cycle(Vec<String>),

    #[error("Node {node} has multiple parents: {}", .parents.join(", "))]
    MultipleParents { node: String, parents: Vec<String> },
}

impl GraphShapeError {
    /// Ambiguities a user resolves by continuing to edit (adding the missing
    /// connection); everything else makes the graph unreadable as a tree.
    pub fn is_root_ambiguity(&self) -> bool {
        matches!(self, GraphShapeError::NoRoot | GraphShapeError::MultipleRoots(_))
    }
}
