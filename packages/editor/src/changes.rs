//! # Graph Changes
//!
//! Low-level edits a user makes on the diagram.
//!
//! ## Semantics
//!
//! ### Node changes
//! - `Add` fails if the id is already taken
//! - `Remove` also removes every edge touching the node
//! - `Position` moves a node; positions only live in the graph cache
//! - `Data` replaces a node's payload (properties-panel edit)
//!
//! ### Edge changes
//! - `Add` fails if the id is already taken
//! - `Remove` fails if the edge does not exist
//!
//! A batch of changes is applied atomically: the first failing change leaves
//! the graph untouched.

use flowcanvas_model::{edge_id, Graph, GraphEdge, GraphNode, NodeData, NodeType, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    /// Place a new node on the canvas
    Add { node: GraphNode },

    /// Delete a node and its incident edges
    Remove { id: String },

    /// Move a node
    Position { id: String, position: Position },

    /// Replace a node's payload
    Data { id: String, data: NodeData },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Add { edge: GraphEdge },
    Remove { id: String },
}

/// A user dragging a link from one node handle to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Edge for this connection with an id unique in `graph`
    pub fn to_edge(&self, graph: &Graph) -> GraphEdge {
        let label = self.label.clone().filter(|label| !label.is_empty());
        let base = edge_id(&self.source, &self.target, label.as_deref());
        GraphEdge {
            id: unique_edge_id(graph, &base),
            source: self.source.clone(),
            target: self.target.clone(),
            label,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangeError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Node id already in use: {0}")]
    DuplicateNode(String),

    #[error("Edge id already in use: {0}")]
    DuplicateEdge(String),

    #[error("Node {id} is a {found:?} node, this editor holds {expected:?} nodes")]
    WrongNodeType {
        id: String,
        expected: NodeType,
        found: NodeType,
    },
}

impl NodeChange {
    /// Apply to the graph with validation
    pub fn apply(&self, graph: &mut Graph) -> Result<(), ChangeError> {
        self.validate(graph)?;

        match self {
            NodeChange::Add { node } => {
                graph.nodes.push(node.clone());
            }

            NodeChange::Remove { id } => {
                graph.nodes.retain(|node| &node.id != id);
                let before = graph.edges.len();
                graph.edges.retain(|edge| &edge.source != id && &edge.target != id);
                debug!(node = %id, edges = before - graph.edges.len(), "Removed node with incident edges");
            }

            NodeChange::Position { id, position } => {
                if let Some(node) = graph.node_mut(id) {
                    node.position = *position;
                }
            }

            NodeChange::Data { id, data } => {
                if let Some(node) = graph.node_mut(id) {
                    node.data = data.clone();
                }
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, graph: &Graph) -> Result<(), ChangeError> {
        match self {
            NodeChange::Add { node } => {
                if graph.contains_node(&node.id) {
                    return Err(ChangeError::DuplicateNode(node.id.clone()));
                }
                Ok(())
            }

            NodeChange::Remove { id }
            | NodeChange::Position { id, .. }
            | NodeChange::Data { id, .. } => {
                if !graph.contains_node(id) {
                    return Err(ChangeError::NodeNotFound(id.clone()));
                }
                Ok(())
            }
        }
    }

    /// Id of the node this change touches
    pub fn node_id(&self) -> &str {
        match self {
            NodeChange::Add { node } => &node.id,
            NodeChange::Remove { id } | NodeChange::Position { id, .. } | NodeChange::Data { id, .. } => id,
        }
    }
}

impl EdgeChange {
    pub fn apply(&self, graph: &mut Graph) -> Result<(), ChangeError> {
        self.validate(graph)?;

        match self {
            EdgeChange::Add { edge } => graph.edges.push(edge.clone()),
            EdgeChange::Remove { id } => graph.edges.retain(|edge| &edge.id != id),
        }

        Ok(())
    }

    pub fn validate(&self, graph: &Graph) -> Result<(), ChangeError> {
        match self {
            EdgeChange::Add { edge } => {
                if graph.edges.iter().any(|existing| existing.id == edge.id) {
                    return Err(ChangeError::DuplicateEdge(edge.id.clone()));
                }
                Ok(())
            }
            EdgeChange::Remove { id } => {
                if !graph.edges.iter().any(|edge| &edge.id == id) {
                    return Err(ChangeError::EdgeNotFound(id.clone()));
                }
                Ok(())
            }
        }
    }
}

/// `base`, or `base-2`, `base-3`, ... whichever is free in `graph`
pub fn unique_edge_id(graph: &Graph, base: &str) -> String {
    let taken = |id: &str| graph.edges.iter().any(|edge| edge.id == id);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|suffix| format!("{}-{}", base, suffix))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str) -> GraphNode {
        GraphNode::new(id, NodeType::Component, Position::default(), NodeData::default())
    }

    fn sample() -> Graph {
        Graph::new(
            vec![node("a"), node("b"), node("c")],
            vec![
                GraphEdge::between("a", "b", None),
                GraphEdge::between("a", "c", None),
            ],
        )
    }

    #[test]
    fn test_change_serialization() {
        let change = NodeChange::Position {
            id: "a".to_string(),
            position: Position::new(10.0, 20.0),
        };

        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["type"], json!("position"));

        let restored: NodeChange = serde_json::from_value(value).unwrap();
        assert_eq!(restored, change);
    }

    #[test]
    fn test_remove_node_cascades_edges() {
        let mut graph = sample();
        NodeChange::Remove { id: "a".into() }.apply(&mut graph).unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_position_change() {
        let mut graph = sample();
        NodeChange::Position {
            id: "b".into(),
            position: Position::new(5.0, 6.0),
        }
        .apply(&mut graph)
        .unwrap();

        assert_eq!(graph.node("b").unwrap().position, Position::new(5.0, 6.0));
    }

    #[test]
    fn test_validation_rejects_unknown_and_duplicate_ids() {
        let graph = sample();

        assert_eq!(
            NodeChange::Remove { id: "zzz".into() }.validate(&graph),
            Err(ChangeError::NodeNotFound("zzz".into()))
        );
        assert_eq!(
            NodeChange::Add { node: node("a") }.validate(&graph),
            Err(ChangeError::DuplicateNode("a".into()))
        );
        assert_eq!(
            EdgeChange::Remove { id: "nope".into() }.validate(&graph),
            Err(ChangeError::EdgeNotFound("nope".into()))
        );
        assert_eq!(
            EdgeChange::Add {
                edge: GraphEdge::between("a", "b", None)
            }
            .validate(&graph),
            Err(ChangeError::DuplicateEdge("e-a-b".into()))
        );
    }

    #[test]
    fn test_connection_edge_ids_are_unique() {
        let mut graph = sample();
        graph.edges.push(GraphEdge {
            id: "e-b-c".into(),
            source: "x".into(),
            target: "y".into(),
            label: None,
        });

        let edge = Connection::new("b", "c").to_edge(&graph);
        assert_eq!(edge.id, "e-b-c-2");
        assert_eq!(Connection::new("c", "b").with_label("go").to_edge(&graph).id, "e-c-b-go");
    }
}
