//! Positioned node/edge graph rendered by the diagram editors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which editor a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Component,
    UiState,
}

/// Node payload: the document fields plus a synthetic display label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NodeData {
    pub fn new(label: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            label: label.into(),
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default)]
    pub position: Position,

    #[serde(default)]
    pub data: NodeData,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, node_type: NodeType, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            node_type,
            position,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphEdge {
    /// Edge with an id derived from its endpoints and label
    pub fn between(source: impl Into<String>, target: impl Into<String>, label: Option<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target, label.as_deref()),
            source,
            target,
            label,
        }
    }

    /// Same endpoints and label (ids may differ)
    pub fn connects_same(&self, other: &GraphEdge) -> bool {
        self.source == other.source && self.target == other.target && self.label == other.label
    }
}

/// Deterministic edge id: `e-{source}-{target}` or `e-{source}-{target}-{label}`
pub fn edge_id(source: &str, target: &str, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("e-{}-{}-{}", source, target, label),
        _ => format!("e-{}-{}", source, target),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,

    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
