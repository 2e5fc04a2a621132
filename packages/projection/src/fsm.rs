//! Grid layout of a state machine.

use crate::edge_ids::EdgeIds;
use crate::layout::LayoutOptions;
use flowcanvas_model::{
    edge_id, FsmDocument, Graph, GraphEdge, GraphNode, NodeData, NodeType, Position,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Lay out a state machine from scratch: states on a grid in declaration
/// order, one edge per transition whose endpoints both exist.
pub fn project_fsm(document: &FsmDocument, layout: &LayoutOptions) -> Graph {
    let columns = layout.columns();

    let nodes: Vec<GraphNode> = document
        .states
        .iter()
        .enumerate()
        .map(|(index, (name, config))| {
            let col = index % columns;
            let row = index / columns;
            let position = Position::new(
                layout.origin_x + col as f64 * layout.grid_spacing_x,
                layout.origin_y + row as f64 * layout.grid_spacing_y,
            );

            let mut fields = config.payload();
            fields.insert("id".to_string(), Value::String(name.clone()));
            GraphNode::new(name.clone(), NodeType::UiState, position, NodeData::new(name.clone(), fields))
        })
        .collect();

    let mut edges = Vec::with_capacity(document.transitions.len());
    let mut edge_ids = EdgeIds::default();

    for transition in &document.transitions {
        if document.is_dangling(transition) {
            warn!(
                from = %transition.from,
                to = %transition.to,
                trigger = %transition.trigger,
                "Dropping transition that references an unknown state"
            );
            continue;
        }

        let label = (!transition.trigger.is_empty()).then(|| transition.trigger.clone());
        edges.push(GraphEdge {
            id: edge_ids.claim(edge_id(&transition.from, &transition.to, label.as_deref())),
            source: transition.from.clone(),
            target: transition.to.clone(),
            label,
        });
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "Projected state machine");
    Graph::new(nodes, edges)
}
