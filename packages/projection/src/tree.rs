//! Depth-first layout of a component tree.

use crate::edge_ids::EdgeIds;
use crate::layout::LayoutOptions;
use flowcanvas_common::{collect_ids, walk_node_mut, TreeVisitorMut};
use flowcanvas_model::{
    edge_id, Graph, GraphEdge, GraphNode, IDGenerator, NodeData, NodeType, Position, TreeNode,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Namespace for synthetic tree node ids
const TREE_ID_NAMESPACE: &str = "component-tree";

/// Lay out a tree from scratch: one node per tree node, one edge per
/// parent→child relation.
pub fn project_tree(root: &TreeNode, layout: &LayoutOptions) -> Graph {
    let root = with_unique_ids(root);
    let mut graph = Graph::new(Vec::with_capacity(root.node_count()), Vec::new());

    place_node(
        &root,
        Position::new(layout.origin_x, layout.origin_y),
        layout,
        &mut EdgeIds::default(),
        &mut graph,
    );

    debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "Projected component tree");
    graph
}

fn place_node(
    node: &TreeNode,
    position: Position,
    layout: &LayoutOptions,
    edge_ids: &mut EdgeIds,
    graph: &mut Graph,
) {
    graph.nodes.push(GraphNode::new(
        node.id.clone(),
        NodeType::Component,
        position,
        NodeData::new(label_for(node), node.payload()),
    ));

    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        graph.edges.push(GraphEdge {
            id: edge_ids.claim(edge_id(&node.id, &child.id, None)),
            source: node.id.clone(),
            target: child.id.clone(),
            label: None,
        });

        let child_position = Position::new(
            position.x + layout.sibling_offset(index, count),
            position.y + layout.row_height,
        );
        place_node(child, child_position, layout, edge_ids, graph);
    }
}

fn label_for(node: &TreeNode) -> String {
    if node.kind.is_empty() {
        node.id.clone()
    } else {
        node.kind.clone()
    }
}

/// Copy of `root` where every node has a non-empty id unique in the tree
fn with_unique_ids(root: &TreeNode) -> TreeNode {
    let mut root = root.clone();
    let mut assigner = IdAssigner {
        taken: collect_ids(&root).into_iter().collect(),
        seen: HashSet::new(),
        generator: IDGenerator::new(TREE_ID_NAMESPACE),
    };
    assigner.visit_node_mut(&mut root, 0);
    root
}

struct IdAssigner {
    /// Every explicit id in the tree, so generated ids never shadow one
    taken: HashSet<String>,
    seen: HashSet<String>,
    generator: IDGenerator,
}

impl TreeVisitorMut for IdAssigner {
    fn visit_node_mut(&mut self, node: &mut TreeNode, depth: usize) {
        if node.id.is_empty() || self.seen.contains(&node.id) {
            let taken = &self.taken;
            let seen = &self.seen;
            let id = self
                .generator
                .new_id_avoiding(|candidate| taken.contains(candidate) || seen.contains(candidate));

            if !node.id.is_empty() {
                warn!(duplicate = %node.id, replacement = %id, "Duplicate tree node id, assigning a new one");
            }
            node.id = id;
        }
        self.seen.insert(node.id.clone());
        walk_node_mut(self, node, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::new("root", "Screen")
            .with_child(TreeNode::new("left", "Panel").with_child(TreeNode::new("title", "Text")))
            .with_child(TreeNode::new("middle", "Panel"))
            .with_child(TreeNode::new("right", "Panel"))
    }

    #[test]
    fn test_positions_spread_under_parent() {
        let graph = project_tree(&sample(), &LayoutOptions::default());

        let pos = |id: &str| graph.node(id).unwrap().position;
        assert_eq!(pos("root"), Position::new(0.0, 0.0));
        assert_eq!(pos("left"), Position::new(-200.0, 120.0));
        assert_eq!(pos("middle"), Position::new(0.0, 120.0));
        assert_eq!(pos("right"), Position::new(200.0, 120.0));
        assert_eq!(pos("title"), Position::new(-200.0, 240.0));
    }

    #[test]
    fn test_one_edge_per_relation() {
        let graph = project_tree(&sample(), &LayoutOptions::default());

        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 4);
        assert!(graph
            .edges
            .iter()
            .any(|e| e.source == "left" && e.target == "title" && e.id == "e-left-title"));
    }

    #[test]
    fn test_node_data_carries_payload_and_label() {
        let root = TreeNode::new("root", "Form").with_binding("account").with_tag("aria");
        let graph = project_tree(&root, &LayoutOptions::default());

        let data = &graph.nodes[0].data;
        assert_eq!(data.label, "Form");
        assert_eq!(data.fields["id"], "root");
        assert_eq!(data.fields["binding"], "account");
        assert!(!data.fields.contains_key("children"));
    }

    #[test]
    fn test_missing_and_duplicate_ids_are_generated() {
        let root = TreeNode::new("", "Screen")
            .with_child(TreeNode::new("dup", "Text"))
            .with_child(TreeNode::new("dup", "Text"));

        let graph = project_tree(&root, &LayoutOptions::default());
        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

        assert_eq!(ids.len(), 3);
        assert!(ids.contains("dup"));
        assert!(graph.nodes.iter().all(|n| !n.id.is_empty()));
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_dashed_ids_get_distinct_edge_ids() {
        let root = TreeNode::new("a", "Form")
            .with_child(TreeNode::new("a-b", "Group").with_child(TreeNode::new("c", "Text")))
            .with_child(TreeNode::new("b-c", "Text"));

        let graph = project_tree(&root, &LayoutOptions::default());
        let ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, ["e-a-a-b", "e-a-b-c", "e-a-b-c-2"]);
    }

    #[test]
    fn test_generated_ids_are_deterministic() {
        let root = TreeNode::new("", "Screen").with_child(TreeNode::new("", "Text"));
        let layout = LayoutOptions::default();
        assert_eq!(project_tree(&root, &layout), project_tree(&root, &layout));
    }
}
