use flowcanvas_model::TreeNode;

/// Visitor pattern for traversing a component tree immutably
///
/// The default implementation walks the entire tree depth-first, children in
/// render order. Override `visit_node` to act on nodes; call `walk_node` to
/// keep descending.
pub trait TreeVisitor: Sized {
    fn visit_node(&mut self, node: &TreeNode, depth: usize) {
        walk_node(self, node, depth);
    }
}

/// Mutable visitor for transforming a component tree in place
pub trait TreeVisitorMut: Sized {
    fn visit_node_mut(&mut self, node: &mut TreeNode, depth: usize) {
        walk_node_mut(self, node, depth);
    }
}

pub fn walk_node<V: TreeVisitor>(visitor: &mut V, node: &TreeNode, depth: usize) {
    for child in &node.children {
        visitor.visit_node(child, depth + 1);
    }
}

pub fn walk_node_mut<V: TreeVisitorMut>(visitor: &mut V, node: &mut TreeNode, depth: usize) {
    for child in &mut node.children {
        visitor.visit_node_mut(child, depth + 1);
    }
}

/// Collects node ids in depth-first order
#[derive(Debug, Default)]
pub struct IdCollector {
    pub ids: Vec<String>,
}

impl TreeVisitor for IdCollector {
    fn visit_node(&mut self, node: &TreeNode, depth: usize) {
        self.ids.push(node.id.clone());
        walk_node(self, node, depth);
    }
}

/// Collect every node id of a tree, depth-first
pub fn collect_ids(root: &TreeNode) -> Vec<String> {
    let mut collector = IdCollector::default();
    collector.visit_node(root, 0);
    collector.ids
}

/// Every `(parent id, child id)` pair of a tree
pub fn parent_child_pairs(root: &TreeNode) -> Vec<(String, String)> {
    struct Pairs(Vec<(String, String)>);

    impl TreeVisitor for Pairs {
        fn visit_node(&mut self, node: &TreeNode, depth: usize) {
            for child in &node.children {
                self.0.push((node.id.clone(), child.id.clone()));
            }
            walk_node(self, node, depth);
        }
    }

    let mut pairs = Pairs(Vec::new());
    pairs.visit_node(root, 0);
    pairs.0
}
