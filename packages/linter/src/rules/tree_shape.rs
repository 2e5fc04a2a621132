//! Rules for component trees and the graphs they are edited as

use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use flowcanvas_common::{collect_ids, GraphIndex};
use flowcanvas_model::TreeNode;
use std::collections::HashSet;

/// Node ids must be unique and non-empty; projection regenerates offenders
pub struct TreeDuplicateIdRule;

impl LintRule for TreeDuplicateIdRule {
    fn name(&self) -> &'static str {
        "tree-duplicate-id"
    }

    fn description(&self) -> &'static str {
        "Disallow duplicate or empty component ids"
    }

    fn check_tree(&self, root: &TreeNode) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut diagnostics = Vec::new();

        for id in collect_ids(root) {
            if id.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(self.name(), "Component has an empty id")
                        .with_suggestion("Give the component an id; one will be generated when it is edited"),
                );
            } else if !seen.insert(id.clone()) && reported.insert(id.clone()) {
                diagnostics.push(
                    Diagnostic::warning(self.name(), format!("Component id '{}' is used more than once", id))
                        .with_target(id)
                        .with_suggestion("Later occurrences are given fresh ids when the tree is projected"),
                );
            }
        }

        diagnostics
    }

    fn check_tree_graph(&self, graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        graph
            .duplicate_node_ids()
            .into_iter()
            .map(|id| {
                Diagnostic::error(self.name(), format!("Graph contains node '{}' more than once", id))
                    .with_target(id)
            })
            .collect()
    }
}

pub struct TreeNoRootRule;

impl LintRule for TreeNoRootRule {
    fn name(&self) -> &'static str {
        "tree-no-root"
    }

    fn description(&self) -> &'static str {
        "Require one component without a parent"
    }

    fn check_tree_graph(&self, graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        if graph.graph().is_empty() || !graph.roots().is_empty() {
            return Vec::new();
        }

        vec![Diagnostic::error(self.name(), "Every component has a parent, so there is no root")
            .with_suggestion("Remove the connection leading into the intended root")]
    }
}

pub struct TreeMultipleRootsRule;

impl LintRule for TreeMultipleRootsRule {
    fn name(&self) -> &'static str {
        "tree-multiple-roots"
    }

    fn description(&self) -> &'static str {
        "Disallow more than one component without a parent"
    }

    fn check_tree_graph(&self, graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        let roots = graph.roots();
        if roots.len() < 2 {
            return Vec::new();
        }

        vec![Diagnostic::error(
            self.name(),
            format!("Components {} have no parent", roots.join(", ")),
        )
        .with_suggestion("Connect all but one of them under another component")]
    }
}

pub struct TreeCycleRule;

impl LintRule for TreeCycleRule {
    fn name(&self) -> &'static str {
        "tree-cycle"
    }

    fn description(&self) -> &'static str {
        "Disallow components that contain themselves"
    }

    fn check_tree_graph(&self, graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        match graph.find_cycle() {
            Some(path) => {
                let target = path.first().cloned().unwrap_or_default();
                vec![Diagnostic::error(self.name(), format!("Cycle detected: {}", path.join(" -> ")))
                    .with_target(target)
                    .with_suggestion("Remove one of the connections in the cycle")]
            }
            None => Vec::new(),
        }
    }
}

pub struct TreeMultipleParentsRule;

impl LintRule for TreeMultipleParentsRule {
    fn name(&self) -> &'static str {
        "tree-multiple-parents"
    }

    fn description(&self) -> &'static str {
        "Disallow components with more than one parent"
    }

    fn check_tree_graph(&self, graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        graph
            .multi_parent_nodes()
            .into_iter()
            .map(|(node, parents)| {
                Diagnostic::error(
                    self.name(),
                    format!("Component '{}' has parents {}", node, parents.join(", ")),
                )
                .with_target(node)
                .with_suggestion("Keep a single incoming connection")
            })
            .collect()
    }
}

pub struct TreeDanglingEdgeRule;

impl LintRule for TreeDanglingEdgeRule {
    fn name(&self) -> &'static str {
        "tree-dangling-edge"
    }

    fn description(&self) -> &'static str {
        "Report connections to components that do not exist"
    }

    fn check_tree_graph(&self, graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        graph
            .dangling_edges()
            .iter()
            .map(|edge| {
                Diagnostic::warning(
                    self.name(),
                    format!("Connection {} -> {} points at a missing component", edge.source, edge.target),
                )
                .with_target(edge.id.clone())
                .with_suggestion("It is dropped the next time the tree is reconciled")
            })
            .collect()
    }
}
