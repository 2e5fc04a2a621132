use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use flowcanvas_common::GraphIndex;
use flowcanvas_model::{Document, Graph};
use flowcanvas_projection::{project, LayoutOptions};
use tracing::debug;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a canonical document and return diagnostics
///
/// Tree documents are also checked as a graph: the cached one when present,
/// otherwise a fresh projection.
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    match document {
        Document::Tree(tree) => {
            for rule in registry.rules() {
                diagnostics.extend(rule.check_tree(&tree.root));
            }
            let graph = project(document, &LayoutOptions::default());
            diagnostics.extend(check_graph(&graph, &registry));
        }
        Document::Fsm(fsm) => {
            for rule in registry.rules() {
                diagnostics.extend(rule.check_fsm(fsm));
            }
        }
    }

    debug!(kind = %document.kind(), diagnostics = diagnostics.len(), "Linted document");
    diagnostics
}

/// Lint a component graph as edited, before it has been reconciled
pub fn lint_tree_graph(graph: &Graph, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    check_graph(graph, &registry)
}

fn check_graph(graph: &Graph, registry: &RuleRegistry) -> Vec<Diagnostic> {
    let index = GraphIndex::new(graph);
    registry
        .rules()
        .iter()
        .flat_map(|rule| rule.check_tree_graph(&index))
        .collect()
}
