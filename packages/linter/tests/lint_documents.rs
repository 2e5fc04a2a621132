//! Linting whole documents through the default registry

use flowcanvas_linter::{
    has_errors, lint_document, lint_tree_graph, Diagnostic, DiagnosticLevel, LintOptions, LintRule,
    RuleRegistry,
};
use flowcanvas_model::{
    templates, Document, FsmDocument, Graph, GraphEdge, GraphNode, NodeData, NodeType, Position,
    StateConfig, TreeNode,
};

fn rules_hit(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.rule.as_str()).collect()
}

#[test]
fn test_templates_are_clean() {
    for document in [templates::default_tree(), templates::default_fsm()] {
        let diagnostics = lint_document(&document, LintOptions::default());
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    }
}

#[test]
fn test_fsm_problems_are_reported() {
    let document = Document::fsm(
        FsmDocument::new()
            .with_state("idle", StateConfig::initial())
            .with_state("busy", StateConfig::initial())
            .with_transition("idle", "busy", "start")
            .with_transition("idle", "idle", "start")
            .with_transition("busy", "missing", "fail")
            .with_transition("busy", "idle", ""),
    );

    let diagnostics = lint_document(&document, LintOptions::default());
    let rules = rules_hit(&diagnostics);

    assert!(rules.contains(&"fsm-multiple-initial"));
    assert!(rules.contains(&"fsm-duplicate-trigger"));
    assert!(rules.contains(&"fsm-dangling-transition"));
    assert!(rules.contains(&"fsm-empty-trigger"));
    assert!(has_errors(&diagnostics));
}

#[test]
fn test_tree_duplicate_ids_are_warnings() {
    let document = Document::tree(
        TreeNode::new("root", "Screen")
            .with_child(TreeNode::new("x", "Text"))
            .with_child(TreeNode::new("x", "Text")),
    );

    let diagnostics = lint_document(&document, LintOptions::default());
    assert_eq!(rules_hit(&diagnostics), ["tree-duplicate-id"]);
    assert!(!has_errors(&diagnostics));
}

#[test]
fn test_cached_graph_shape_is_checked() {
    let mut document = templates::default_tree();
    let node = |id: &str| GraphNode::new(id, NodeType::Component, Position::default(), NodeData::default());
    document.set_cached_graph(Graph::new(
        vec![node("root"), node("a"), node("b")],
        vec![GraphEdge::between("root", "a", None)],
    ));

    let diagnostics = lint_document(&document, LintOptions::default());
    assert_eq!(rules_hit(&diagnostics), ["tree-multiple-roots"]);
}

#[test]
fn test_editor_graph_lint() {
    let node = |id: &str| GraphNode::new(id, NodeType::Component, Position::default(), NodeData::default());
    let graph = Graph::new(
        vec![node("a"), node("b")],
        vec![GraphEdge::between("a", "b", None), GraphEdge::between("b", "a", None)],
    );

    let rules: Vec<String> = lint_tree_graph(&graph, LintOptions::default())
        .into_iter()
        .map(|d| d.rule)
        .collect();
    assert_eq!(rules, ["tree-no-root", "tree-cycle"]);
}

#[test]
fn test_custom_registry() {
    struct NoLoadingState;

    impl LintRule for NoLoadingState {
        fn name(&self) -> &'static str {
            "no-loading-state"
        }

        fn description(&self) -> &'static str {
            "Loading states should be skeletons"
        }

        fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
            fsm.states
                .keys()
                .filter(|name| name.as_str() == "loading")
                .map(|name| Diagnostic::info(self.name(), "Use a skeleton").with_target(name.clone()))
                .collect()
        }
    }

    let mut registry = RuleRegistry::empty();
    registry.add_rule(Box::new(NoLoadingState));

    let diagnostics = lint_document(
        &templates::default_fsm(),
        LintOptions {
            registry: Some(registry),
        },
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].level, DiagnosticLevel::Info);
}

#[test]
fn test_diagnostic_json_shape() {
    let diagnostic = Diagnostic::warning("fsm-empty", "State machine has no states");
    let value = serde_json::to_value(&diagnostic).unwrap();

    assert_eq!(value["level"], "warning");
    assert!(value.get("target").is_none());
}
