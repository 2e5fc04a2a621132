//! Documents as they arrive from storage or an AI generator

use flowcanvas_model::{Document, DocumentKind, ModelError, TreeNode, MAX_TREE_DEPTH};

#[test]
fn test_tree_document_from_json() -> anyhow::Result<()> {
    let source = r#"{
        "documentType": "tree",
        "root": {
            "id": "screen",
            "kind": "Screen",
            "validationTags": ["wcag-2.1"],
            "background": "white",
            "children": [
                { "id": "title", "kind": "Text", "binding": "user.name" },
                { "id": "list", "kind": "List", "children": "not-a-list" }
            ]
        }
    }"#;

    let document = Document::from_json(source)?;
    assert_eq!(document.kind(), DocumentKind::Tree);

    let root = &document.as_tree()?.root;
    assert_eq!(root.node_count(), 3);
    assert_eq!(root.props.get("background"), Some(&serde_json::json!("white")));
    assert_eq!(root.find("title").and_then(|n| n.binding.as_deref()), Some("user.name"));
    assert!(root.find("list").map(|n| n.children.is_empty()).unwrap_or(false));
    Ok(())
}

#[test]
fn test_fsm_document_keeps_state_order() -> anyhow::Result<()> {
    let source = r#"{
        "documentType": "fsm",
        "states": {
            "zeta": {},
            "alpha": { "type": "initial" },
            "mid": { "label": "Middle" }
        },
        "transitions": [{ "from": "alpha", "to": "zeta", "trigger": "go" }]
    }"#;

    let document = Document::from_json(source)?;
    let fsm = document.as_fsm()?;

    let names: Vec<&str> = fsm.states.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(fsm.initial_state(), Some("alpha"));
    Ok(())
}

#[test]
fn test_json_round_trip_keeps_cache() -> anyhow::Result<()> {
    let mut document = flowcanvas_model::templates::default_fsm();
    document.set_cached_graph(flowcanvas_model::Graph::default());

    let restored = Document::from_json(&document.to_json_pretty()?)?;
    assert_eq!(restored, document);
    assert!(restored.cached_graph().is_some());
    Ok(())
}

#[test]
fn test_wrong_kind_access() {
    let document = flowcanvas_model::templates::default_tree();
    assert!(matches!(document.as_fsm(), Err(ModelError::KindMismatch { .. })));
}

#[test]
fn test_unknown_document_type_is_an_error() {
    let result = Document::from_json(r#"{ "documentType": "flowchart" }"#);
    assert!(matches!(result, Err(ModelError::Json(_))));
}

/// A single path of `depth + 1` nodes; the leaf carries nested props
fn chain(depth: usize) -> TreeNode {
    let mut node = TreeNode::new(format!("n{}", depth), "Box")
        .with_prop("style", serde_json::json!({ "border": { "color": "red" } }));
    for level in (0..depth).rev() {
        node = TreeNode::new(format!("n{}", level), "Box").with_child(node);
    }
    node
}

#[test]
fn test_deepest_allowed_tree_reloads() -> anyhow::Result<()> {
    let document = Document::tree(chain(MAX_TREE_DEPTH));
    let restored = Document::from_json(&document.to_json_pretty()?)?;

    assert_eq!(restored, document);
    assert_eq!(restored.as_tree()?.root.node_count(), MAX_TREE_DEPTH + 1);
    Ok(())
}
