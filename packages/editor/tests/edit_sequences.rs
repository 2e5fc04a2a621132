//! Undo/redo across sequences of graph edits

use flowcanvas_editor::{ApplyOutcome, Connection, EditorOptions, GraphDocument, NodeChange};
use flowcanvas_model::{templates, GraphNode, NodeData, NodeType, Position, TreeNode};

fn component(id: &str, kind: &str) -> GraphNode {
    GraphNode::new(
        id,
        NodeType::Component,
        Position::default(),
        NodeData::new(kind, TreeNode::new(id, kind).payload()),
    )
}

fn state(id: &str) -> GraphNode {
    GraphNode::new(id, NodeType::UiState, Position::default(), NodeData::new(id, Default::default()))
}

#[test]
fn test_undo_restores_document_and_notifies() {
    let mut session = GraphDocument::new(templates::default_fsm(), EditorOptions::default());
    let original = session.document().as_fsm().unwrap().clone();

    session
        .apply_node_changes(&[NodeChange::Add { node: state("paused") }])
        .unwrap();
    assert!(session.document().as_fsm().unwrap().has_state("paused"));

    let outcome = session.undo().unwrap();
    assert!(outcome.is_committed());

    let restored = session.document().as_fsm().unwrap();
    assert!(!restored.has_state("paused"));
    assert_eq!(restored.states, original.states);
    assert_eq!(restored.transitions, original.transitions);
    assert_eq!(session.take_notifications().len(), 2);

    session.redo().unwrap();
    assert!(session.document().as_fsm().unwrap().has_state("paused"));
}

#[test]
fn test_nothing_to_undo() {
    let mut session = GraphDocument::new(templates::default_tree(), EditorOptions::default());
    assert_eq!(session.undo().unwrap(), ApplyOutcome::Unchanged);
    assert_eq!(session.redo().unwrap(), ApplyOutcome::Unchanged);
}

#[test]
fn test_batched_add_and_connect_is_one_undo_step() {
    let mut session = GraphDocument::new(templates::default_tree(), EditorOptions::default());

    session.begin_batch("Add footer");
    session
        .apply_node_changes(&[NodeChange::Add { node: component("footer", "Footer") }])
        .unwrap();
    session.connect(Connection::new("root", "footer")).unwrap();
    session.end_batch();

    assert_eq!(session.history().undo_levels(), 1);
    assert_eq!(session.history().undo_description(), Some("Add footer"));
    assert_eq!(session.document().as_tree().unwrap().root.children.len(), 3);

    session.undo().unwrap();
    assert_eq!(session.document().as_tree().unwrap().root.children.len(), 2);
    assert!(session.graph().node("footer").is_none());
}

#[test]
fn test_undo_back_into_pending_state() {
    let mut session = GraphDocument::new(templates::default_tree(), EditorOptions::default());

    session
        .apply_node_changes(&[NodeChange::Add { node: component("footer", "Footer") }])
        .unwrap();
    session.connect(Connection::new("root", "footer")).unwrap();
    assert!(session.pending_issue().is_none());

    let outcome = session.undo().unwrap();
    assert!(matches!(outcome, ApplyOutcome::Pending { .. }));
    assert!(session.graph().node("footer").is_some());
}

#[test]
fn test_new_edit_clears_redo() {
    let mut session = GraphDocument::new(templates::default_fsm(), EditorOptions::default());

    session
        .apply_node_changes(&[NodeChange::Add { node: state("a") }])
        .unwrap();
    session.undo().unwrap();
    assert!(session.history().can_redo());

    session
        .apply_node_changes(&[NodeChange::Add { node: state("b") }])
        .unwrap();
    assert!(!session.history().can_redo());
}

#[test]
fn test_history_limit_from_options() {
    let options = EditorOptions {
        history_limit: 2,
        ..EditorOptions::default()
    };
    let mut session = GraphDocument::new(templates::default_fsm(), options);

    for id in ["a", "b", "c"] {
        session.apply_node_changes(&[NodeChange::Add { node: state(id) }]).unwrap();
    }
    assert_eq!(session.history().undo_levels(), 2);
}
