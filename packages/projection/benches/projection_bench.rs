use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowcanvas_model::{FsmDocument, StateConfig, TreeNode};
use flowcanvas_projection::{project_fsm, project_tree, LayoutOptions};

fn wide_tree(depth: usize, breadth: usize, prefix: &str) -> TreeNode {
    let mut node = TreeNode::new(prefix, "Container");
    if depth > 0 {
        for i in 0..breadth {
            node = node.with_child(wide_tree(depth - 1, breadth, &format!("{}.{}", prefix, i)));
        }
    }
    node
}

fn project_medium_tree(c: &mut Criterion) {
    let tree = wide_tree(4, 4, "root");
    let layout = LayoutOptions::default();

    c.bench_function("project_tree_341_nodes", |b| {
        b.iter(|| project_tree(black_box(&tree), &layout))
    });
}

fn project_large_fsm(c: &mut Criterion) {
    let mut doc = FsmDocument::new();
    for i in 0..200 {
        doc = doc.with_state(format!("s{}", i), StateConfig::new());
    }
    for i in 0..199 {
        doc = doc
            .with_transition(format!("s{}", i), format!("s{}", i + 1), "next")
            .with_transition(format!("s{}", i + 1), format!("s{}", i), "back");
    }
    let layout = LayoutOptions::default();

    c.bench_function("project_fsm_200_states", |b| {
        b.iter(|| project_fsm(black_box(&doc), &layout))
    });
}

criterion_group!(benches, project_medium_tree, project_large_fsm);
criterion_main!(benches);
