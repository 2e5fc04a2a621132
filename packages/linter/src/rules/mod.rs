mod fsm_states;
mod fsm_transitions;
mod tree_shape;

pub use fsm_states::{FsmEmptyRule, FsmMultipleInitialRule, FsmUnreachableStateRule};
pub use fsm_transitions::{FsmDanglingTransitionRule, FsmDuplicateTriggerRule, FsmEmptyTriggerRule};
pub use tree_shape::{
    TreeCycleRule, TreeDanglingEdgeRule, TreeDuplicateIdRule, TreeMultipleParentsRule,
    TreeMultipleRootsRule, TreeNoRootRule,
};

use crate::diagnostic::Diagnostic;
use flowcanvas_common::GraphIndex;
use flowcanvas_model::{FsmDocument, TreeNode};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a component tree as stored
    fn check_tree(&self, _root: &TreeNode) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check the graph a component tree is edited as
    fn check_tree_graph(&self, _graph: &GraphIndex<'_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check a state machine document
    fn check_fsm(&self, _fsm: &FsmDocument) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(TreeDuplicateIdRule),
                Box::new(TreeNoRootRule),
                Box::new(TreeMultipleRootsRule),
                Box::new(TreeCycleRule),
                Box::new(TreeMultipleParentsRule),
                Box::new(TreeDanglingEdgeRule),
                Box::new(FsmEmptyRule),
                Box::new(FsmMultipleInitialRule),
                Box::new(FsmDanglingTransitionRule),
                Box::new(FsmDuplicateTriggerRule),
                Box::new(FsmEmptyTriggerRule),
                Box::new(FsmUnreachableStateRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
