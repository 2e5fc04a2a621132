//! Rules over state machine states

use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use flowcanvas_model::FsmDocument;
use std::collections::{HashSet, VecDeque};

pub struct FsmEmptyRule;

impl LintRule for FsmEmptyRule {
    fn name(&self) -> &'static str {
        "fsm-empty"
    }

    fn description(&self) -> &'static str {
        "Require at least one state"
    }

    fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
        if !fsm.states.is_empty() {
            return Vec::new();
        }

        vec![Diagnostic::warning(self.name(), "State machine has no states")
            .with_suggestion("Add an 'initial' state to start from")]
    }
}

/// The first `initial` state wins; any other is just a regular state
pub struct FsmMultipleInitialRule;

impl LintRule for FsmMultipleInitialRule {
    fn name(&self) -> &'static str {
        "fsm-multiple-initial"
    }

    fn description(&self) -> &'static str {
        "Disallow more than one initial state"
    }

    fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
        let mut initial = fsm
            .states
            .iter()
            .filter(|(_, config)| config.is_initial())
            .map(|(name, _)| name.as_str());

        let Some(winner) = initial.next() else {
            return Vec::new();
        };

        initial
            .map(|name| {
                Diagnostic::warning(
                    self.name(),
                    format!("State '{}' is marked initial but '{}' is used", name, winner),
                )
                .with_target(name)
                .with_suggestion(format!("Clear the type of '{}'", name))
            })
            .collect()
    }
}

/// States no event sequence leads to from the initial state
pub struct FsmUnreachableStateRule;

impl LintRule for FsmUnreachableStateRule {
    fn name(&self) -> &'static str {
        "fsm-unreachable-state"
    }

    fn description(&self) -> &'static str {
        "Report states that cannot be reached from the initial state"
    }

    fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
        let Some(initial) = fsm.initial_state() else {
            return Vec::new();
        };

        let mut reached: HashSet<&str> = HashSet::from([initial]);
        let mut queue = VecDeque::from([initial]);
        while let Some(state) = queue.pop_front() {
            for transition in fsm.transitions_from(state) {
                if fsm.is_dangling(transition) {
                    continue;
                }
                if reached.insert(transition.to.as_str()) {
                    queue.push_back(transition.to.as_str());
                }
            }
        }

        fsm.states
            .keys()
            .filter(|name| !reached.contains(name.as_str()))
            .map(|name| {
                Diagnostic::info(self.name(), format!("State '{}' is unreachable from '{}'", name, initial))
                    .with_target(name.clone())
            })
            .collect()
    }
}
