//! Rules over state machine transitions

use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use flowcanvas_model::FsmDocument;
use std::collections::HashMap;

/// Transitions to or from undeclared states never fire and are dropped from
/// the graph
pub struct FsmDanglingTransitionRule;

impl LintRule for FsmDanglingTransitionRule {
    fn name(&self) -> &'static str {
        "fsm-dangling-transition"
    }

    fn description(&self) -> &'static str {
        "Disallow transitions naming undeclared states"
    }

    fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
        fsm.transitions
            .iter()
            .filter(|transition| fsm.is_dangling(transition))
            .map(|transition| {
                let missing = if fsm.has_state(&transition.from) {
                    &transition.to
                } else {
                    &transition.from
                };
                Diagnostic::error(
                    self.name(),
                    format!(
                        "Transition {} --{}--> {} refers to undeclared state '{}'",
                        transition.from, transition.trigger, transition.to, missing
                    ),
                )
                .with_target(missing.clone())
                .with_suggestion(format!("Declare state '{}' or remove the transition", missing))
            })
            .collect()
    }
}

/// Only the first transition for a (state, event) pair can ever fire
pub struct FsmDuplicateTriggerRule;

impl LintRule for FsmDuplicateTriggerRule {
    fn name(&self) -> &'static str {
        "fsm-duplicate-trigger"
    }

    fn description(&self) -> &'static str {
        "Report transitions shadowed by an earlier one on the same event"
    }

    fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
        let mut first: HashMap<(&str, &str), &str> = HashMap::new();
        let mut diagnostics = Vec::new();

        for transition in fsm.transitions.iter().filter(|t| !fsm.is_dangling(t)) {
            let key = (transition.from.as_str(), transition.trigger.as_str());
            match first.get(&key).copied() {
                Some(winner) => diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "State '{}' handles '{}' more than once; only the transition to '{}' fires",
                            transition.from, transition.trigger, winner
                        ),
                    )
                    .with_target(transition.from.clone())
                    .with_suggestion(format!("Remove or rename the transition to '{}'", transition.to)),
                ),
                None => {
                    first.insert(key, transition.to.as_str());
                }
            }
        }

        diagnostics
    }
}

pub struct FsmEmptyTriggerRule;

impl LintRule for FsmEmptyTriggerRule {
    fn name(&self) -> &'static str {
        "fsm-empty-trigger"
    }

    fn description(&self) -> &'static str {
        "Report transitions without an event name"
    }

    fn check_fsm(&self, fsm: &FsmDocument) -> Vec<Diagnostic> {
        fsm.transitions
            .iter()
            .filter(|transition| transition.trigger.is_empty())
            .map(|transition| {
                Diagnostic::warning(
                    self.name(),
                    format!("Transition {} -> {} has no event", transition.from, transition.to),
                )
                .with_target(transition.from.clone())
                .with_suggestion("Label the connection with the event that should fire it")
            })
            .collect()
    }
}
