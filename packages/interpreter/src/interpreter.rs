use flowcanvas_model::{FsmDocument, StateConfig, Transition};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Point-in-time view of an interpreter, for display or logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpreterSnapshot {
    pub active_state_id: Option<String>,
    pub history: Vec<String>,
    pub last_event: Option<String>,

    /// Events that would fire from the active state, in document order
    pub available_events: Vec<String>,
}

/// Runtime over a borrowed state machine document
#[derive(Debug, Clone)]
pub struct Interpreter<'doc> {
    document: &'doc FsmDocument,
    active_state_id: Option<String>,
    history: Vec<String>,
    last_event: Option<String>,
}

impl<'doc> Interpreter<'doc> {
    pub fn new(document: &'doc FsmDocument) -> Self {
        let mut interpreter = Self {
            document,
            active_state_id: None,
            history: Vec::new(),
            last_event: None,
        };
        interpreter.reset();
        interpreter
    }

    pub fn document(&self) -> &'doc FsmDocument {
        self.document
    }

    pub fn active_state_id(&self) -> Option<&str> {
        self.active_state_id.as_deref()
    }

    pub fn active_state(&self) -> Option<&'doc StateConfig> {
        let id = self.active_state_id.as_deref()?;
        self.document.states.get(id)
    }

    /// States left so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Transitions leaving the active state, in document order
    pub fn available_transitions(&self) -> Vec<&'doc Transition> {
        let document = self.document;
        match self.active_state_id.as_deref() {
            Some(active) => document
                .transitions
                .iter()
                .filter(|transition| transition.from == active && !document.is_dangling(transition))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn can_trigger(&self, event: &str) -> bool {
        self.matching_transition(event).is_some()
    }

    /// Fire `event` from the active state. Returns whether a transition ran.
    pub fn trigger(&mut self, event: &str) -> bool {
        let Some(transition) = self.matching_transition(event) else {
            trace!(
                state = self.active_state_id.as_deref().unwrap_or("<none>"),
                event,
                "No transition for event"
            );
            return false;
        };

        let target = transition.to.clone();
        if let Some(previous) = self.active_state_id.replace(target) {
            debug!(from = %previous, to = %transition.to, event, "Transition fired");
            self.history.push(previous);
        }
        self.last_event = Some(event.to_string());
        true
    }

    /// Fire events in order, returning how many caused a transition
    pub fn run<I, S>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        events
            .into_iter()
            .filter(|event| self.trigger(event.as_ref()))
            .count()
    }

    /// Back to the initial state with empty history
    pub fn reset(&mut self) {
        self.active_state_id = self.document.initial_state().map(str::to_string);
        self.history.clear();
        self.last_event = None;
        debug!(state = self.active_state_id.as_deref().unwrap_or("<none>"), "Interpreter reset");
    }

    /// No transition can leave the active state
    pub fn is_terminal(&self) -> bool {
        self.available_transitions().is_empty()
    }

    pub fn snapshot(&self) -> InterpreterSnapshot {
        InterpreterSnapshot {
            active_state_id: self.active_state_id.clone(),
            history: self.history.clone(),
            last_event: self.last_event.clone(),
            available_events: self
                .available_transitions()
                .into_iter()
                .map(|transition| transition.trigger.clone())
                .collect(),
        }
    }

    fn matching_transition(&self, event: &str) -> Option<&'doc Transition> {
        let active = self.active_state_id.as_deref()?;
        let document = self.document;
        document.transitions.iter().find(|transition| {
            transition.from == active && transition.trigger == event && !document.is_dangling(transition)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_flow() -> FsmDocument {
        FsmDocument::new()
            .with_state("idle", StateConfig::initial())
            .with_state("loading", StateConfig::new())
            .with_state("success", StateConfig::new().with_type("final"))
            .with_state("error", StateConfig::new())
            .with_transition("idle", "loading", "start")
            .with_transition("loading", "success", "resolve")
            .with_transition("loading", "error", "reject")
            .with_transition("error", "loading", "retry")
    }

    #[test]
    fn test_starts_in_initial_state() {
        let fsm = request_flow();
        let interpreter = Interpreter::new(&fsm);

        assert_eq!(interpreter.active_state_id(), Some("idle"));
        assert!(interpreter.active_state().unwrap().is_initial());
        assert!(interpreter.history().is_empty());
        assert_eq!(interpreter.last_event(), None);
    }

    #[test]
    fn test_initial_type_beats_declaration_order() {
        let fsm = FsmDocument::new()
            .with_state("a", StateConfig::new())
            .with_state("b", StateConfig::initial());

        assert_eq!(Interpreter::new(&fsm).active_state_id(), Some("b"));
    }

    #[test]
    fn test_falls_back_to_first_state() {
        let fsm = FsmDocument::new()
            .with_state("first", StateConfig::new())
            .with_state("second", StateConfig::new());

        assert_eq!(Interpreter::new(&fsm).active_state_id(), Some("first"));
    }

    #[test]
    fn test_empty_document_has_no_state() {
        let fsm = FsmDocument::new();
        let mut interpreter = Interpreter::new(&fsm);

        assert_eq!(interpreter.active_state_id(), None);
        assert!(interpreter.active_state().is_none());
        assert!(!interpreter.trigger("anything"));
        assert!(interpreter.available_transitions().is_empty());
    }

    #[test]
    fn test_trigger_moves_and_records_history() {
        let fsm = request_flow();
        let mut interpreter = Interpreter::new(&fsm);

        assert!(interpreter.trigger("start"));
        assert_eq!(interpreter.active_state_id(), Some("loading"));
        assert_eq!(interpreter.history(), ["idle"]);
        assert_eq!(interpreter.last_event(), Some("start"));

        assert!(!interpreter.trigger("start"));
        assert_eq!(interpreter.active_state_id(), Some("loading"));
        assert_eq!(interpreter.history(), ["idle"]);
        assert_eq!(interpreter.last_event(), Some("start"));
    }

    #[test]
    fn test_first_declared_transition_wins() {
        let fsm = FsmDocument::new()
            .with_state("a", StateConfig::initial())
            .with_state("b", StateConfig::new())
            .with_state("c", StateConfig::new())
            .with_transition("a", "b", "go")
            .with_transition("a", "c", "go");
        let mut interpreter = Interpreter::new(&fsm);

        assert!(interpreter.trigger("go"));
        assert_eq!(interpreter.active_state_id(), Some("b"));
    }

    #[test]
    fn test_dangling_transition_is_skipped() {
        let fsm = FsmDocument::new()
            .with_state("a", StateConfig::initial())
            .with_state("b", StateConfig::new())
            .with_transition("a", "ghost", "go")
            .with_transition("a", "b", "go");
        let mut interpreter = Interpreter::new(&fsm);

        assert_eq!(interpreter.available_transitions().len(), 1);
        assert!(interpreter.trigger("go"));
        assert_eq!(interpreter.active_state_id(), Some("b"));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let fsm = request_flow();
        let mut interpreter = Interpreter::new(&fsm);
        interpreter.run(["start", "reject", "retry"]);
        assert_eq!(interpreter.history().len(), 3);

        interpreter.reset();
        assert_eq!(interpreter.active_state_id(), Some("idle"));
        assert!(interpreter.history().is_empty());
        assert_eq!(interpreter.last_event(), None);
    }

    #[test]
    fn test_available_transitions_in_document_order() {
        let fsm = request_flow();
        let mut interpreter = Interpreter::new(&fsm);
        interpreter.trigger("start");

        let events: Vec<&str> = interpreter
            .available_transitions()
            .into_iter()
            .map(|transition| transition.trigger.as_str())
            .collect();
        assert_eq!(events, ["resolve", "reject"]);
        assert!(interpreter.can_trigger("resolve"));
        assert!(!interpreter.can_trigger("retry"));
    }

    #[test]
    fn test_final_state_has_no_special_handling() {
        let fsm = request_flow();
        let mut interpreter = Interpreter::new(&fsm);

        assert_eq!(interpreter.run(["start", "resolve", "retry"]), 2);
        assert_eq!(interpreter.active_state_id(), Some("success"));
        assert!(interpreter.is_terminal());
    }
}
