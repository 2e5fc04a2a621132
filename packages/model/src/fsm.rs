//! Canonical UI state-machine document.

use crate::graph::Graph;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `type` value marking the start state
pub const INITIAL_STATE_TYPE: &str = "initial";

/// Open payload of a single state (visual/interaction/messaging fields)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub state_type: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial() -> Self {
        Self::new().with_type(INITIAL_STATE_TYPE)
    }

    pub fn with_type(mut self, state_type: impl Into<String>) -> Self {
        self.state_type = Some(state_type.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn is_initial(&self) -> bool {
        self.state_type.as_deref() == Some(INITIAL_STATE_TYPE)
    }

    /// Fields as carried in a graph node's data
    pub fn payload(&self) -> Map<String, Value> {
        let mut fields = self.fields.clone();
        if let Some(state_type) = &self.state_type {
            fields.insert("type".to_string(), Value::String(state_type.clone()));
        }
        fields
    }

    /// Merge graph node data over this config (data wins per key)
    pub fn merge(&mut self, data: &Map<String, Value>) {
        for (key, value) in data {
            if key == "type" {
                self.state_type = match value {
                    Value::String(state_type) => Some(state_type.clone()),
                    _ => None,
                };
            } else {
                self.fields.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A directed transition `from --trigger--> to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub trigger: String,
}

impl Transition {
    pub fn new(from: impl Into<String>, to: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            trigger: trigger.into(),
        }
    }
}

/// States keyed by name in insertion order, plus an ordered transition list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FsmDocument {
    #[serde(default)]
    pub states: IndexMap<String, StateConfig>,

    #[serde(default)]
    pub transitions: Vec<Transition>,

    /// Editor graph this document was last reconciled from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
}

impl FsmDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, name: impl Into<String>, config: StateConfig) -> Self {
        self.states.insert(name.into(), config);
        self
    }

    pub fn with_transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        trigger: impl Into<String>,
    ) -> Self {
        self.transitions.push(Transition::new(from, to, trigger));
        self
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Start state: first `initial`-typed state, else the first declared one
    pub fn initial_state(&self) -> Option<&str> {
        self.states
            .iter()
            .find(|(_, config)| config.is_initial())
            .or_else(|| self.states.first())
            .map(|(name, _)| name.as_str())
    }

    /// Whether either endpoint names an undeclared state
    pub fn is_dangling(&self, transition: &Transition) -> bool {
        !self.has_state(&transition.from) || !self.has_state(&transition.to)
    }

    /// Transitions leaving `state`, in document order
    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.iter().filter(move |t| t.from == state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_state_prefers_initial_type() {
        let doc = FsmDocument::new()
            .with_state("done", StateConfig::new())
            .with_state("idle", StateConfig::initial());

        assert_eq!(doc.initial_state(), Some("idle"));
    }

    #[test]
    fn test_initial_state_falls_back_to_first_declared() {
        let doc = FsmDocument::new()
            .with_state("b", StateConfig::new())
            .with_state("a", StateConfig::new());

        assert_eq!(doc.initial_state(), Some("b"));
        assert_eq!(FsmDocument::new().initial_state(), None);
    }

    #[test]
    fn test_state_order_survives_json() {
        let doc: FsmDocument = serde_json::from_value(json!({
            "states": {
                "zeta": {},
                "alpha": { "type": "initial", "color": "blue" }
            },
            "transitions": [{ "from": "alpha", "to": "zeta", "trigger": "go" }]
        }))
        .unwrap();

        let names: Vec<&str> = doc.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(doc.states["alpha"].is_initial());
        assert_eq!(doc.states["alpha"].fields.get("color"), Some(&json!("blue")));
    }

    #[test]
    fn test_merge_overrides_fields_and_type() {
        let mut config = StateConfig::new().with_field("color", json!("red"));
        let mut data = Map::new();
        data.insert("color".into(), json!("green"));
        data.insert("type".into(), json!("final"));

        config.merge(&data);

        assert_eq!(config.fields.get("color"), Some(&json!("green")));
        assert_eq!(config.state_type.as_deref(), Some("final"));
    }

    #[test]
    fn test_dangling_detection() {
        let doc = FsmDocument::new()
            .with_state("idle", StateConfig::initial())
            .with_transition("idle", "ghost", "go");

        assert!(doc.is_dangling(&doc.transitions[0]));
    }
}
