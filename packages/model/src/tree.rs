//! Canonical component tree.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A node of the UI component tree
///
/// Children order is render order. Fields the editor does not know about are
/// kept in `props` and travel through projection unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,

    #[serde(default)]
    pub validation_tags: Vec<String>,

    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Vec<TreeNode>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

/// Deepest node depth (root = 0) a tree document can be saved at and loaded
/// back from JSON. serde_json refuses input nested more than 127 levels, and
/// every tree level costs two (the node object and its `children` array);
/// 48 levels leaves room for the document wrapper and nested props.
pub const MAX_TREE_DEPTH: usize = 48;

/// Payload keys owned by the tree model (everything else lands in `props`)
const ID_KEY: &str = "id";
const KIND_KEY: &str = "kind";
const BINDING_KEY: &str = "binding";
const TAGS_KEY: &str = "validationTags";
const CHILDREN_KEY: &str = "children";

impl TreeNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.validation_tags.push(tag.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree (including self)
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Find a node by id (depth-first, first match)
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Node fields without children, as carried in a graph node's data
    pub fn payload(&self) -> Map<String, Value> {
        let mut fields = self.props.clone();
        fields.insert(ID_KEY.to_string(), Value::String(self.id.clone()));
        fields.insert(KIND_KEY.to_string(), Value::String(self.kind.clone()));
        if let Some(binding) = &self.binding {
            fields.insert(BINDING_KEY.to_string(), Value::String(binding.clone()));
        }
        fields.insert(
            TAGS_KEY.to_string(),
            Value::Array(
                self.validation_tags
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        fields
    }

    /// Rebuild a childless node from a graph node's data
    ///
    /// Fields of the wrong JSON type are dropped rather than failing the edit.
    pub fn from_payload(fields: &Map<String, Value>) -> Self {
        let mut props = fields.clone();
        props.remove(CHILDREN_KEY);

        let id = take_string(&mut props, ID_KEY).unwrap_or_default();
        let kind = take_string(&mut props, KIND_KEY).unwrap_or_default();
        let binding = take_string(&mut props, BINDING_KEY);
        let validation_tags = match props.remove(TAGS_KEY) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id,
            kind,
            binding,
            validation_tags,
            children: Vec::new(),
            props,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

/// Accept any JSON for `children`: non-arrays become empty, non-object
/// entries are skipped.
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!(found = %json_type(&other), "Tree node children is not an array, treating as empty");
            return Ok(Vec::new());
        }
    };

    let mut children = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<TreeNode>(item) {
            Ok(child) => children.push(child),
            Err(err) => warn!(error = %err, "Skipping malformed tree child"),
        }
    }
    Ok(children)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
