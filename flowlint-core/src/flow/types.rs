use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Tag on states whose outgoing transitions are chosen by evaluating
/// conditions against a designated input value.
pub const SPLIT_STATE_TYPE: &str = "split-based-on";

/// Condition kind whose `value` is a regular-expression pattern.
pub const MATCHES_REGEX_CONDITION: &str = "matches_regex";

/// Root of a decoded chatbot flow definition.
///
/// Every field is optional on the wire: absent and `null` both decode to
/// `None`, and unknown fields are ignored. Shape is the only thing enforced
/// at construction; structural rules live in the validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDocument {
    pub initial_state: Option<String>,
    pub states: Option<Vec<State>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub state_type: Option<String>,
    pub properties: Option<BTreeMap<String, Value>>,
    pub transitions: Option<Vec<Transition>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub next: Option<String>,
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: Option<String>,
    pub value: Option<String>,
    pub friendly_name: Option<String>,
}

impl FlowDocument {
    pub fn states(&self) -> &[State] {
        self.states.as_deref().unwrap_or_default()
    }
}

impl State {
    /// State name as rendered in issue messages; a nameless state reads as "".
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn is_split(&self) -> bool {
        self.state_type.as_deref() == Some(SPLIT_STATE_TYPE)
    }

    pub fn transitions(&self) -> &[Transition] {
        self.transitions.as_deref().unwrap_or_default()
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }
}

impl Transition {
    pub fn conditions(&self) -> &[Condition] {
        self.conditions.as_deref().unwrap_or_default()
    }
}

impl Condition {
    pub fn is_matches_regex(&self) -> bool {
        self.condition_type.as_deref() == Some(MATCHES_REGEX_CONDITION)
    }

    pub fn friendly_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or_default()
    }
}

/// Emptiness test for property values: null, false, zero, and empty
/// strings/arrays/objects all count as missing.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_truthy, FlowDocument};
    use serde_json::json;

    #[test]
    fn empty_object_decodes_to_empty_document() {
        let document: FlowDocument = serde_json::from_str("{}").expect("decode should succeed");
        assert!(document.initial_state.is_none());
        assert!(document.states().is_empty());
    }

    #[test]
    fn null_fields_decode_like_absent_fields() {
        let raw = r#"{
            "initial_state": null,
            "states": [{"name": null, "type": null, "transitions": null}]
        }"#;
        let document: FlowDocument = serde_json::from_str(raw).expect("decode should succeed");
        assert!(document.initial_state.is_none());
        assert_eq!(document.states().len(), 1);
        assert_eq!(document.states()[0].name(), "");
        assert!(document.states()[0].transitions().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = r#"{"initial_state": "A", "states": [], "revision": 7}"#;
        let document: FlowDocument = serde_json::from_str(raw).expect("decode should succeed");
        assert_eq!(document.initial_state.as_deref(), Some("A"));
    }

    #[test]
    fn truthiness_matches_emptiness_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("message")));
        assert!(is_truthy(&json!(["a"])));
    }
}
