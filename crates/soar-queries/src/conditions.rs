//! Query conditions
//!
//! A condition is one field-comparison clause. Input arrives as a 2- or
//! 3-element tuple (field, value, optional operator); either a single tuple
//! or an ordered list of them, made explicit here as a tagged variant instead
//! of a flag plus shape sniffing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operator tags understood by the platform's query endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    HasAValue,
    DoesNotHaveAValue,
}

impl Method {
    /// Parse an operator from its wire tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "equals" => Some(Self::Equals),
            "not_equals" => Some(Self::NotEquals),
            "contains" => Some(Self::Contains),
            "not_contains" => Some(Self::NotContains),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "in" => Some(Self::In),
            "not_in" => Some(Self::NotIn),
            "has_a_value" => Some(Self::HasAValue),
            "does_not_have_a_value" => Some(Self::DoesNotHaveAValue),
            _ => None,
        }
    }

    /// The wire tag sent to the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::HasAValue => "has_a_value",
            Self::DoesNotHaveAValue => "does_not_have_a_value",
        }
    }
}

/// One raw input condition, before operator resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionInput {
    /// The field being compared
    pub field_name: String,
    /// The comparison value
    pub value: Value,
    /// Per-condition operator; may be absent when a global override is used
    pub method: Option<Method>,
}

impl ConditionInput {
    /// Create a condition without an operator (a 2-element tuple)
    pub fn new(field_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
            method: None,
        }
    }

    /// Attach the condition's own operator (a 3-element tuple)
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }
}

/// Either one condition or an ordered sequence of them
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionSet {
    Single(ConditionInput),
    Multiple(Vec<ConditionInput>),
}

impl ConditionSet {
    pub fn single(condition: ConditionInput) -> Self {
        Self::Single(condition)
    }

    pub fn multiple(conditions: Vec<ConditionInput>) -> Self {
        Self::Multiple(conditions)
    }

    /// The conditions in input order
    pub fn inputs(&self) -> &[ConditionInput] {
        match self {
            Self::Single(condition) => std::slice::from_ref(condition),
            Self::Multiple(conditions) => conditions.as_slice(),
        }
    }
}

/// A fully resolved condition as sent to the platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub field_name: String,
    pub value: Value,
    pub method: Method,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_parsing() {
        assert_eq!(Method::parse("equals"), Some(Method::Equals));
        assert_eq!(Method::parse("contains"), Some(Method::Contains));
        assert_eq!(Method::parse("not_in"), Some(Method::NotIn));
        assert_eq!(Method::parse("has_a_value"), Some(Method::HasAValue));
        assert_eq!(Method::parse("like"), None);
        assert_eq!(Method::parse("EQUALS"), None);
    }

    #[test]
    fn test_method_round_trip() {
        for tag in [
            "equals",
            "not_equals",
            "contains",
            "not_contains",
            "gt",
            "gte",
            "lt",
            "lte",
            "in",
            "not_in",
            "has_a_value",
            "does_not_have_a_value",
        ] {
            let method = Method::parse(tag).unwrap();
            assert_eq!(method.as_str(), tag);
        }
    }

    #[test]
    fn test_method_serializes_to_wire_tag() {
        assert_eq!(
            serde_json::to_value(Method::NotContains).unwrap(),
            json!("not_contains")
        );
        assert_eq!(serde_json::to_value(Method::In).unwrap(), json!("in"));
    }

    #[test]
    fn test_condition_input_construction() {
        let condition = ConditionInput::new("name", "example_name").with_method(Method::Contains);
        assert_eq!(condition.field_name, "name");
        assert_eq!(condition.value, json!("example_name"));
        assert_eq!(condition.method, Some(Method::Contains));
    }

    #[test]
    fn test_condition_set_preserves_order() {
        let set = ConditionSet::multiple(vec![
            ConditionInput::new("name", "a"),
            ConditionInput::new("name2", "b"),
        ]);
        let fields: Vec<_> = set.inputs().iter().map(|c| c.field_name.as_str()).collect();
        assert_eq!(fields, vec!["name", "name2"]);
    }

    #[test]
    fn test_single_set_has_one_input() {
        let set = ConditionSet::single(ConditionInput::new("id", 42));
        assert_eq!(set.inputs().len(), 1);
    }

    #[test]
    fn test_resolved_condition_wire_shape() {
        let condition = Condition {
            field_name: "name".into(),
            value: json!("example_name"),
            method: Method::Contains,
        };
        assert_eq!(
            serde_json::to_value(&condition).unwrap(),
            json!({"field_name": "name", "value": "example_name", "method": "contains"})
        );
    }
}
