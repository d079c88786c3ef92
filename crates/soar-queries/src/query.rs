//! The outbound query document
//!
//! Wire shape expected by `POST /incidents/query`: an ordered list of filter
//! groups (conditions within a group are ANDed) and a sort list.

use serde::Serialize;

use crate::conditions::Condition;

/// Field names with fixed roles in every query
pub mod fields {
    pub const PLAN_STATUS: &str = "plan_status";
    pub const CREATE_DATE: &str = "create_date";
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A single sort criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOrder {
    pub field_name: String,
    #[serde(rename = "type")]
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// A set of conditions combined with AND semantics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterGroup {
    pub conditions: Vec<Condition>,
}

/// The complete request body for an incident query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDocument {
    pub filters: Vec<FilterGroup>,
    pub sorts: Vec<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Method;
    use serde_json::json;

    #[test]
    fn test_sort_serializes_type_key() {
        let sort = SortOrder::desc(fields::CREATE_DATE);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!({"field_name": "create_date", "type": "desc"})
        );
    }

    #[test]
    fn test_document_wire_shape() {
        let document = QueryDocument {
            filters: vec![FilterGroup {
                conditions: vec![Condition {
                    field_name: "plan_status".into(),
                    value: json!("A"),
                    method: Method::Equals,
                }],
            }],
            sorts: vec![SortOrder::desc(fields::CREATE_DATE)],
        };
        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({
                "filters": [{
                    "conditions": [
                        {"field_name": "plan_status", "value": "A", "method": "equals"}
                    ]
                }],
                "sorts": [{"field_name": "create_date", "type": "desc"}]
            })
        );
    }
}
