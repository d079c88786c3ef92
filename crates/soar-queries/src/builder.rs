//! Incident query assembly
//!
//! Builds the filter query document from condition input plus the optional
//! global operator and status flags, and issues it through an injected REST
//! client. A fresh output list is always built; input is never mutated during
//! traversal.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use soar_client::RestClient;
use soar_core::{SoarError, SoarResult};

use crate::conditions::{Condition, ConditionInput, ConditionSet, Method};
use crate::query::{fields, FilterGroup, QueryDocument, SortOrder};
use crate::status::PlanStatus;

/// Fixed query endpoint; `field_handle` markers are appended per field
const QUERY_PATH: &str = "/incidents/query?return_level=normal";

/// Errors raised while assembling a query, all before any network call
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("no operator for field \"{field}\": supply one in the condition or set a global method")]
    MissingMethod { field: String },

    #[error("unknown operator tag: \"{0}\"")]
    UnknownMethod(String),

    #[error("unknown plan status: \"{0}\" (expected \"A\" or \"C\")")]
    UnknownStatus(String),

    #[error("no conditions supplied")]
    Empty,

    #[error("malformed condition: {0}")]
    Malformed(String),
}

impl From<QueryError> for SoarError {
    fn from(err: QueryError) -> Self {
        SoarError::Validation(err.to_string())
    }
}

/// A query ready to submit: its endpoint URI and request body
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub uri: String,
    pub document: QueryDocument,
}

/// Incident query over one or more field conditions
///
/// # Example
/// ```
/// use soar_queries::builder::IncidentQuery;
/// use soar_queries::conditions::{ConditionInput, ConditionSet, Method};
/// use soar_queries::status::PlanStatus;
///
/// let built = IncidentQuery::new(ConditionSet::multiple(vec![
///     ConditionInput::new("name", "a"),
///     ConditionInput::new("severity_code", "b"),
/// ]))
/// .method(Method::Equals)
/// .plan_status(PlanStatus::Closed)
/// .build()
/// .unwrap();
///
/// assert_eq!(built.document.filters[0].conditions.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct IncidentQuery {
    conditions: ConditionSet,
    method: Option<Method>,
    plan_status: PlanStatus,
}

impl IncidentQuery {
    pub fn new(conditions: ConditionSet) -> Self {
        Self {
            conditions,
            method: None,
            plan_status: PlanStatus::default(),
        }
    }

    /// Set a global operator applied to every condition, overriding any
    /// per-condition operator
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Select open ("A") or closed ("C") cases; defaults to open
    pub fn plan_status(mut self, plan_status: PlanStatus) -> Self {
        self.plan_status = plan_status;
        self
    }

    /// Assemble the query document and its endpoint URI
    ///
    /// Conditions keep their input order; the status condition is appended
    /// last. Every output condition carries a concrete operator: the global
    /// override when set, the condition's own otherwise. A condition with
    /// neither is a validation error.
    pub fn build(&self) -> Result<BuiltQuery, QueryError> {
        let inputs = self.conditions.inputs();
        if inputs.is_empty() {
            return Err(QueryError::Empty);
        }

        let mut conditions = Vec::with_capacity(inputs.len() + 1);
        let mut uri = String::from(QUERY_PATH);
        for input in inputs {
            let method = self.method.or(input.method).ok_or_else(|| {
                QueryError::MissingMethod {
                    field: input.field_name.clone(),
                }
            })?;
            conditions.push(Condition {
                field_name: input.field_name.clone(),
                value: input.value.clone(),
                method,
            });
            uri.push_str("&field_handle=");
            uri.push_str(&input.field_name);
        }

        conditions.push(Condition {
            field_name: fields::PLAN_STATUS.into(),
            value: Value::String(self.plan_status.as_code().into()),
            method: Method::Equals,
        });

        Ok(BuiltQuery {
            uri,
            document: QueryDocument {
                filters: vec![FilterGroup { conditions }],
                sorts: vec![SortOrder::desc(fields::CREATE_DATE)],
            },
        })
    }

    /// Build and submit the query, returning the decoded response verbatim
    ///
    /// Transport and remote-API failures propagate unmodified; the caller
    /// maps them to a user-visible failure.
    pub async fn execute(&self, client: &dyn RestClient) -> SoarResult<Value> {
        let built = self.build()?;
        debug!(uri = %built.uri, "submitting incident query");
        let body = serde_json::to_value(&built.document)?;
        let response = client.post(&built.uri, &body).await?;
        Ok(response)
    }
}

/// Parse loosely-typed condition input from the host
///
/// `multiple_fields` selects the shape: a single `[field, value, method?]`
/// tuple, or a list of such tuples. Tuples have two or three elements; the
/// third, when present, must be a known operator tag.
pub fn parse_conditions(value: &Value, multiple_fields: bool) -> Result<ConditionSet, QueryError> {
    if multiple_fields {
        let rows = value
            .as_array()
            .ok_or_else(|| QueryError::Malformed("expected a list of condition tuples".into()))?;
        let conditions = rows.iter().map(parse_tuple).collect::<Result<Vec<_>, _>>()?;
        Ok(ConditionSet::multiple(conditions))
    } else {
        Ok(ConditionSet::single(parse_tuple(value)?))
    }
}

fn parse_tuple(value: &Value) -> Result<ConditionInput, QueryError> {
    let tuple = value
        .as_array()
        .ok_or_else(|| QueryError::Malformed("expected [field, value, method?]".into()))?;
    if tuple.len() < 2 || tuple.len() > 3 {
        return Err(QueryError::Malformed(format!(
            "expected 2 or 3 elements, got {}",
            tuple.len()
        )));
    }

    let field_name = tuple[0]
        .as_str()
        .ok_or_else(|| QueryError::Malformed("field name must be a string".into()))?;
    let mut condition = ConditionInput::new(field_name, tuple[1].clone());
    if let Some(tag) = tuple.get(2) {
        let tag = tag
            .as_str()
            .ok_or_else(|| QueryError::Malformed("operator must be a string tag".into()))?;
        let method = Method::parse(tag).ok_or_else(|| QueryError::UnknownMethod(tag.into()))?;
        condition = condition.with_method(method);
    }
    Ok(condition)
}
