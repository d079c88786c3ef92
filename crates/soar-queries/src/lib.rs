//! # soar-queries
//!
//! Incident query construction for SOAR RS.
//!
//! This crate turns loosely structured condition input into the platform's
//! filter query document and issues it through an injected REST client.
//!
//! ## Structure
//!
//! - `conditions` - Condition input, operator tags, and the tagged single/multiple set
//! - `status` - Plan status filter values
//! - `query` - The outbound query document (filter groups and sorts)
//! - `builder` - Assembly of conditions into a query plus its endpoint URI
//!
//! ## Example
//!
//! ```
//! use soar_queries::builder::IncidentQuery;
//! use soar_queries::conditions::{ConditionInput, ConditionSet, Method};
//!
//! let query = IncidentQuery::new(ConditionSet::single(
//!     ConditionInput::new("name", "example_name").with_method(Method::Contains),
//! ));
//! let built = query.build().unwrap();
//!
//! assert!(built.uri.contains("field_handle=name"));
//! assert_eq!(built.document.filters[0].conditions.len(), 2);
//! ```

pub mod builder;
pub mod conditions;
pub mod query;
pub mod status;

// Re-exports for convenience
pub use builder::{BuiltQuery, IncidentQuery, QueryError};
pub use conditions::{Condition, ConditionInput, ConditionSet, Method};
pub use query::{FilterGroup, QueryDocument, SortDirection, SortOrder};
pub use status::PlanStatus;
