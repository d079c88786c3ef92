//! # soar-tasks
//!
//! Thin automation tasks for the case-management platform. Each task performs
//! a single authenticated REST call through an injected [`RestClient`] and
//! shapes the decoded response into a [`TaskReport`] for the orchestration
//! host. Mutating tasks report `changed`; read-only tasks do not. Transport
//! and remote-API failures propagate as [`soar_core::SoarError`] for the host
//! to translate.
//!
//! [`RestClient`]: soar_client::RestClient
//! [`TaskReport`]: soar_core::TaskReport

pub mod create_artifact;
pub mod create_case;
pub mod create_note;
pub mod list_open_cases;
pub mod privacy_data_types;
pub mod query_cases;
pub mod related_cases;
pub mod trigger_rule;

pub use create_artifact::CreateArtifact;
pub use create_case::CreateCase;
pub use create_note::CreateNote;
pub use list_open_cases::ListOpenCases;
pub use privacy_data_types::PrivacyDataTypes;
pub use query_cases::QueryCases;
pub use related_cases::RelatedCases;
pub use trigger_rule::TriggerRule;
