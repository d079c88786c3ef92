//! Privacy data type categories
//!
//! `GET /rest/privacy/data_type_categories`. This endpoint is instance-scoped
//! rather than organization-scoped, so the path carries the `/rest/` prefix
//! and bypasses the client's org scope. Read-only.

use soar_client::RestClient;
use soar_core::{SoarResult, TaskReport};

/// Fetch the platform's privacy data type categories
#[derive(Debug, Clone, Default)]
pub struct PrivacyDataTypes;

impl PrivacyDataTypes {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let response = client.get("/rest/privacy/data_type_categories").await?;
        Ok(TaskReport::ok_unchanged(response))
    }
}
