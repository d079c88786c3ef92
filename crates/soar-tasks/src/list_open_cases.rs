//! Open case listing
//!
//! `GET /incidents?want_closed=false`. Read-only.

use soar_client::RestClient;
use soar_core::{SoarResult, TaskReport};

/// List every open case in the organization
#[derive(Debug, Clone, Default)]
pub struct ListOpenCases;

impl ListOpenCases {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let response = client.get("/incidents?want_closed=false").await?;
        Ok(TaskReport::ok_unchanged(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::MockRest;
    use serde_json::json;

    #[tokio::test]
    async fn test_requests_open_cases_only() {
        let mut client = MockRest::new();
        client
            .expect_get()
            .withf(|path| path == "/incidents?want_closed=false")
            .returning(|_| Ok(json!([{"id": 1}, {"id": 2}])));

        let report = ListOpenCases::new().run(&client).await.unwrap();
        assert!(!report.changed);
        assert_eq!(report.response, json!([{"id": 1}, {"id": 2}]));
    }
}
