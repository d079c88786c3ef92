//! Related case lookup
//!
//! `GET /incidents/{id}/related_ex`, the platform's extended relationship
//! view for a case. Read-only.

use soar_client::RestClient;
use soar_core::{CaseId, SoarResult, TaskReport};

/// Fetch the cases related to a given case
#[derive(Debug, Clone)]
pub struct RelatedCases {
    pub case_id: CaseId,
}

impl RelatedCases {
    pub fn new(case_id: CaseId) -> Self {
        Self { case_id }
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let path = format!("/incidents/{}/related_ex", self.case_id);
        let response = client.get(&path).await?;
        Ok(TaskReport::ok_unchanged(response))
    }
}
