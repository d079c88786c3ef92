//! Rule invocation
//!
//! `POST /incidents/{id}/action_invocations` to fire an automation rule
//! against a case. Rule properties pass through untouched.

use serde_json::{json, Map, Value};
use tracing::info;

use soar_client::RestClient;
use soar_core::{CaseId, RuleId, SoarResult, TaskReport};

/// Trigger an automation rule on a case
#[derive(Debug, Clone)]
pub struct TriggerRule {
    pub case_id: CaseId,
    pub rule_id: RuleId,
    /// Rule input properties, forwarded verbatim
    pub properties: Map<String, Value>,
}

impl TriggerRule {
    pub fn new(case_id: CaseId, rule_id: RuleId) -> Self {
        Self {
            case_id,
            rule_id,
            properties: Map::new(),
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let body = json!({
            "action_id": self.rule_id,
            "properties": Value::Object(self.properties.clone()),
        });

        let path = format!("/incidents/{}/action_invocations", self.case_id);
        let response = client.post(&path, &body).await?;
        info!(case_id = self.case_id, rule_id = self.rule_id, "rule triggered");
        Ok(TaskReport::ok(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::MockRest;

    #[tokio::test]
    async fn test_posts_action_invocation() {
        let mut client = MockRest::new();
        client
            .expect_post()
            .withf(|path, body| {
                path == "/incidents/2095/action_invocations"
                    && body["action_id"] == json!(42)
                    && body["properties"] == json!({})
            })
            .returning(|_, _| Ok(Value::Null));

        let report = TriggerRule::new(2095, 42).run(&client).await.unwrap();
        assert!(report.changed);
    }

    #[tokio::test]
    async fn test_properties_forwarded() {
        let mut client = MockRest::new();
        client
            .expect_post()
            .withf(|_, body| body["properties"]["job_status"] == json!("queued"))
            .returning(|_, _| Ok(Value::Null));

        let mut properties = Map::new();
        properties.insert("job_status".into(), json!("queued"));
        TriggerRule::new(1, 2)
            .with_properties(properties)
            .run(&client)
            .await
            .unwrap();
    }
}
