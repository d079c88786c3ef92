//! Case creation
//!
//! `POST /incidents` with a name, a discovered date, and any extra fields the
//! caller wants set on the new case.

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::info;

use soar_client::RestClient;
use soar_core::{SoarResult, TaskReport};

/// Create a new case on the platform
#[derive(Debug, Clone)]
pub struct CreateCase {
    /// Name given to the new case
    pub name: String,
    /// Discovery timestamp in epoch millis; defaults to now
    pub discovered_date: Option<i64>,
    /// Extra non-mandatory fields merged into the request body
    pub payload: Map<String, Value>,
}

impl CreateCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discovered_date: None,
            payload: Map::new(),
        }
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn discovered_at(mut self, epoch_millis: i64) -> Self {
        self.discovered_date = Some(epoch_millis);
        self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let mut body = Map::new();
        body.insert("name".into(), Value::String(self.name.clone()));
        body.insert(
            "discovered_date".into(),
            Value::from(
                self.discovered_date
                    .unwrap_or_else(|| Utc::now().timestamp_millis()),
            ),
        );
        // caller-supplied fields win over the defaults above
        for (key, value) in &self.payload {
            body.insert(key.clone(), value.clone());
        }

        let response = client.post("/incidents", &Value::Object(body)).await?;
        info!(name = %self.name, "case created");
        Ok(TaskReport::ok(response))
    }
}
