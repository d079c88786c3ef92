//! Artifact creation
//!
//! `POST /artifacts` against the organization's global artifact store. The
//! artifact type is addressed by name ("DNS Name", "IP Address", ...).

use serde_json::{json, Map, Value};
use tracing::info;

use soar_client::RestClient;
use soar_core::{SoarResult, TaskReport};

/// Create an artifact in the organization's global store
#[derive(Debug, Clone)]
pub struct CreateArtifact {
    /// Artifact type name, e.g. "DNS Name"
    pub type_name: String,
    /// Artifact value, e.g. "www.example.com"
    pub value: String,
    /// Extra fields merged into the request body
    pub other: Map<String, Value>,
}

impl CreateArtifact {
    pub fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
            other: Map::new(),
        }
    }

    pub fn with_other(mut self, other: Map<String, Value>) -> Self {
        self.other = other;
        self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let mut body = Map::new();
        body.insert("type".into(), json!({ "name": self.type_name }));
        body.insert("value".into(), Value::String(self.value.clone()));
        for (key, value) in &self.other {
            body.insert(key.clone(), value.clone());
        }

        let response = client.post("/artifacts", &Value::Object(body)).await?;
        info!(artifact_type = %self.type_name, "artifact created");
        Ok(TaskReport::ok(response))
    }
}
