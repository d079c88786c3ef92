//! Task note creation
//!
//! `POST /incidents/{id}/comments`. The note text may be plain or rich text;
//! the platform renders it on the task's comment stream.

use serde_json::{Map, Value};
use tracing::info;

use soar_client::RestClient;
use soar_core::{SoarResult, TaskId, TaskReport};

/// Add a note to a task belonging to a case
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub task_id: TaskId,
    /// Plain or rich text note body
    pub text: String,
    /// Extra fields merged into the request body
    pub other: Map<String, Value>,
}

impl CreateNote {
    pub fn new(task_id: TaskId, text: impl Into<String>) -> Self {
        Self {
            task_id,
            text: text.into(),
            other: Map::new(),
        }
    }

    pub fn with_other(mut self, other: Map<String, Value>) -> Self {
        self.other = other;
        self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let mut body = Map::new();
        body.insert("text".into(), Value::String(self.text.clone()));
        for (key, value) in &self.other {
            body.insert(key.clone(), value.clone());
        }

        let path = format!("/incidents/{}/comments", self.task_id);
        let response = client.post(&path, &Value::Object(body)).await?;
        info!(task_id = self.task_id, "note created");
        Ok(TaskReport::ok(response))
    }
}
