//! Case queries
//!
//! Delegates to the condition builder in `soar-queries` and reports the
//! platform's response verbatim. Read-only.

use serde_json::Value;

use soar_client::RestClient;
use soar_core::{SoarResult, TaskReport};
use soar_queries::{ConditionSet, IncidentQuery, Method, PlanStatus};

/// Query cases by one or more field conditions
#[derive(Debug, Clone)]
pub struct QueryCases {
    pub conditions: ConditionSet,
    /// Global operator override applied to every condition
    pub method: Option<Method>,
    pub plan_status: PlanStatus,
}

impl QueryCases {
    pub fn new(conditions: ConditionSet) -> Self {
        Self {
            conditions,
            method: None,
            plan_status: PlanStatus::default(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn plan_status(mut self, plan_status: PlanStatus) -> Self {
        self.plan_status = plan_status;
        self
    }

    pub async fn run(&self, client: &dyn RestClient) -> SoarResult<TaskReport> {
        let mut query = IncidentQuery::new(self.conditions.clone()).plan_status(self.plan_status);
        if let Some(method) = self.method {
            query = query.method(method);
        }
        let response: Value = query.execute(client).await?;
        Ok(TaskReport::ok_unchanged(response))
    }
}
