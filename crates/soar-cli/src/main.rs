//! Task-runner host
//!
//! Parses task arguments, loads connection configuration, constructs the
//! authenticated client, runs exactly one task, and prints its report as JSON
//! on stdout. Failures print a failure report and map to exit codes:
//! 1 transport/remote, 2 validation/config, 3 auth.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use soar_client::CaseClient;
use soar_core::{AppConfig, SoarError, SoarResult, TaskReport};
use soar_queries::builder::{parse_conditions, QueryError};
use soar_queries::{Method, PlanStatus};
use soar_tasks::{
    CreateArtifact, CreateCase, CreateNote, ListOpenCases, PrivacyDataTypes, QueryCases,
    RelatedCases, TriggerRule,
};

#[derive(Parser)]
#[command(
    name = "soar",
    version,
    about = "Automation tasks for the case-management platform"
)]
struct Cli {
    /// Connection config file (TOML); environment-only when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "soar_client=debug"
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    /// Load and validate configuration, then report without calling the platform
    #[arg(long, global = true)]
    check: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a case
    CreateCase {
        /// Name for the new case
        #[arg(long)]
        name: String,
        /// Extra case fields as a JSON object
        #[arg(long)]
        payload: Option<String>,
        /// Discovery timestamp in epoch millis; defaults to now
        #[arg(long)]
        discovered_date: Option<i64>,
    },
    /// Create an artifact in the organization's global store
    CreateArtifact {
        /// Artifact type name, e.g. "DNS Name"
        #[arg(long = "type")]
        type_name: String,
        /// Artifact value, e.g. "www.example.com"
        #[arg(long)]
        value: String,
        /// Extra fields as a JSON object
        #[arg(long)]
        other: Option<String>,
    },
    /// Add a note to a task
    CreateNote {
        #[arg(long)]
        task_id: u64,
        /// Note body, plain or rich text
        #[arg(long)]
        text: String,
        /// Extra fields as a JSON object
        #[arg(long)]
        other: Option<String>,
    },
    /// Query cases by field conditions
    QueryCases {
        /// A JSON condition tuple [field, value, method?], or a list of
        /// tuples with --multiple-fields
        #[arg(long)]
        conditions: String,
        /// Global operator applied to every condition
        #[arg(long)]
        method: Option<String>,
        /// "A" for open cases (default), "C" for closed
        #[arg(long)]
        plan_status: Option<String>,
        /// Treat --conditions as a list of tuples
        #[arg(long)]
        multiple_fields: bool,
    },
    /// Trigger an automation rule on a case
    TriggerRule {
        #[arg(long)]
        case_id: u64,
        #[arg(long)]
        rule_id: u64,
        /// Rule input properties as a JSON object
        #[arg(long)]
        properties: Option<String>,
    },
    /// List every open case
    ListOpenCases,
    /// Fetch cases related to a case
    RelatedCases {
        #[arg(long)]
        case_id: u64,
    },
    /// Fetch the platform's privacy data type categories
    PrivacyDataTypes,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    match run(cli).await {
        Ok(report) => {
            emit(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.exit_code();
            emit(&TaskReport::from(err));
            ExitCode::from(code as u8)
        }
    }
}

async fn run(cli: Cli) -> SoarResult<TaskReport> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path),
        None => AppConfig::from_env(),
    }
    .map_err(|e| SoarError::Config(e.to_string()))?;
    config
        .connection
        .validate()
        .map_err(|e| SoarError::Config(e.to_string()))?;

    if cli.check {
        debug!("check mode: skipping platform call");
        return Ok(TaskReport::ok_unchanged(Value::Null));
    }

    let client = CaseClient::new(&config.connection)?;

    match cli.command {
        Command::CreateCase {
            name,
            payload,
            discovered_date,
        } => {
            let mut task = CreateCase::new(name).with_payload(parse_object(payload)?);
            if let Some(epoch_millis) = discovered_date {
                task = task.discovered_at(epoch_millis);
            }
            task.run(&client).await
        }
        Command::CreateArtifact {
            type_name,
            value,
            other,
        } => {
            CreateArtifact::new(type_name, value)
                .with_other(parse_object(other)?)
                .run(&client)
                .await
        }
        Command::CreateNote {
            task_id,
            text,
            other,
        } => {
            CreateNote::new(task_id, text)
                .with_other(parse_object(other)?)
                .run(&client)
                .await
        }
        Command::QueryCases {
            conditions,
            method,
            plan_status,
            multiple_fields,
        } => {
            let parsed: Value = serde_json::from_str(&conditions)?;
            let mut task = QueryCases::new(parse_conditions(&parsed, multiple_fields)?);
            if let Some(tag) = method {
                let method =
                    Method::parse(&tag).ok_or_else(|| QueryError::UnknownMethod(tag.clone()))?;
                task = task.method(method);
            }
            if let Some(code) = plan_status {
                let status = PlanStatus::parse(&code)
                    .ok_or_else(|| QueryError::UnknownStatus(code.clone()))?;
                task = task.plan_status(status);
            }
            task.run(&client).await
        }
        Command::TriggerRule {
            case_id,
            rule_id,
            properties,
        } => {
            TriggerRule::new(case_id, rule_id)
                .with_properties(parse_object(properties)?)
                .run(&client)
                .await
        }
        Command::ListOpenCases => ListOpenCases::new().run(&client).await,
        Command::RelatedCases { case_id } => RelatedCases::new(case_id).run(&client).await,
        Command::PrivacyDataTypes => PrivacyDataTypes::new().run(&client).await,
    }
}

/// Parse an optional JSON-object argument
fn parse_object(raw: Option<String>) -> SoarResult<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };
    match serde_json::from_str(&raw)? {
        Value::Object(map) => Ok(map),
        other => Err(SoarError::Validation(format!(
            "expected a JSON object, got: {other}"
        ))),
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn emit(report: &TaskReport) {
    match serde_json::to_string_pretty(report) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("failed to render report: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_object_accepts_objects_only() {
        let map = parse_object(Some(r#"{"a": 1}"#.into())).unwrap();
        assert_eq!(map["a"], serde_json::json!(1));
        assert!(parse_object(None).unwrap().is_empty());
        assert!(parse_object(Some("[1, 2]".into())).is_err());
        assert!(parse_object(Some("not json".into())).is_err());
    }

    #[test]
    fn test_query_cases_args_parse() {
        let cli = Cli::try_parse_from([
            "soar",
            "query-cases",
            "--conditions",
            r#"["name", "example_name", "contains"]"#,
            "--plan-status",
            "c",
        ])
        .unwrap();
        match cli.command {
            Command::QueryCases {
                plan_status,
                multiple_fields,
                ..
            } => {
                assert_eq!(plan_status.as_deref(), Some("c"));
                assert!(!multiple_fields);
            }
            _ => panic!("expected query-cases"),
        }
    }
}
