//! reqwest-backed platform client
//!
//! One client per task invocation is fine; the struct is also cheap to reuse.
//! Authentication is API-key Basic auth on every request, scoped to the
//! configured organization.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use soar_core::ConnectionConfig;

use crate::rest::{ClientError, RestClient};

/// Authenticated REST client for one platform instance and organization
pub struct CaseClient {
    http: reqwest::Client,
    /// Instance root, e.g. `https://cases.example.com:443`
    root: Url,
    /// Organization handle used to scope default paths
    org: String,
    /// Precomputed `Basic` credential token
    auth: String,
}

impl CaseClient {
    /// Build a client from validated connection configuration
    pub fn new(config: &ConnectionConfig) -> Result<Self, ClientError> {
        let root = Url::parse(&format!("https://{}:{}", config.host, config.port))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_tls)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let credentials = format!("{}:{}", config.api_key_id, config.api_key_secret);
        Ok(Self {
            http,
            root,
            org: config.org.clone(),
            auth: format!("Basic {}", BASE64.encode(credentials)),
        })
    }

    /// Resolve a task path against the instance root
    ///
    /// Plain paths are organization-scoped; `/rest/`-prefixed paths address
    /// the instance directly.
    fn url_for(&self, path: &str) -> Result<Url, ClientError> {
        let full = if path.starts_with("/rest/") {
            format!("{}{}", self.root.as_str().trim_end_matches('/'), path)
        } else {
            format!(
                "{}/rest/orgs/{}{}",
                self.root.as_str().trim_end_matches('/'),
                self.org,
                path
            )
        };
        Ok(Url::parse(&full)?)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = self.url_for(path)?;
        debug!(%method, %url, "platform request");

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.auth.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, "platform rejected credentials");
            return Err(ClientError::Unauthorized(text));
        }
        if !status.is_success() {
            warn!(%status, "platform request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl RestClient for CaseClient {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        self.request(Method::POST, path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectionConfig {
        ConnectionConfig {
            host: "cases.example.com".into(),
            port: 443,
            org: "SOC".into(),
            api_key_id: "key-id".into(),
            api_key_secret: "key-secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_org_scoped_url() {
        let client = CaseClient::new(&config()).unwrap();
        let url = client.url_for("/incidents?want_closed=false").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cases.example.com/rest/orgs/SOC/incidents?want_closed=false"
        );
    }

    #[test]
    fn test_instance_scoped_url_bypasses_org() {
        let client = CaseClient::new(&config()).unwrap();
        let url = client.url_for("/rest/privacy/data_type_categories").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cases.example.com/rest/privacy/data_type_categories"
        );
    }

    #[test]
    fn test_query_uri_survives_resolution() {
        let client = CaseClient::new(&config()).unwrap();
        let url = client
            .url_for("/incidents/query?return_level=normal&field_handle=name")
            .unwrap();
        assert_eq!(
            url.query(),
            Some("return_level=normal&field_handle=name")
        );
    }

    #[test]
    fn test_non_default_port_kept() {
        let mut cfg = config();
        cfg.port = 8443;
        let client = CaseClient::new(&cfg).unwrap();
        let url = client.url_for("/incidents").unwrap();
        assert_eq!(url.port(), Some(8443));
    }
}
