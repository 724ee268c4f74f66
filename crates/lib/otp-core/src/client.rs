use otp_schema::queries::QueryDocument;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::variables::Variables;

/// Public GraphQL endpoint of the Open Targets Platform.
pub const DEFAULT_ENDPOINT: &str = "https://api.platform.opentargets.org/api/v4/graphql";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Longest slice of a non-GraphQL error body kept in [`ClientError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GraphQL endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("malformed GraphQL response: {0}")]
    Malformed(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a Variables,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Thin GraphQL-over-HTTP client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Builds a client for `endpoint`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: Url) -> ClientResult<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(http, endpoint))
    }

    #[must_use]
    pub const fn with_http_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts `query` with `variables` and returns the `data` object.
    ///
    /// A response carrying a non-empty `errors` array is a failure even when
    /// partial `data` is present.
    ///
    /// # Errors
    /// Returns [`ClientError`] on transport failure, non-2xx status, GraphQL
    /// errors, or a body that is not a GraphQL response.
    pub async fn execute(&self, query: &QueryDocument, variables: &Variables) -> ClientResult<Value> {
        debug!(
            operation = query.operation_name,
            endpoint = %self.endpoint,
            variables = variables.len(),
            "sending GraphQL request"
        );

        let body = GraphQlRequest {
            query: query.document,
            operation_name: query.operation_name,
            variables,
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed = serde_json::from_str::<GraphQlResponse>(&text);
        if !status.is_success() {
            let message = match parsed {
                Ok(GraphQlResponse {
                    errors: Some(errors),
                    ..
                }) if !errors.is_empty() => join_messages(errors),
                _ => truncate(&text),
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = parsed.map_err(|err| ClientError::Malformed(err.to_string()))?;
        if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
            return Err(ClientError::GraphQl(
                errors.into_iter().map(|entry| entry.message).collect(),
            ));
        }
        match parsed.data {
            Some(Value::Null) | None => Err(ClientError::Malformed(
                "response carried no data".to_string(),
            )),
            Some(data) => {
                debug!(operation = query.operation_name, "GraphQL request succeeded");
                Ok(data)
            }
        }
    }
}

fn join_messages(errors: Vec<GraphQlErrorEntry>) -> String {
    errors
        .into_iter()
        .map(|entry| entry.message)
        .collect::<Vec<_>>()
        .join("; ")
}

fn truncate(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    cut.push_str("...");
    cut
}
