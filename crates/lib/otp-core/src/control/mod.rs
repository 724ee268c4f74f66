use otp_schema::queries::QueryDocument;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::client::{ClientError, GraphQlClient};
use crate::variables::Variables;

pub mod associations;
pub mod evidence;
pub mod target;

pub use associations::{AssociationsRequest, DatasourceSetting, Page};
pub use evidence::EvidenceRequest;
pub use target::TargetRequest;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Remote(#[from] ClientError),
    #[error("response is missing expected data: {0}")]
    MissingField(String),
}

/// Failure of one tool invocation, naming the identifier it was about.
#[derive(Debug, Error)]
#[error("Failed to fetch {subject}: {source}")]
pub struct AdapterError {
    pub tool: &'static str,
    pub subject: String,
    #[source]
    pub source: ControlError,
}

impl AdapterError {
    /// Wraps `source` and logs it against `tool`.
    pub fn logged(tool: &'static str, subject: String, source: ControlError) -> Self {
        let err = Self {
            tool,
            subject,
            source,
        };
        error!(tool, error = %err.source, "{err}");
        err
    }

    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.source, ControlError::InvalidInput(_))
    }
}

/// Request adapters over the platform GraphQL API.
///
/// Holds no per-invocation state; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct OtpControlPlane {
    client: GraphQlClient,
}

impl OtpControlPlane {
    #[must_use]
    pub const fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &GraphQlClient {
        &self.client
    }

    /// Runs `query` and parses its `data` into `T`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: &QueryDocument,
        variables: &Variables,
    ) -> Result<T, ControlError> {
        variables
            .check_against(query)
            .map_err(ControlError::InvalidInput)?;
        let data = self.client.execute(query, variables).await?;
        serde_json::from_value(data).map_err(|err| ControlError::MissingField(err.to_string()))
    }
}

fn build_variables<T: serde::Serialize>(value: &T) -> Result<Variables, ControlError> {
    Variables::from_serializable(value).map_err(|err| ControlError::InvalidInput(err.to_string()))
}

fn require_non_blank(field: &str, value: &str) -> Result<(), ControlError> {
    if value.trim().is_empty() {
        return Err(ControlError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

/// Bounds an integer argument to `min..=i32::MAX`, the range of a GraphQL `Int`.
fn require_int_range(field: &str, value: i64, min: i64) -> Result<(), ControlError> {
    let max = i64::from(i32::MAX);
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(ControlError::InvalidInput(format!(
        "{field} must be between {min} and {max}, got {value}"
    )))
}

/// Rejects a row count above the total the platform reported.
fn check_count(path: &str, count: u64, returned: usize) -> Result<(), ControlError> {
    if u64::try_from(returned).unwrap_or(u64::MAX) > count {
        return Err(ControlError::MissingField(format!(
            "{path}.count {count} is below the {returned} rows returned"
        )));
    }
    Ok(())
}
