//! GraphQL client and request adapters for otp-mcp.
//!
//! This crate builds query variables from tool input, issues one request to
//! the Open Targets Platform per invocation, and normalizes the response
//! into the compact reports defined in `otp-schema`.

pub mod client;
pub mod control;
pub mod variables;

pub use client::{ClientError, DEFAULT_ENDPOINT, GraphQlClient};
pub use control::{AdapterError, ControlError, OtpControlPlane};
pub use reqwest::Url;
pub use variables::Variables;
