//! Query catalog and response models for otp-mcp.
//!
//! This crate holds the fixed GraphQL documents sent to the Open Targets
//! Platform, the shapes their responses are parsed into, and the compact
//! records the adapters emit.

pub mod models;
pub mod queries;
pub mod remote;

pub use models::*;
