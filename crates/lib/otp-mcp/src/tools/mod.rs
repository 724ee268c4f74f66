//! MCP tool modules.
//!
//! One module per platform lookup, plus contextual help.

pub mod associations;
pub mod evidence;
pub mod target;
mod context;
