//! MCP tool handlers for the quick-capture server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod capture_task;
pub mod parse_task;
pub mod parsing_hints;
