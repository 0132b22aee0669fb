//! Validation helper functions for the quick-capture MCP server
//!
//! This module contains validation logic for tool parameters: reference dates
//! and output formats.

use crate::formatting::OutputFormat;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Parse and validate the reference date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_reference_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ),
            true,
        )
    })
}

/// Parse and validate the output format parameter
///
/// # Arguments
/// * `format_str` - One of "text", "json", "toml"
///
/// # Returns
/// Result containing parsed OutputFormat or error
pub fn parse_output_format(format_str: &str) -> McpResult<OutputFormat> {
    format_str.trim().parse::<OutputFormat>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_date() {
        assert_eq!(
            parse_reference_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_reference_date("03/15/2025").is_err());
        assert!(parse_reference_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(" toml ").unwrap(), OutputFormat::toml);
        assert!(parse_output_format("xml").is_err());
    }
}
