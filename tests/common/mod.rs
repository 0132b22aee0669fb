//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use quick_capture::{ParsedTask, QuickCaptureHandler, parse_task_input_on};

/// Fixed "today" so relative dates are reproducible
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

/// Reference date as passed to MCP tools
pub fn reference_date_param() -> Option<String> {
    Some("2025-06-10".to_string())
}

/// Reference date shifted forward by `days`
pub fn days_from_reference(days: u64) -> NaiveDate {
    reference_date().checked_add_days(Days::new(days)).unwrap()
}

/// Parse against the fixed reference date
pub fn parse(input: &str) -> ParsedTask {
    parse_task_input_on(input, reference_date())
}

/// Create a handler without a pinned reference date
pub fn get_test_handler() -> QuickCaptureHandler {
    QuickCaptureHandler::new(None)
}
