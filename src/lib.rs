//! Quick Capture Library
//!
//! This library turns one line of free text such as
//! `"Submit report tomorrow 5pm #work !high"` into a structured task, and
//! exposes the parser as a Model Context Protocol (MCP) server.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `QuickCaptureHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `capture` module - Pattern tables, extraction pipeline and task models
//! - **Presentation Layer**: `formatting` module - Preview lines and JSON/TOML encodings
//!
//! Parsing itself is pure and synchronous: it performs no I/O and keeps no state
//! between calls, so the same text always yields the same task (for a fixed
//! reference date).
//!
//! # Example
//!
//! ```
//! use quick_capture::{Category, Priority, parse_task_input};
//!
//! let task = parse_task_input("Buy groceries #shop !low");
//! assert_eq!(task.title, "Buy groceries");
//! assert_eq!(task.category, Category::Shopping);
//! assert_eq!(task.priority, Priority::low);
//! ```

pub mod capture;
pub mod formatting;
pub mod handlers;
pub mod validation;

use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use capture::{
    Category, ParseOptions, ParsedTask, Priority, TaskDraft, TaskStatus, capture, parse_task_input,
    parse_task_input_on, parsing_hints, preview,
};
pub use formatting::OutputFormat;

/// MCP Server handler for quick capture
///
/// Provides an MCP interface to the quick-capture parser: previewing a line of
/// text, turning it into a task draft, and listing the supported syntax.
/// Nothing is persisted; drafts are handed back to the client.
pub struct QuickCaptureHandler {
    pub(crate) reference_date: Option<NaiveDate>,
}

impl QuickCaptureHandler {
    /// Create a new quick-capture handler
    ///
    /// # Arguments
    /// * `reference_date` - Pin "today" for every call (local date when `None`)
    ///
    /// # Example
    /// ```
    /// # use quick_capture::QuickCaptureHandler;
    /// let handler = QuickCaptureHandler::new(None);
    /// ```
    pub fn new(reference_date: Option<NaiveDate>) -> Self {
        Self { reference_date }
    }

    /// Build parse options for one call
    ///
    /// A `today` parameter on the call wins over the handler-wide reference date.
    pub(crate) fn parse_options(&self, today: Option<&str>) -> McpResult<ParseOptions> {
        let reference_date = match today {
            Some(date_str) => Some(validation::parse_reference_date(date_str)?),
            None => self.reference_date,
        };
        Ok(ParseOptions { reference_date })
    }
}

/// Quick-capture task parser for a personal task list.
///
/// Turns one line of natural text into a structured task with title, due date,
/// due time, priority and category. Recognized syntax:
/// - **Dates**: "today", "tomorrow", "in 3 days", "next week", "12/25", "1/5/26", "Jan 15", "March 3, 2026"
/// - **Times**: "10pm", "2:30pm", "14:00"
/// - **Priority**: "!high"/"!h", "!medium"/"!med"/"!m", "!low"/"!l" (default: medium)
/// - **Category**: "#work", "#personal", "#college", "#health", "#finance", "#shopping", "#travel" (default: General)
///
/// Everything not recognized stays in the title. Parsing never fails.
#[mcp_server]
impl McpServer for QuickCaptureHandler {
    /// **Preview**: Parse text and show how it would be captured, without capturing it.
    /// **Use**: Call while the user is still typing to show title/date/time/priority/category.
    #[tool]
    async fn parse_task(
        &self,
        /// Input: one line of free text (e.g., "Submit report tomorrow 5pm #work !high")
        input: String,
        /// Today: reference date YYYY-MM-DD for relative dates (optional, defaults to local date)
        today: Option<String>,
        /// Format: text/json/toml (optional, default text)
        format: Option<String>,
    ) -> McpResult<String> {
        self.handle_parse_task(input, today, format).await
    }

    /// **Capture**: Turn submitted text into a pending task draft (JSON) ready for the task store.
    /// **Workflow**: 1) parse_task while typing → 2) capture_task on submit → 3) store the draft.
    #[tool]
    async fn capture_task(
        &self,
        /// Input: one line of free text (e.g., "Pay rent in 3 days #finance")
        input: String,
        /// Today: reference date YYYY-MM-DD for relative dates (optional, defaults to local date)
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_capture_task(input, today).await
    }

    /// **Help**: List the supported quick-capture syntax.
    #[tool]
    async fn parsing_hints(&self) -> McpResult<String> {
        self.handle_parsing_hints().await
    }
}
