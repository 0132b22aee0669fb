//! Formatting helper functions for quick capture
//!
//! This module contains the preview line, human-readable summaries and the
//! machine-readable encodings of parsed tasks.

use crate::capture::{ParsedTask, TaskDraft};
use anyhow::Result;
use serde::Serialize;
use std::str::FromStr;

/// Output encoding for parse results
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One-line preview
    #[default]
    text,
    json,
    toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::text),
            "json" => Ok(OutputFormat::json),
            "toml" => Ok(OutputFormat::toml),
            _ => Err(format!(
                "Invalid format '{}'. Valid options are: text, json, toml",
                s
            )),
        }
    }
}

/// Format the live preview line
///
/// # Description
/// Shows the title, then the due date and due time (as HH:MM) when present,
/// then priority and category.
pub fn format_preview(task: &ParsedTask) -> String {
    let mut parts = vec!["Preview:".to_string(), task.title.clone()];
    if let Some(date) = task.due_date {
        parts.push(date.format("%Y-%m-%d").to_string());
    }
    if let Some(time) = task.due_time {
        parts.push(time.format("%H:%M").to_string());
    }
    parts.push(task.priority.to_string());
    parts.push(task.category.to_string());
    parts.join(" ")
}

/// Format a captured draft into a display string
pub fn format_draft(draft: &TaskDraft) -> String {
    let mut result = format!("Task captured: {}\n", draft.title);
    if let Some(date) = draft.due_date {
        result.push_str(&format!("  Due date: {}\n", date));
    }
    if let Some(time) = draft.due_time {
        result.push_str(&format!("  Due time: {}\n", time));
    }
    result.push_str(&format!("  Priority: {}\n", draft.priority));
    result.push_str(&format!("  Category: {}\n", draft.category));
    result.push_str(&format!("  Status: {:?}\n", draft.status));
    result
}

/// Format syntax hints as a bulleted list
pub fn format_hints(hints: &[&str]) -> String {
    hints
        .iter()
        .map(|hint| format!("- {}\n", hint))
        .collect()
}

/// Encode a value as pretty-printed JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a parsed task in the requested format
pub fn render_parsed(task: &ParsedTask, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::text => Ok(format_preview(task)),
        OutputFormat::json => to_json(task),
        OutputFormat::toml => Ok(toml::to_string_pretty(task)?),
    }
}

/// Render a task draft in the requested format
pub fn render_draft(draft: &TaskDraft, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::text => Ok(format_draft(draft)),
        OutputFormat::json => to_json(draft),
        OutputFormat::toml => Ok(toml::to_string_pretty(draft)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{Category, Priority};
    use chrono::{NaiveDate, NaiveTime};

    fn sample() -> ParsedTask {
        ParsedTask {
            title: "Submit report".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 11),
            due_time: NaiveTime::from_hms_opt(17, 0, 0),
            priority: Priority::high,
            category: Category::Work,
        }
    }

    #[test]
    fn test_format_preview_full() {
        assert_eq!(
            format_preview(&sample()),
            "Preview: Submit report 2025-06-11 17:00 high Work"
        );
    }

    #[test]
    fn test_format_preview_defaults() {
        let task = ParsedTask {
            title: "Buy groceries".to_string(),
            ..Default::default()
        };
        assert_eq!(format_preview(&task), "Preview: Buy groceries medium General");
    }

    #[test]
    fn test_format_draft() {
        let text = format_draft(&sample().into_draft());
        assert!(text.starts_with("Task captured: Submit report\n"));
        assert!(text.contains("  Due date: 2025-06-11\n"));
        assert!(text.contains("  Due time: 17:00:00\n"));
        assert!(text.contains("  Status: pending\n"));
    }

    #[test]
    fn test_format_hints() {
        assert_eq!(format_hints(&["a", "b"]), "- a\n- b\n");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::json);
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("text, json, toml"));
    }

    #[test]
    fn test_render_json_and_toml() {
        let json = render_parsed(&sample(), OutputFormat::json).unwrap();
        assert!(json.contains("\"due_time\": \"17:00:00\""));

        let toml_text = render_parsed(&sample(), OutputFormat::toml).unwrap();
        assert!(toml_text.contains("title = \"Submit report\""));
        assert!(toml_text.contains("priority = \"high\""));
    }
}
