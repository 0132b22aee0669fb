//! Extraction pipeline
//!
//! Turns one line of free text into a [`ParsedTask`]. The stages run in a fixed
//! order, each against the residual text left by the previous one:
//!
//! 1. priority shortcut (`!high`)
//! 2. category shortcut (`#work`)
//! 3. time expression (`5pm`)
//! 4. date expression (`tomorrow`)
//! 5. title cleanup
//!
//! Shortcuts go first so that a tag such as `#col2` can never be read as part
//! of a time or date. Parsing is total: any input yields a task.

use super::patterns::{CATEGORY_RULES, DATE_PATTERNS, PRIORITY_RULES, Shortcut, TIME_PATTERNS};
use super::task::{
    Category, PLACEHOLDER_TITLE, ParsedTask, Priority, TaskDraft, local_date_today,
};
use chrono::{NaiveDate, NaiveTime};
use std::ops::Range;
use tracing::{debug, trace};

/// Options for a single parse
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// The date relative expressions ("today", "in 3 days") resolve against.
    /// Defaults to the local calendar date.
    pub reference_date: Option<NaiveDate>,
}

/// Parse quick-capture text relative to the local date
///
/// # Example
/// ```
/// use quick_capture::{Category, Priority, parse_task_input};
///
/// let task = parse_task_input("Submit report 5pm #work !high");
/// assert_eq!(task.title, "Submit report");
/// assert_eq!(task.priority, Priority::high);
/// assert_eq!(task.category, Category::Work);
/// assert_eq!(task.due_time.unwrap().to_string(), "17:00:00");
/// ```
pub fn parse_task_input(input: &str) -> ParsedTask {
    parse_task_input_with(input, &ParseOptions::default())
}

/// Parse quick-capture text with explicit options
pub fn parse_task_input_with(input: &str, options: &ParseOptions) -> ParsedTask {
    let today = options.reference_date.unwrap_or_else(local_date_today);
    parse_task_input_on(input, today)
}

/// Parse quick-capture text, resolving relative dates against `today`
pub fn parse_task_input_on(input: &str, today: NaiveDate) -> ParsedTask {
    let mut working = input.trim().to_string();

    let priority = extract_priority(&mut working).unwrap_or_default();
    let category = extract_category(&mut working).unwrap_or_default();
    let due_time = extract_time(&mut working);
    let due_date = extract_date(&mut working, today);

    trace!(residual = %working, "extraction finished");

    ParsedTask {
        title: clean_title(&working),
        due_date,
        due_time,
        priority,
        category,
    }
}

/// Parse for the live preview shown while typing
///
/// Returns `None` for blank input, where no preview is shown.
pub fn preview(input: &str) -> Option<ParsedTask> {
    preview_with(input, &ParseOptions::default())
}

/// [`preview`] with explicit options
pub fn preview_with(input: &str, options: &ParseOptions) -> Option<ParsedTask> {
    if input.trim().is_empty() {
        return None;
    }
    Some(parse_task_input_with(input, options))
}

/// Parse submitted text into a draft for the task store
///
/// Returns `None` for blank input, where the submission is ignored.
pub fn capture(input: &str) -> Option<TaskDraft> {
    capture_with(input, &ParseOptions::default())
}

/// [`capture`] with explicit options
pub fn capture_with(input: &str, options: &ParseOptions) -> Option<TaskDraft> {
    preview_with(input, options).map(ParsedTask::into_draft)
}

fn extract_priority(working: &mut String) -> Option<Priority> {
    let (range, rule) = first_shortcut(PRIORITY_RULES.as_slice(), working)?;
    debug!(token = rule.token, priority = %rule.value, "priority shortcut matched");
    consume(working, range);
    Some(rule.value)
}

fn extract_category(working: &mut String) -> Option<Category> {
    let (range, rule) = first_shortcut(CATEGORY_RULES.as_slice(), working)?;
    debug!(token = rule.token, category = %rule.value, "category shortcut matched");
    consume(working, range);
    Some(rule.value)
}

fn extract_time(working: &mut String) -> Option<NaiveTime> {
    let (range, time, form) = TIME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(working.as_str()).map(|(r, t)| (r, t, pattern.form)))?;
    debug!(?form, %time, matched = &working[range.clone()], "time expression matched");
    consume(working, range);
    Some(time)
}

fn extract_date(working: &mut String, today: NaiveDate) -> Option<NaiveDate> {
    let (range, date, form) = DATE_PATTERNS.iter().find_map(|pattern| {
        pattern
            .find(working.as_str(), today)
            .map(|(r, d)| (r, d, pattern.form))
    })?;
    debug!(?form, %date, matched = &working[range.clone()], "date expression matched");
    consume(working, range);
    Some(date)
}

/// Walk a shortcut table in order and return the first entry found anywhere in `text`
fn first_shortcut<'a, T: Copy>(
    rules: &'a [Shortcut<T>],
    text: &str,
) -> Option<(Range<usize>, &'a Shortcut<T>)> {
    rules
        .iter()
        .find_map(|rule| rule.find(text).map(|range| (range, rule)))
}

/// Remove a matched range and trim what is left
fn consume(working: &mut String, range: Range<usize>) {
    working.replace_range(range, "");
    *working = working.trim().to_string();
}

/// Collapse whitespace runs and fall back to the placeholder title
fn clean_title(residual: &str) -> String {
    let title = residual.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("  Buy   milk \t now "), "Buy milk now");
        assert_eq!(clean_title(" \t "), PLACEHOLDER_TITLE);
        assert_eq!(clean_title(""), PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_consume_trims() {
        let mut text = "!high Buy milk".to_string();
        consume(&mut text, 0..5);
        assert_eq!(text, "Buy milk");
    }

    #[test]
    fn test_priority_table_order_wins() {
        // "!low" is listed before "!high", so it wins even though it appears later
        let mut text = "x !high y !low".to_string();
        assert_eq!(extract_priority(&mut text), Some(Priority::low));
        assert_eq!(text, "x !high y");
    }

    #[test]
    fn test_category_substring_inside_word() {
        let mut text = "report#workflow".to_string();
        assert_eq!(extract_category(&mut text), Some(Category::Work));
        assert_eq!(text, "reportflow");
    }

    #[test]
    fn test_preview_blank_input() {
        assert!(preview_with("   ", &ParseOptions::default()).is_none());
        assert!(capture_with("", &ParseOptions::default()).is_none());
    }

    #[test]
    fn test_options_reference_date() {
        let options = ParseOptions {
            reference_date: Some(today()),
        };
        let task = parse_task_input_with("water plants today", &options);
        assert_eq!(task.due_date, Some(today()));
        assert_eq!(task.title, "water plants");
    }
}
