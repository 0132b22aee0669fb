//! Quick-capture domain models and parsing
//!
//! This module turns a line of free text into a structured task.
//! It is split into submodules:
//! - `task`: Parsed task record, priority, category and the draft handed to the task store
//! - `patterns`: Ordered shortcut, time and date tables
//! - `calendar`: Date rollover and meridiem conversion
//! - `parser`: The extraction pipeline
//! - `hints`: Syntax descriptions for help text

mod calendar;
mod hints;
mod parser;
mod patterns;
mod task;

// Re-export all public types
pub use calendar::{Meridiem, clock_time, rollover_date};
pub use hints::parsing_hints;
pub use parser::{
    ParseOptions, capture, capture_with, parse_task_input, parse_task_input_on,
    parse_task_input_with, preview, preview_with,
};
pub use patterns::{CATEGORY_SHORTCUTS, DateForm, PRIORITY_SHORTCUTS, TimeForm};
pub use task::{
    Category, PLACEHOLDER_TITLE, ParsedTask, Priority, TaskDraft, TaskStatus, local_date_today,
};
