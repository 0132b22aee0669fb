use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title used when nothing is left after all shortcuts and expressions are removed
pub const PLACEHOLDER_TITLE: &str = "Untitled Task";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task priority
///
/// Uses lowercase naming to match the wire format expected by the task store.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    low,
    /// Assigned when no priority shortcut is present
    #[default]
    medium,
    high,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::low => "low",
            Priority::medium => "medium",
            Priority::high => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

/// Task category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Assigned when no category shortcut is present
    #[default]
    General,
    Work,
    Personal,
    College,
    Health,
    Finance,
    Shopping,
    Travel,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Work,
        Category::Personal,
        Category::College,
        Category::Health,
        Category::Finance,
        Category::Shopping,
        Category::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::College => "College",
            Category::Health => "Health",
            Category::Finance => "Finance",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Valid options are: General, Work, Personal, College, Health, Finance, Shopping, Travel",
                    s
                )
            })
    }
}

/// Lifecycle status of a stored task
///
/// Quick capture always creates tasks as `pending`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    pending,
    completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::pending),
            "completed" => Ok(TaskStatus::completed),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: pending, completed",
                s
            )),
        }
    }
}

/// Structured result of parsing one line of quick-capture text
///
/// Every field is populated on every parse: absent dates and times are `None`,
/// priority and category fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Residual text after extraction (never empty)
    pub title: String,
    /// Due date (serialized as YYYY-MM-DD)
    pub due_date: Option<NaiveDate>,
    /// Due time (serialized as HH:MM:SS, 24-hour)
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
    pub category: Category,
}

impl Default for ParsedTask {
    fn default() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            due_date: None,
            due_time: None,
            priority: Priority::default(),
            category: Category::default(),
        }
    }
}

impl ParsedTask {
    /// Check if the title fell back to the placeholder
    pub fn has_placeholder_title(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }

    /// Convert into the record accepted by the task-creation interface
    ///
    /// Captured tasks start out `pending` and without a description.
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: self.title,
            description: None,
            due_date: self.due_date,
            due_time: self.due_time,
            priority: self.priority,
            category: self.category,
            status: TaskStatus::pending,
        }
    }
}

/// A task ready to be handed to the task store
///
/// Identifiers, ownership and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
    pub category: Category,
    pub status: TaskStatus,
}
