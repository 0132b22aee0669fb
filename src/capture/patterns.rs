//! Pattern library for quick-capture parsing
//!
//! Every table here is immutable, compiled once on first use, and ordered:
//! callers walk a table front to back and stop at the first entry that
//! produces a value.

use super::calendar::{self, Meridiem};
use super::task::{Category, Priority};
use chrono::{Datelike, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

/// Priority shortcut tokens in lookup order
pub const PRIORITY_SHORTCUTS: &[(&str, Priority)] = &[
    ("!low", Priority::low),
    ("!l", Priority::low),
    ("!medium", Priority::medium),
    ("!med", Priority::medium),
    ("!m", Priority::medium),
    ("!high", Priority::high),
    ("!h", Priority::high),
];

/// Category shortcut tokens in lookup order
///
/// Several tokens alias the same category. Longer tokens come before their
/// own prefixes so "#health" is not consumed as "#h" + "ealth".
pub const CATEGORY_SHORTCUTS: &[(&str, Category)] = &[
    ("#general", Category::General),
    ("#gen", Category::General),
    ("#work", Category::Work),
    ("#w", Category::Work),
    ("#personal", Category::Personal),
    ("#p", Category::Personal),
    ("#college", Category::College),
    ("#col", Category::College),
    ("#school", Category::College),
    ("#health", Category::Health),
    ("#h", Category::Health),
    ("#finance", Category::Finance),
    ("#fin", Category::Finance),
    ("#money", Category::Finance),
    ("#shopping", Category::Shopping),
    ("#shop", Category::Shopping),
    ("#travel", Category::Travel),
    ("#trip", Category::Travel),
];

/// Month abbreviations, index 0 is January
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A shortcut token compiled to a case-insensitive matcher
pub struct Shortcut<T> {
    pub token: &'static str,
    pub value: T,
    regex: Regex,
}

impl<T: Copy> Shortcut<T> {
    /// Byte range of the first occurrence of this shortcut in `text`
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.regex.find(text).map(|m| m.range())
    }
}

/// Priority shortcuts must end on a word boundary: "!h" never fires on "!home"
pub static PRIORITY_RULES: Lazy<Vec<Shortcut<Priority>>> = Lazy::new(|| {
    PRIORITY_SHORTCUTS
        .iter()
        .map(|&(token, value)| Shortcut {
            token,
            value,
            regex: compile(&format!(r"(?i){}\b", regex::escape(token))),
        })
        .collect()
});

/// Category shortcuts match as plain substrings anywhere in the text
pub static CATEGORY_RULES: Lazy<Vec<Shortcut<Category>>> = Lazy::new(|| {
    CATEGORY_SHORTCUTS
        .iter()
        .map(|&(token, value)| Shortcut {
            token,
            value,
            regex: compile(&format!("(?i){}", regex::escape(token))),
        })
        .collect()
});

/// Recognized shapes of a time expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeForm {
    /// "2:30pm", "10:15 AM"
    ClockWithMeridiem,
    /// "5pm", "9 am"
    HourWithMeridiem,
    /// "14:30"
    TwentyFourHour,
}

impl TimeForm {
    fn normalize(self, caps: &Captures<'_>) -> Option<NaiveTime> {
        let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
        match self {
            TimeForm::ClockWithMeridiem => {
                let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
                let meridiem = Meridiem::parse(caps.get(3)?.as_str())?;
                calendar::clock_time(hour, minute, Some(meridiem))
            }
            TimeForm::HourWithMeridiem => {
                let meridiem = Meridiem::parse(caps.get(2)?.as_str())?;
                calendar::clock_time(hour, 0, Some(meridiem))
            }
            TimeForm::TwentyFourHour => {
                let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
                calendar::clock_time(hour, minute, None)
            }
        }
    }
}

/// Recognized shapes of a date expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    Today,
    Tomorrow,
    /// "in 3 days", "in 1 day"
    InDays,
    /// Always seven days ahead, regardless of weekday
    NextWeek,
    /// "12/25", "1/5/26", "3/14/2027"
    Numeric,
    /// "Jan 15", "March 3, 2026"
    MonthName,
}

impl DateForm {
    fn normalize(self, caps: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateForm::Today => Some(today),
            DateForm::Tomorrow => calendar::days_after(today, 1),
            DateForm::InDays => {
                let days: u64 = caps.get(1)?.as_str().parse().ok()?;
                calendar::days_after(today, days)
            }
            DateForm::NextWeek => calendar::days_after(today, 7),
            DateForm::Numeric => {
                let month: i64 = caps.get(1)?.as_str().parse().ok()?;
                let day: i64 = caps.get(2)?.as_str().parse().ok()?;
                let year = match caps.get(3) {
                    Some(y) => calendar::expand_year(y.as_str())?,
                    None => today.year(),
                };
                calendar::rollover_date(year, month, day)
            }
            DateForm::MonthName => {
                let abbreviation = caps.get(1)?.as_str().to_lowercase();
                let index = MONTH_ABBREVIATIONS
                    .iter()
                    .position(|m| *m == abbreviation)?;
                let day: i64 = caps.get(2)?.as_str().parse().ok()?;
                let year = match caps.get(3) {
                    Some(y) => y.as_str().parse().ok()?,
                    None => today.year(),
                };
                calendar::rollover_date(year, index as i64 + 1, day)
            }
        }
    }
}

/// A time expression matcher paired with its normalizer
pub struct TimePattern {
    pub form: TimeForm,
    regex: Regex,
}

impl TimePattern {
    /// Match this pattern once against `text` and normalize the result
    ///
    /// Only the leftmost occurrence is considered. A match whose components are out
    /// of range (e.g. "13pm") yields `None`.
    pub fn find(&self, text: &str) -> Option<(Range<usize>, NaiveTime)> {
        let caps = self.regex.captures(text)?;
        let whole = caps.get(0)?;
        let time = self.form.normalize(&caps)?;
        Some((whole.range(), time))
    }
}

/// A date expression matcher paired with its normalizer
pub struct DatePattern {
    pub form: DateForm,
    regex: Regex,
}

impl DatePattern {
    /// Match this pattern once against `text` and resolve it against `today`
    pub fn find(&self, text: &str, today: NaiveDate) -> Option<(Range<usize>, NaiveDate)> {
        let caps = self.regex.captures(text)?;
        let whole = caps.get(0)?;
        let date = self.form.normalize(&caps, today)?;
        Some((whole.range(), date))
    }
}

/// Time expressions in precedence order
pub static TIME_PATTERNS: Lazy<Vec<TimePattern>> = Lazy::new(|| {
    [
        (
            TimeForm::ClockWithMeridiem,
            r"(?i)([0-9]{1,2}):([0-9]{2})\s*(am|pm)",
        ),
        (TimeForm::HourWithMeridiem, r"(?i)([0-9]{1,2})\s*(am|pm)"),
        (TimeForm::TwentyFourHour, r"([0-9]{1,2}):([0-9]{2})"),
    ]
    .into_iter()
    .map(|(form, pattern)| TimePattern {
        form,
        regex: compile(pattern),
    })
    .collect()
});

/// Date expressions in precedence order
pub static DATE_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(|| {
    [
        (DateForm::Today, r"(?i)\btoday\b"),
        (DateForm::Tomorrow, r"(?i)\btomorrow\b"),
        (DateForm::InDays, r"(?i)\bin\s+([0-9]+)\s+days?\b"),
        (DateForm::NextWeek, r"(?i)\bnext\s+week\b"),
        (
            DateForm::Numeric,
            r"\b([0-9]{1,2})/([0-9]{1,2})(?:/([0-9]{2,4}))?\b",
        ),
        (
            DateForm::MonthName,
            r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+([0-9]{1,2})(?:,?\s*([0-9]{4}))?\b",
        ),
    ]
    .into_iter()
    .map(|(form, pattern)| DatePattern {
        form,
        regex: compile(pattern),
    })
    .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern should compile")
}
