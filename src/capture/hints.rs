/// Syntax descriptions shown next to the quick-capture input
const PARSING_HINTS: [&str; 4] = [
    r#"Dates: "today", "tomorrow", "next week", "in 3 days", "12/25", "Jan 15""#,
    r#"Times: "10pm", "2:30pm", "14:00""#,
    r#"Priority: "!high", "!medium", "!low""#,
    r##"Category: "#work", "#personal", "#college", "#health", "#finance", "#shopping", "#travel""##,
];

/// Get the supported syntax, one line per pattern family
///
/// Order is fixed: dates, times, priority, category.
pub fn parsing_hints() -> &'static [&'static str] {
    &PARSING_HINTS
}
