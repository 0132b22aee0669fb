//! Capture handler for the quick-capture MCP server

use crate::QuickCaptureHandler;
use crate::capture;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl QuickCaptureHandler {
    /// Parses submitted text into a pending task draft, returned as JSON for the task store.
    pub async fn handle_capture_task(
        &self,
        input: String,
        today: Option<String>,
    ) -> McpResult<String> {
        let options = self.parse_options(today.as_deref())?;

        let Some(draft) = capture::capture_with(&input, &options) else {
            bail_public!(
                _,
                "Nothing to capture: input is empty. Type a task such as \"Submit report tomorrow 5pm #work !high\"."
            );
        };
        info!(title = %draft.title, priority = %draft.priority, category = %draft.category, "task captured");

        match formatting::to_json(&draft) {
            Ok(json) => Ok(json),
            Err(e) => {
                bail_public!(_, "Failed to render: {}", e);
            }
        }
    }
}
