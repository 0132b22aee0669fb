//! Parse handler for the quick-capture MCP server

use crate::QuickCaptureHandler;
use crate::capture;
use crate::formatting::{self, OutputFormat};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::debug;

impl QuickCaptureHandler {
    /// Parses text without capturing it - the live preview.
    ///
    /// Blank input has no preview and is reported as such rather than as an error.
    pub async fn handle_parse_task(
        &self,
        input: String,
        today: Option<String>,
        format: Option<String>,
    ) -> McpResult<String> {
        // Parse and validate output format
        let output_format = if let Some(ref format_str) = format {
            validation::parse_output_format(format_str)?
        } else {
            OutputFormat::text
        };

        let options = self.parse_options(today.as_deref())?;

        let Some(task) = capture::preview_with(&input, &options) else {
            return Ok("Nothing to preview".to_string());
        };
        debug!(title = %task.title, "parsed preview");

        match formatting::render_parsed(&task, output_format) {
            Ok(rendered) => Ok(rendered),
            Err(e) => {
                bail_public!(_, "Failed to render: {}", e);
            }
        }
    }
}
