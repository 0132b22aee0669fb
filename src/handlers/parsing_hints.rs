//! Parsing hints handler for the quick-capture MCP server

use crate::QuickCaptureHandler;
use crate::capture;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl QuickCaptureHandler {
    /// Lists the supported quick-capture syntax, one bullet per pattern family.
    pub async fn handle_parsing_hints(&self) -> McpResult<String> {
        Ok(formatting::format_hints(capture::parsing_hints()))
    }
}
