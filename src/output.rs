//! Output formatting for tree responses.
//!
//! Provides functions to format a [`TreeResponse`] as JSON (the same shape the
//! HTTP endpoint returns) or as a plain-text tree.

use crate::tree::render_tree;
use crate::TreeResponse;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Tree,
}

/// Formats the response into a string.
pub fn format_response(
    response: &TreeResponse,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => format_json(response, pretty),
        OutputFormat::Tree => Ok(format_tree(response)),
    }
}

fn format_json(response: &TreeResponse, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
}

fn format_tree(response: &TreeResponse) -> String {
    match response {
        TreeResponse::Node(node) => render_tree(node),
        TreeResponse::Error { error } => format!("Error: {}", error),
    }
}
