//! Query parameters of `GET /api/tree`.

use serde::{Deserialize, Serialize};

use crate::config::TreeConfig;
use crate::options::{TreeBuilder, TreeOptions};

use super::error::ApiError;

/// Raw query parameters, kept as strings so parse failures map to a JSON 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeQuery {
    /// Root to traverse. Surrounding quotes are stripped.
    pub path: Option<String>,
    /// Maximum traversal depth.
    pub depth: Option<String>,
    /// `"true"` (any case) includes dotfiles.
    pub hidden: Option<String>,
}

impl TreeQuery {
    /// Converts the query into tree options, filling gaps from `config`.
    pub fn into_options(self, config: &TreeConfig) -> Result<TreeOptions, ApiError> {
        let path = match self.path {
            Some(raw) => strip_quotes(&raw).to_string(),
            None => config.default_path.clone(),
        };
        let depth = match self.depth {
            Some(raw) => parse_depth(&raw)?,
            None => config.default_depth,
        };
        let depth = config.max_depth_limit.map_or(depth, |limit| depth.min(limit));
        let show_hidden = self
            .hidden
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));

        Ok(TreeBuilder::new(path)
            .max_depth(depth)
            .show_hidden(show_hidden)
            .exclude_patterns(config.exclude_patterns.clone())
            .options())
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches(|c| c == '"' || c == '\'')
}

/// Negative depths expand nothing, the same as `0`. Integers too large for
/// `usize` saturate.
fn parse_depth(raw: &str) -> Result<usize, ApiError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidQuery(format!(
            "invalid depth '{}': expected an integer",
            raw
        )));
    }
    if negative {
        return Ok(0);
    }
    Ok(digits.parse().unwrap_or(usize::MAX))
}
