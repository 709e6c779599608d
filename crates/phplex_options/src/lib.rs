//! phplex_options: Lexer configuration.
//!
//! Options decide which escape sequences switch between markup and script
//! mode. They can be built in code or loaded from a JSON document such as
//! `{ "shortOpenTag": false, "aspTags": false }`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling the tag grammar recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexerOptions {
    /// Accept a bare `<?` as an opening tag.
    ///
    /// When disabled only `<?php` and `<?=` open script mode.
    pub short_open_tag: bool,
    /// Accept `<%` opening tags and `%>` closing tags.
    pub asp_tags: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            short_open_tag: true,
            asp_tags: true,
        }
    }
}

impl LexerOptions {
    /// Builder-style setter for [`LexerOptions::short_open_tag`].
    pub fn with_short_open_tag(mut self, enabled: bool) -> Self {
        self.short_open_tag = enabled;
        self
    }

    /// Builder-style setter for [`LexerOptions::asp_tags`].
    pub fn with_asp_tags(mut self, enabled: bool) -> Self {
        self.asp_tags = enabled;
        self
    }
}

/// Errors raised while loading options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid options document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse lexer options from a JSON string. Missing keys take their defaults.
pub fn parse_options(content: &str) -> Result<LexerOptions, OptionsError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse lexer options from a JSON file.
pub fn parse_options_file(path: impl AsRef<Path>) -> Result<LexerOptions, OptionsError> {
    let content = std::fs::read_to_string(path)?;
    parse_options(&content)
}
