//! Errors raised while building a lexer.
//!
//! Scanning itself never fails: unrecognized characters are reported as
//! diagnostics and skipped.

/// A lexer could not be constructed.
#[derive(Debug, thiserror::Error)]
pub enum LexerError {
    #[error("rule `{rule}` has an invalid pattern: {source}")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}
