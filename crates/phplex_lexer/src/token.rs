//! Tokens produced by the lexer.

use crate::token_kind::TokenKind;
use phplex_core::text::{TextPos, TextSpan};
use std::fmt;

/// A single lexical token.
///
/// `text` is the exact matched slice of the input, so concatenating the
/// text of every token in order reproduces the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched lexeme, byte-for-byte.
    pub text: &'src str,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Byte span in the input.
    pub span: TextSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, line: u32, span: TextSpan) -> Self {
        debug_assert_eq!(text.len(), span.len() as usize);
        Self {
            kind,
            text,
            line,
            span,
        }
    }

    /// Start offset in the input.
    #[inline]
    pub fn start(&self) -> TextPos {
        self.span.start
    }

    /// End offset in the input (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.span.end
    }

    /// The length of this token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Tokens are never empty; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether this token is whitespace or a comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Number of newlines inside the lexeme.
    pub fn newline_count(&self) -> u32 {
        memchr::memchr_iter(b'\n', self.text.as_bytes()).count() as u32
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:?}", self.line, self.kind, self.text)
    }
}

/// Concatenate token texts in order.
pub fn reconstruct<'a, 'src: 'a>(tokens: impl IntoIterator<Item = &'a Token<'src>>) -> String {
    tokens.into_iter().map(|token| token.text).collect()
}
