//! phplex_lexer: Tokenizer for source text mixing literal markup with
//! embedded script regions.
//!
//! The lexer starts in markup mode, where everything up to an opening tag
//! (`<?php`, `<?=`, `<?`) is emitted as [`TokenKind::InlineHtml`]. An
//! opening tag switches to script mode, where code is split into keywords,
//! operators, literals, whitespace and comments until a closing tag (`?>`)
//! switches back.
//!
//! At each offset every rule valid in the active mode is tried; the longest
//! match wins and equal lengths are broken by rule priority. Nothing is
//! dropped: whitespace and comments are tokens too, so the token texts
//! concatenate back to the input. A character no rule accepts is reported
//! as a diagnostic and skipped.
//!
//! ```
//! use phplex_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("Hi <?php echo 1; ?>").map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::InlineHtml);
//! assert_eq!(kinds[1], TokenKind::OpenTag);
//! assert_eq!(kinds[2], TokenKind::EchoKeyword);
//! ```

mod error;
mod keywords;
mod lexer;
mod mode;
mod rules;
mod token;
mod token_kind;

pub use error::LexerError;
pub use keywords::ReservedWords;
pub use lexer::{default_lexer, tokenize, LexOutput, Lexer, Tokens};
pub use mode::{Mode, ModeSet};
pub use rules::{Action, Priority, Recognizer, Rule, RuleClass, RuleEntry, RuleTable};
pub use token::{reconstruct, Token};
pub use token_kind::TokenKind;

pub use phplex_options::LexerOptions;
