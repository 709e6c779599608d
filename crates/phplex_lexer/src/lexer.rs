//! The lexing engine.
//!
//! A [`Lexer`] owns only immutable tables and can be shared across threads.
//! Each call to [`Lexer::tokenize`] starts an independent session with its
//! own scan state, exposed as a lazy, single-pass token iterator.

use crate::error::LexerError;
use crate::keywords::ReservedWords;
use crate::mode::Mode;
use crate::rules::{Action, Rule, RuleEntry, RuleTable};
use crate::token::{reconstruct, Token};
use crate::token_kind::TokenKind;
use phplex_core::text::TextSpan;
use phplex_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use phplex_options::LexerOptions;
use rayon::prelude::*;
use std::iter::FusedIterator;
use std::sync::OnceLock;

/// A configured lexer. Construct once, tokenize any number of inputs.
#[derive(Debug, Clone)]
pub struct Lexer {
    options: LexerOptions,
    rules: RuleTable,
    reserved: &'static ReservedWords,
}

impl Lexer {
    /// Create a lexer for the given options.
    pub fn new(options: LexerOptions) -> Result<Self, LexerError> {
        Ok(Self {
            options,
            rules: RuleTable::new(&options)?,
            reserved: ReservedWords::get(),
        })
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Start a lexing session over `input`.
    pub fn tokenize<'l, 'src>(&'l self, input: &'src str) -> Tokens<'l, 'src> {
        tracing::trace!(len = input.len(), "starting lexing session");
        Tokens {
            lexer: self,
            state: ScanState::new(input),
            diagnostics: DiagnosticCollection::new(),
            finished: false,
        }
    }

    /// Lex `input` completely.
    pub fn lex<'src>(&self, input: &'src str) -> LexOutput<'src> {
        self.tokenize(input).into_output()
    }

    /// Lex independent inputs in parallel. Results keep the input order.
    pub fn lex_many<'src, S>(&self, inputs: &'src [S]) -> Vec<LexOutput<'src>>
    where
        S: AsRef<str> + Sync,
    {
        inputs.par_iter().map(|input| self.lex(input.as_ref())).collect()
    }

    /// Pick the rule with the longest match at the start of `rest`.
    ///
    /// Rules are stored highest priority first, so keeping only strictly
    /// longer matches resolves equal lengths in favor of priority.
    fn select(&self, mode: Mode, rest: &str) -> Option<(&RuleEntry, usize)> {
        let mut best: Option<(&RuleEntry, usize)> = None;
        for entry in self.rules.active(mode) {
            if let Some(len) = entry.match_len(rest) {
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((entry, len));
                }
            }
        }
        best
    }

    /// Final kind of a lexeme matched by `entry`.
    fn resolve(&self, entry: &RuleEntry, lexeme: &str) -> TokenKind {
        match &entry.rule {
            Rule::Simple { kind, .. } => *kind,
            Rule::Action { action, .. } => match *action {
                Action::Emit(kind) => kind,
                Action::OpenTag => {
                    if lexeme.trim_end_matches([' ', '\t', '\r', '\n']).ends_with('=') {
                        TokenKind::OpenTagWithEcho
                    } else {
                        TokenKind::OpenTag
                    }
                }
                Action::CloseTag => TokenKind::CloseTag,
                Action::Identifier => self.reserved.classify(lexeme),
            },
        }
    }
}

/// The lazily built lexer with default options.
pub fn default_lexer() -> &'static Lexer {
    static DEFAULT: OnceLock<Lexer> = OnceLock::new();
    DEFAULT.get_or_init(|| Lexer::new(LexerOptions::default()).expect("built-in rule patterns compile"))
}

/// Tokenize `input` with the default lexer.
pub fn tokenize(input: &str) -> Tokens<'static, '_> {
    default_lexer().tokenize(input)
}

/// Mutable state of one lexing session. The offset only moves forward.
#[derive(Debug, Clone)]
struct ScanState<'src> {
    input: &'src str,
    offset: usize,
    line: u32,
    mode: Mode,
}

impl<'src> ScanState<'src> {
    fn new(input: &'src str) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            mode: Mode::Markup,
        }
    }

    fn rest(&self) -> &'src str {
        &self.input[self.offset..]
    }

    fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }
}

/// A lexing session: yields tokens on demand.
///
/// Unrecognized characters are skipped one at a time and recorded as
/// diagnostics; the iterator itself never fails.
#[derive(Debug)]
pub struct Tokens<'l, 'src> {
    lexer: &'l Lexer,
    state: ScanState<'src>,
    diagnostics: DiagnosticCollection,
    finished: bool,
}

impl<'l, 'src> Tokens<'l, 'src> {
    /// The currently active mode.
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// The line of the next unconsumed byte.
    pub fn line(&self) -> u32 {
        self.state.line
    }

    /// The next unconsumed byte offset.
    pub fn offset(&self) -> usize {
        self.state.offset
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Drain the remaining tokens.
    pub fn into_output(mut self) -> LexOutput<'src> {
        let tokens: Vec<Token<'src>> = self.by_ref().collect();
        LexOutput {
            tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn emit(&mut self, entry: &RuleEntry, len: usize) -> Token<'src> {
        let start = self.state.offset;
        let end = start + len;
        let text = &self.state.input[start..end];
        let kind = self.lexer.resolve(entry, text);
        let token = Token::new(kind, text, self.state.line, TextSpan::from_offsets(start, end));

        self.state.line += token.newline_count();
        self.state.offset = end;

        if let Rule::Action { action, .. } = &entry.rule {
            if let Some(mode) = action.transition() {
                tracing::debug!(
                    from = %self.state.mode,
                    to = %mode,
                    offset = end,
                    line = self.state.line,
                    "mode transition"
                );
                self.state.mode = mode;
            }
        }
        token
    }

    fn skip_illegal_character(&mut self, ch: char) {
        let start = self.state.offset;
        let end = start + ch.len_utf8();
        let line = self.state.line;
        tracing::warn!(ch = %ch.escape_debug(), offset = start, line, "illegal character");
        self.diagnostics.add(Diagnostic::new(
            TextSpan::from_offsets(start, end),
            line,
            &messages::ILLEGAL_CHARACTER,
            &[&format!("{ch:?}")],
        ));
        if ch == '\n' {
            self.state.line += 1;
        }
        self.state.offset = end;
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            if self.state.is_eof() {
                if !self.finished {
                    self.finished = true;
                    tracing::trace!(
                        lines = self.state.line,
                        errors = self.diagnostics.len(),
                        "lexing session finished"
                    );
                }
                return None;
            }
            let lexer = self.lexer;
            let rest = self.state.rest();
            if let Some((entry, len)) = lexer.select(self.state.mode, rest) {
                return Some(self.emit(entry, len));
            }
            let ch = rest.chars().next()?;
            self.skip_illegal_character(ch);
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// The complete result of lexing one input.
#[derive(Debug, Clone, Default)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: DiagnosticCollection,
}

impl<'src> LexOutput<'src> {
    /// Token kinds in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    /// Tokens that are neither whitespace nor comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }

    /// Concatenated token texts; equals the input when there were no diagnostics.
    pub fn reconstruct(&self) -> String {
        reconstruct(&self.tokens)
    }
}
