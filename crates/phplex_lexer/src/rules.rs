//! The rule table.
//!
//! Every rule is scoped to a set of modes and carries an explicit
//! [`Priority`]. At a given offset the lexer runs every rule valid in the
//! active mode, keeps the longest match, and breaks ties by priority:
//! action rules outrank simple rules, and within each class the lower rank
//! wins. Action rules are ranked in declaration order; simple rules are
//! ranked by descending pattern length, then declaration order.

use crate::error::LexerError;
use crate::mode::{Mode, ModeSet};
use crate::token_kind::TokenKind;
use phplex_options::LexerOptions;
use regex::Regex;

/// Whether a rule transforms its lexeme or maps it to a fixed kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleClass {
    Action,
    Simple,
}

/// Tie-break order between rules matching the same number of bytes.
/// Lower sorts first and wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub class: RuleClass,
    pub rank: u16,
}

/// How an action rule recognizes its lexeme.
#[derive(Debug, Clone)]
pub enum Recognizer {
    /// An anchored regular expression.
    Pattern(Regex),
    /// The longest run of text that does not start an opening tag.
    /// Holds the anchored opening-tag pattern.
    MarkupRun(Regex),
    /// `//` or `#` up to and including a newline, or up to a closing tag.
    LineComment { asp_tags: bool },
}

impl Recognizer {
    /// Length in bytes of the match at the start of `rest`, if any.
    fn match_len(&self, rest: &str) -> Option<usize> {
        match self {
            Recognizer::Pattern(regex) => regex.find(rest).map(|m| m.end()),
            Recognizer::MarkupRun(open_tag) => Some(scan_markup_run(rest, open_tag)),
            Recognizer::LineComment { asp_tags } => scan_line_comment(rest, *asp_tags),
        }
    }
}

/// What an action rule does with its lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit a fixed kind.
    Emit(TokenKind),
    /// Emit an open tag (or its echo variant) and enter script mode.
    OpenTag,
    /// Emit a close tag and return to markup mode.
    CloseTag,
    /// Classify against the reserved-word table.
    Identifier,
}

impl Action {
    /// The mode this action switches to, if any.
    pub fn transition(self) -> Option<Mode> {
        match self {
            Action::OpenTag => Some(Mode::Script),
            Action::CloseTag => Some(Mode::Markup),
            Action::Emit(_) | Action::Identifier => None,
        }
    }
}

/// A rule in one of its two shapes.
#[derive(Debug, Clone)]
pub enum Rule {
    Simple { kind: TokenKind, pattern: Regex },
    Action { recognizer: Recognizer, action: Action },
}

/// A scoped, prioritized rule.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub name: &'static str,
    pub scope: ModeSet,
    pub priority: Priority,
    pub rule: Rule,
}

impl RuleEntry {
    /// Length of a non-empty match at the start of `rest`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match &self.rule {
            Rule::Simple { pattern, .. } => pattern.find(rest).map(|m| m.end()),
            Rule::Action { recognizer, .. } => recognizer.match_len(rest),
        };
        len.filter(|&n| n > 0)
    }
}

/// Operator and delimiter patterns, in declaration order.
const SYMBOLS: &[(&str, TokenKind)] = &[
    (r"\+", TokenKind::PlusToken),
    (r"-", TokenKind::MinusToken),
    (r"\*", TokenKind::AsteriskToken),
    (r"/", TokenKind::SlashToken),
    (r"%", TokenKind::PercentToken),
    (r"&", TokenKind::AmpersandToken),
    (r"\|", TokenKind::BarToken),
    (r"~", TokenKind::TildeToken),
    (r"\^", TokenKind::CaretToken),
    (r"<<", TokenKind::LessThanLessThanToken),
    (r">>", TokenKind::GreaterThanGreaterThanToken),
    (r"&&", TokenKind::AmpersandAmpersandToken),
    (r"\|\|", TokenKind::BarBarToken),
    (r"!", TokenKind::ExclamationToken),
    (r"<", TokenKind::LessThanToken),
    (r">", TokenKind::GreaterThanToken),
    (r"<=", TokenKind::LessThanEqualsToken),
    (r">=", TokenKind::GreaterThanEqualsToken),
    (r"==", TokenKind::EqualsEqualsToken),
    (r"!=|<>", TokenKind::ExclamationEqualsToken),
    (r"===", TokenKind::EqualsEqualsEqualsToken),
    (r"!==", TokenKind::ExclamationEqualsEqualsToken),
    (r"=", TokenKind::EqualsToken),
    (r"\*=", TokenKind::AsteriskEqualsToken),
    (r"/=", TokenKind::SlashEqualsToken),
    (r"%=", TokenKind::PercentEqualsToken),
    (r"\+=", TokenKind::PlusEqualsToken),
    (r"-=", TokenKind::MinusEqualsToken),
    (r"<<=", TokenKind::LessThanLessThanEqualsToken),
    (r">>=", TokenKind::GreaterThanGreaterThanEqualsToken),
    (r"&=", TokenKind::AmpersandEqualsToken),
    (r"\|=", TokenKind::BarEqualsToken),
    (r"\^=", TokenKind::CaretEqualsToken),
    (r"\.=", TokenKind::DotEqualsToken),
    (r"\+\+", TokenKind::PlusPlusToken),
    (r"--", TokenKind::MinusMinusToken),
    (r"->", TokenKind::MinusGreaterThanToken),
    (r"=>", TokenKind::EqualsGreaterThanToken),
    (r"::", TokenKind::ColonColonToken),
    (r"\(", TokenKind::OpenParenToken),
    (r"\)", TokenKind::CloseParenToken),
    (r"\[", TokenKind::OpenBracketToken),
    (r"\]", TokenKind::CloseBracketToken),
    (r"\{", TokenKind::OpenBraceToken),
    (r"\}", TokenKind::CloseBraceToken),
    (r",", TokenKind::CommaToken),
    (r"\.", TokenKind::DotToken),
    (r"\?", TokenKind::QuestionToken),
    (r":", TokenKind::ColonToken),
    (r";", TokenKind::SemicolonToken),
    (r"@", TokenKind::AtToken),
];

const WHITESPACE: &str = r"[ \t\r\n]+";
// Like the block comment, but `/**` must be followed by whitespace, so `/**/` stays a block comment.
const DOC_COMMENT: &str = r"/\*\*[ \t\r\n](?s:.)*?\*/";
const BLOCK_COMMENT: &str = r"/\*(?s:.)*?\*/";
const IDENTIFIER: &str = r"[A-Za-z_][A-Za-z0-9_]*";
const VARIABLE: &str = r"\$[A-Za-z_][A-Za-z0-9_]*";
const INTEGER: &str = r"0[xX][0-9a-fA-F]+|0[bB][01]+|[0-9]+(?:[uU][lL]?|[lL][uU]?)?";
const FLOAT: &str = r"(?:[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+)[lLfF]?";
const STRING: &str = r#""(?:[^\\\n]|\\.)*?"|'(?:[^\\\n]|\\.)*?'"#;

/// Build the opening-tag pattern source for the given options.
fn open_tag_source(options: &LexerOptions) -> String {
    let mut heads = vec![if options.short_open_tag {
        r"<\?(?:php|=)?"
    } else {
        r"<\?(?:php|=)"
    }];
    if options.asp_tags {
        heads.push(r"<%(?:php|=)?");
    }
    format!(r"(?:{})[ \t\r]*\n?", heads.join("|"))
}

/// Trailing horizontal whitespace is only absorbed together with a newline,
/// so `?> Bye` leaves ` Bye` to the markup.
fn close_tag_source(options: &LexerOptions) -> &'static str {
    if options.asp_tags {
        r"[?%]>(?:[ \t\r]*\n)?"
    } else {
        r"\?>(?:[ \t\r]*\n)?"
    }
}

/// Compile a pattern so it only matches at the start of the haystack.
fn anchored(rule: &'static str, source: &str) -> Result<Regex, LexerError> {
    Regex::new(&format!("^(?:{source})")).map_err(|source| LexerError::InvalidPattern { rule, source })
}

fn scan_markup_run(rest: &str, open_tag: &Regex) -> usize {
    let bytes = rest.as_bytes();
    let mut pos = 0;
    while let Some(found) = memchr::memchr(b'<', &bytes[pos..]) {
        let at = pos + found;
        if open_tag.is_match(&rest[at..]) {
            return at;
        }
        pos = at + 1;
    }
    rest.len()
}

fn scan_line_comment(rest: &str, asp_tags: bool) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut pos = if bytes.starts_with(b"//") {
        2
    } else if bytes.starts_with(b"#") {
        1
    } else {
        return None;
    };
    while let Some(found) = memchr::memchr3(b'\n', b'?', b'%', &bytes[pos..]) {
        let at = pos + found;
        match bytes[at] {
            b'\n' => return Some(at + 1),
            b'?' if bytes.get(at + 1) == Some(&b'>') => return Some(at),
            b'%' if asp_tags && bytes.get(at + 1) == Some(&b'>') => return Some(at),
            _ => pos = at + 1,
        }
    }
    // Unterminated at end of input.
    None
}

/// The ordered catalog of rules for one set of options.
#[derive(Debug, Clone)]
pub struct RuleTable {
    /// Sorted by priority, highest first.
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    pub fn new(options: &LexerOptions) -> Result<Self, LexerError> {
        let open_tag = anchored("open_tag", &open_tag_source(options))?;

        let actions: Vec<(&'static str, ModeSet, Recognizer, Action)> = vec![
            (
                "whitespace",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("whitespace", WHITESPACE)?),
                Action::Emit(TokenKind::WhitespaceTrivia),
            ),
            (
                "doc_comment",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("doc_comment", DOC_COMMENT)?),
                Action::Emit(TokenKind::DocCommentTrivia),
            ),
            (
                "block_comment",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("block_comment", BLOCK_COMMENT)?),
                Action::Emit(TokenKind::MultiLineCommentTrivia),
            ),
            (
                "line_comment",
                ModeSet::SCRIPT,
                Recognizer::LineComment {
                    asp_tags: options.asp_tags,
                },
                Action::Emit(TokenKind::SingleLineCommentTrivia),
            ),
            (
                "open_tag",
                ModeSet::MARKUP,
                Recognizer::Pattern(open_tag.clone()),
                Action::OpenTag,
            ),
            (
                "close_tag",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("close_tag", close_tag_source(options))?),
                Action::CloseTag,
            ),
            (
                "inline_html",
                ModeSet::MARKUP,
                Recognizer::MarkupRun(open_tag),
                Action::Emit(TokenKind::InlineHtml),
            ),
            (
                "identifier",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("identifier", IDENTIFIER)?),
                Action::Identifier,
            ),
            (
                "variable",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("variable", VARIABLE)?),
                Action::Emit(TokenKind::Variable),
            ),
            (
                "integer",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("integer", INTEGER)?),
                Action::Emit(TokenKind::IntegerLiteral),
            ),
            (
                "float",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("float", FLOAT)?),
                Action::Emit(TokenKind::FloatLiteral),
            ),
            (
                "string",
                ModeSet::SCRIPT,
                Recognizer::Pattern(anchored("string", STRING)?),
                Action::Emit(TokenKind::StringLiteral),
            ),
        ];

        let mut entries = Vec::with_capacity(actions.len() + SYMBOLS.len());
        for (rank, (name, scope, recognizer, action)) in actions.into_iter().enumerate() {
            entries.push(RuleEntry {
                name,
                scope,
                priority: Priority {
                    class: RuleClass::Action,
                    rank: rank as u16,
                },
                rule: Rule::Action { recognizer, action },
            });
        }

        let mut symbols: Vec<(usize, &(&str, TokenKind))> = SYMBOLS.iter().enumerate().collect();
        symbols.sort_by_key(|&(index, (source, _))| (std::cmp::Reverse(source.len()), index));
        for (rank, (_, &(source, kind))) in symbols.into_iter().enumerate() {
            entries.push(RuleEntry {
                name: "symbol",
                scope: ModeSet::SCRIPT,
                priority: Priority {
                    class: RuleClass::Simple,
                    rank: rank as u16,
                },
                rule: Rule::Simple {
                    kind,
                    pattern: anchored("symbol", source)?,
                },
            });
        }

        entries.sort_by_key(|entry| entry.priority);
        Ok(Self { entries })
    }

    /// All rules, highest priority first.
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Rules valid in `mode`, highest priority first.
    pub fn active(&self, mode: Mode) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter().filter(move |entry| entry.scope.includes(mode))
    }
}
