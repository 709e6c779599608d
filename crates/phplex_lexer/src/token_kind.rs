//! TokenKind enum - every kind of token the lexer can emit.

use crate::mode::Mode;

/// The kind of a lexical token.
///
/// Variants are grouped into contiguous ranges so the classification helpers
/// below are simple range checks. Keep new variants inside their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    // ========================================================================
    // Markup and tags
    // ========================================================================
    InlineHtml,
    OpenTag,
    OpenTagWithEcho,
    CloseTag,

    // Trivia
    WhitespaceTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    DocCommentTrivia,

    // Literals (lexical form only)
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,

    // Names
    Identifier,
    Variable,

    // ========================================================================
    // Punctuation
    // ========================================================================
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    OpenBraceToken,
    CloseBraceToken,
    CommaToken,
    DotToken,
    QuestionToken,
    ColonToken,
    ColonColonToken,
    SemicolonToken,
    AtToken,
    MinusGreaterThanToken,
    EqualsGreaterThanToken,

    // Operators
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    AmpersandToken,
    BarToken,
    TildeToken,
    CaretToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    AmpersandAmpersandToken,
    BarBarToken,
    ExclamationToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    /// `!=`, also spelled `<>`.
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    PlusPlusToken,
    MinusMinusToken,

    // Assignment
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    DotEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,

    // ========================================================================
    // Keywords
    // ========================================================================
    ArrayKeyword,
    AsKeyword,
    BreakKeyword,
    CaseKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DeclareKeyword,
    DefaultKeyword,
    DoKeyword,
    EchoKeyword,
    ElseKeyword,
    ElseIfKeyword,
    EmptyKeyword,
    EndDeclareKeyword,
    EndForKeyword,
    EndForeachKeyword,
    EndIfKeyword,
    EndSwitchKeyword,
    EndWhileKeyword,
    EvalKeyword,
    /// `exit`, also spelled `die`.
    ExitKeyword,
    ExtendsKeyword,
    ForKeyword,
    ForeachKeyword,
    FunctionKeyword,
    GlobalKeyword,
    IfKeyword,
    IncludeKeyword,
    IncludeOnceKeyword,
    InstanceOfKeyword,
    IssetKeyword,
    ListKeyword,
    NewKeyword,
    PrintKeyword,
    RequireKeyword,
    RequireOnceKeyword,
    ReturnKeyword,
    StaticKeyword,
    SwitchKeyword,
    UnsetKeyword,
    UseKeyword,
    VarKeyword,
    WhileKeyword,
    FinalKeyword,
    InterfaceKeyword,
    ImplementsKeyword,
    PublicKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    AbstractKeyword,
    CloneKeyword,
    TryKeyword,
    CatchKeyword,
    ThrowKeyword,
    /// Reserved, never produced by any construct of the language.
    CFunctionKeyword,
    /// Reserved, never produced by any construct of the language.
    OldFunctionKeyword,

    // Logical word operators, distinct from `&&`, `||` and `^`.
    AndKeyword,
    OrKeyword,
    XorKeyword,

    // Magic constants
    DirConstant,
    FileConstant,
    LineConstant,
    FunctionConstant,
    ClassConstant,
    MethodConstant,
    NamespaceConstant,
}

impl TokenKind {
    pub const FIRST_TRIVIA: TokenKind = TokenKind::WhitespaceTrivia;
    pub const LAST_TRIVIA: TokenKind = TokenKind::DocCommentTrivia;
    pub const FIRST_LITERAL: TokenKind = TokenKind::IntegerLiteral;
    pub const LAST_LITERAL: TokenKind = TokenKind::StringLiteral;
    pub const FIRST_PUNCTUATION: TokenKind = TokenKind::OpenParenToken;
    pub const LAST_PUNCTUATION: TokenKind = TokenKind::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: TokenKind = TokenKind::EqualsToken;
    pub const LAST_ASSIGNMENT: TokenKind = TokenKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::ArrayKeyword;
    pub const LAST_KEYWORD: TokenKind = TokenKind::XorKeyword;
    pub const FIRST_MAGIC_CONSTANT: TokenKind = TokenKind::DirConstant;
    pub const LAST_MAGIC_CONSTANT: TokenKind = TokenKind::NamespaceConstant;

    #[inline]
    fn in_range(self, first: TokenKind, last: TokenKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind is a keyword, including the word operators `and`/`or`/`xor`.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    #[inline]
    pub fn is_magic_constant(self) -> bool {
        self.in_range(Self::FIRST_MAGIC_CONSTANT, Self::LAST_MAGIC_CONSTANT)
    }

    /// Whether the classifier can produce this kind from an identifier lexeme.
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self.is_keyword() || self.is_magic_constant()
    }

    /// Whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self.in_range(Self::FIRST_TRIVIA, Self::LAST_TRIVIA)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self.in_range(Self::FIRST_LITERAL, Self::LAST_LITERAL)
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// The mode the lexer is in when it emits a token of this kind.
    ///
    /// Open tags are emitted from markup mode; the close tag is the last
    /// token emitted in script mode.
    pub fn mode(self) -> Mode {
        match self {
            TokenKind::InlineHtml | TokenKind::OpenTag | TokenKind::OpenTagWithEcho => Mode::Markup,
            _ => Mode::Script,
        }
    }

    /// Whether this kind only appears between an open tag and a close tag.
    pub fn is_script_only(self) -> bool {
        self.mode() == Mode::Script && self != TokenKind::CloseTag
    }

    /// Get the canonical (lowercase) spelling for a reserved-word kind, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::ArrayKeyword => Some("array"),
            TokenKind::AsKeyword => Some("as"),
            TokenKind::BreakKeyword => Some("break"),
            TokenKind::CaseKeyword => Some("case"),
            TokenKind::ClassKeyword => Some("class"),
            TokenKind::ConstKeyword => Some("const"),
            TokenKind::ContinueKeyword => Some("continue"),
            TokenKind::DeclareKeyword => Some("declare"),
            TokenKind::DefaultKeyword => Some("default"),
            TokenKind::DoKeyword => Some("do"),
            TokenKind::EchoKeyword => Some("echo"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::ElseIfKeyword => Some("elseif"),
            TokenKind::EmptyKeyword => Some("empty"),
            TokenKind::EndDeclareKeyword => Some("enddeclare"),
            TokenKind::EndForKeyword => Some("endfor"),
            TokenKind::EndForeachKeyword => Some("endforeach"),
            TokenKind::EndIfKeyword => Some("endif"),
            TokenKind::EndSwitchKeyword => Some("endswitch"),
            TokenKind::EndWhileKeyword => Some("endwhile"),
            TokenKind::EvalKeyword => Some("eval"),
            TokenKind::ExitKeyword => Some("exit"),
            TokenKind::ExtendsKeyword => Some("extends"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::ForeachKeyword => Some("foreach"),
            TokenKind::FunctionKeyword => Some("function"),
            TokenKind::GlobalKeyword => Some("global"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::IncludeKeyword => Some("include"),
            TokenKind::IncludeOnceKeyword => Some("include_once"),
            TokenKind::InstanceOfKeyword => Some("instanceof"),
            TokenKind::IssetKeyword => Some("isset"),
            TokenKind::ListKeyword => Some("list"),
            TokenKind::NewKeyword => Some("new"),
            TokenKind::PrintKeyword => Some("print"),
            TokenKind::RequireKeyword => Some("require"),
            TokenKind::RequireOnceKeyword => Some("require_once"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::StaticKeyword => Some("static"),
            TokenKind::SwitchKeyword => Some("switch"),
            TokenKind::UnsetKeyword => Some("unset"),
            TokenKind::UseKeyword => Some("use"),
            TokenKind::VarKeyword => Some("var"),
            TokenKind::WhileKeyword => Some("while"),
            TokenKind::FinalKeyword => Some("final"),
            TokenKind::InterfaceKeyword => Some("interface"),
            TokenKind::ImplementsKeyword => Some("implements"),
            TokenKind::PublicKeyword => Some("public"),
            TokenKind::PrivateKeyword => Some("private"),
            TokenKind::ProtectedKeyword => Some("protected"),
            TokenKind::AbstractKeyword => Some("abstract"),
            TokenKind::CloneKeyword => Some("clone"),
            TokenKind::TryKeyword => Some("try"),
            TokenKind::CatchKeyword => Some("catch"),
            TokenKind::ThrowKeyword => Some("throw"),
            TokenKind::CFunctionKeyword => Some("cfunction"),
            TokenKind::OldFunctionKeyword => Some("old_function"),
            TokenKind::AndKeyword => Some("and"),
            TokenKind::OrKeyword => Some("or"),
            TokenKind::XorKeyword => Some("xor"),
            TokenKind::DirConstant => Some("__DIR__"),
            TokenKind::FileConstant => Some("__FILE__"),
            TokenKind::LineConstant => Some("__LINE__"),
            TokenKind::FunctionConstant => Some("__FUNCTION__"),
            TokenKind::ClassConstant => Some("__CLASS__"),
            TokenKind::MethodConstant => Some("__METHOD__"),
            TokenKind::NamespaceConstant => Some("__NAMESPACE__"),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBracketToken => Some("["),
            TokenKind::CloseBracketToken => Some("]"),
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::CommaToken => Some(","),
            TokenKind::DotToken => Some("."),
            TokenKind::QuestionToken => Some("?"),
            TokenKind::ColonToken => Some(":"),
            TokenKind::ColonColonToken => Some("::"),
            TokenKind::SemicolonToken => Some(";"),
            TokenKind::AtToken => Some("@"),
            TokenKind::MinusGreaterThanToken => Some("->"),
            TokenKind::EqualsGreaterThanToken => Some("=>"),
            TokenKind::PlusToken => Some("+"),
            TokenKind::MinusToken => Some("-"),
            TokenKind::AsteriskToken => Some("*"),
            TokenKind::SlashToken => Some("/"),
            TokenKind::PercentToken => Some("%"),
            TokenKind::AmpersandToken => Some("&"),
            TokenKind::BarToken => Some("|"),
            TokenKind::TildeToken => Some("~"),
            TokenKind::CaretToken => Some("^"),
            TokenKind::LessThanLessThanToken => Some("<<"),
            TokenKind::GreaterThanGreaterThanToken => Some(">>"),
            TokenKind::AmpersandAmpersandToken => Some("&&"),
            TokenKind::BarBarToken => Some("||"),
            TokenKind::ExclamationToken => Some("!"),
            TokenKind::LessThanToken => Some("<"),
            TokenKind::GreaterThanToken => Some(">"),
            TokenKind::LessThanEqualsToken => Some("<="),
            TokenKind::GreaterThanEqualsToken => Some(">="),
            TokenKind::EqualsEqualsToken => Some("=="),
            TokenKind::ExclamationEqualsToken => Some("!="),
            TokenKind::EqualsEqualsEqualsToken => Some("==="),
            TokenKind::ExclamationEqualsEqualsToken => Some("!=="),
            TokenKind::PlusPlusToken => Some("++"),
            TokenKind::MinusMinusToken => Some("--"),
            TokenKind::EqualsToken => Some("="),
            TokenKind::PlusEqualsToken => Some("+="),
            TokenKind::MinusEqualsToken => Some("-="),
            TokenKind::AsteriskEqualsToken => Some("*="),
            TokenKind::SlashEqualsToken => Some("/="),
            TokenKind::PercentEqualsToken => Some("%="),
            TokenKind::DotEqualsToken => Some(".="),
            TokenKind::LessThanLessThanEqualsToken => Some("<<="),
            TokenKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            TokenKind::AmpersandEqualsToken => Some("&="),
            TokenKind::BarEqualsToken => Some("|="),
            TokenKind::CaretEqualsToken => Some("^="),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
