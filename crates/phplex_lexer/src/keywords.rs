//! Reserved-word classification.
//!
//! Identifier lexemes are looked up by their uppercase spelling, so `echo`,
//! `Echo` and `ECHO` all resolve to [`TokenKind::EchoKeyword`]. Variables
//! never reach this table.

use crate::token_kind::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Uppercase spelling to token kind.
const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("ARRAY", TokenKind::ArrayKeyword),
    ("AS", TokenKind::AsKeyword),
    ("BREAK", TokenKind::BreakKeyword),
    ("CASE", TokenKind::CaseKeyword),
    ("CLASS", TokenKind::ClassKeyword),
    ("CONST", TokenKind::ConstKeyword),
    ("CONTINUE", TokenKind::ContinueKeyword),
    ("DECLARE", TokenKind::DeclareKeyword),
    ("DEFAULT", TokenKind::DefaultKeyword),
    ("DO", TokenKind::DoKeyword),
    ("ECHO", TokenKind::EchoKeyword),
    ("ELSE", TokenKind::ElseKeyword),
    ("ELSEIF", TokenKind::ElseIfKeyword),
    ("EMPTY", TokenKind::EmptyKeyword),
    ("ENDDECLARE", TokenKind::EndDeclareKeyword),
    ("ENDFOR", TokenKind::EndForKeyword),
    ("ENDFOREACH", TokenKind::EndForeachKeyword),
    ("ENDIF", TokenKind::EndIfKeyword),
    ("ENDSWITCH", TokenKind::EndSwitchKeyword),
    ("ENDWHILE", TokenKind::EndWhileKeyword),
    ("EVAL", TokenKind::EvalKeyword),
    ("EXIT", TokenKind::ExitKeyword),
    ("DIE", TokenKind::ExitKeyword),
    ("EXTENDS", TokenKind::ExtendsKeyword),
    ("FOR", TokenKind::ForKeyword),
    ("FOREACH", TokenKind::ForeachKeyword),
    ("FUNCTION", TokenKind::FunctionKeyword),
    ("GLOBAL", TokenKind::GlobalKeyword),
    ("IF", TokenKind::IfKeyword),
    ("INCLUDE", TokenKind::IncludeKeyword),
    ("INCLUDE_ONCE", TokenKind::IncludeOnceKeyword),
    ("INSTANCEOF", TokenKind::InstanceOfKeyword),
    ("ISSET", TokenKind::IssetKeyword),
    ("LIST", TokenKind::ListKeyword),
    ("NEW", TokenKind::NewKeyword),
    ("PRINT", TokenKind::PrintKeyword),
    ("REQUIRE", TokenKind::RequireKeyword),
    ("REQUIRE_ONCE", TokenKind::RequireOnceKeyword),
    ("RETURN", TokenKind::ReturnKeyword),
    ("STATIC", TokenKind::StaticKeyword),
    ("SWITCH", TokenKind::SwitchKeyword),
    ("UNSET", TokenKind::UnsetKeyword),
    ("USE", TokenKind::UseKeyword),
    ("VAR", TokenKind::VarKeyword),
    ("WHILE", TokenKind::WhileKeyword),
    ("FINAL", TokenKind::FinalKeyword),
    ("INTERFACE", TokenKind::InterfaceKeyword),
    ("IMPLEMENTS", TokenKind::ImplementsKeyword),
    ("PUBLIC", TokenKind::PublicKeyword),
    ("PRIVATE", TokenKind::PrivateKeyword),
    ("PROTECTED", TokenKind::ProtectedKeyword),
    ("ABSTRACT", TokenKind::AbstractKeyword),
    ("CLONE", TokenKind::CloneKeyword),
    ("TRY", TokenKind::TryKeyword),
    ("CATCH", TokenKind::CatchKeyword),
    ("THROW", TokenKind::ThrowKeyword),
    ("CFUNCTION", TokenKind::CFunctionKeyword),
    ("OLD_FUNCTION", TokenKind::OldFunctionKeyword),
    ("AND", TokenKind::AndKeyword),
    ("OR", TokenKind::OrKeyword),
    ("XOR", TokenKind::XorKeyword),
    ("__DIR__", TokenKind::DirConstant),
    ("__FILE__", TokenKind::FileConstant),
    ("__LINE__", TokenKind::LineConstant),
    ("__FUNCTION__", TokenKind::FunctionConstant),
    ("__CLASS__", TokenKind::ClassConstant),
    ("__METHOD__", TokenKind::MethodConstant),
    ("__NAMESPACE__", TokenKind::NamespaceConstant),
];

/// The reserved-word table. Immutable once built and shared by every lexer.
#[derive(Debug)]
pub struct ReservedWords {
    map: FxHashMap<&'static str, TokenKind>,
}

impl ReservedWords {
    fn new() -> Self {
        let mut map = FxHashMap::with_capacity_and_hasher(RESERVED_WORDS.len(), Default::default());
        map.extend(RESERVED_WORDS.iter().copied());
        Self { map }
    }

    /// The process-wide table.
    pub fn get() -> &'static ReservedWords {
        static TABLE: OnceLock<ReservedWords> = OnceLock::new();
        TABLE.get_or_init(ReservedWords::new)
    }

    /// Look up a reserved word, ignoring case.
    pub fn lookup(&self, lexeme: &str) -> Option<TokenKind> {
        // Identifier lexemes are ASCII, so the uppercase form has the same length.
        self.map.get(lexeme.to_ascii_uppercase().as_str()).copied()
    }

    /// Resolve an identifier lexeme to its final kind.
    pub fn classify(&self, lexeme: &str) -> TokenKind {
        self.lookup(lexeme).unwrap_or(TokenKind::Identifier)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
