//! Lexer integration tests.
//!
//! Verifies mode switching, longest-match selection, keyword classification,
//! line tracking and error recovery over complete inputs.

use phplex_lexer::{default_lexer, tokenize, LexOutput, Lexer, LexerOptions, Mode, TokenKind};
use pretty_assertions::assert_eq;

use TokenKind::*;

/// Helper: lex all tokens from source and return as (kind, text) pairs.
fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source).map(|t| (t.kind, t.text.to_string())).collect()
}

/// Helper: lex all token kinds.
fn lex_kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).map(|t| t.kind).collect()
}

/// Helper: kinds of everything after the opening tag, without whitespace.
fn script_kinds(code: &str) -> Vec<TokenKind> {
    let source = format!("<?php {code}");
    tokenize(&source)
        .skip(1)
        .filter(|t| t.kind != WhitespaceTrivia)
        .map(|t| t.kind)
        .collect()
}

fn pairs(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter().map(|&(k, s)| (k, s.to_string())).collect()
}

fn lex_with(options: LexerOptions, source: &str) -> LexOutput<'_> {
    Lexer::new(options).unwrap().lex(source)
}

#[test]
fn test_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_markup_only() {
    let source = "<html>\n  <body>a < b</body>\n</html>\n";
    assert_eq!(lex_all(source), pairs(&[(InlineHtml, source)]));
}

#[test]
fn test_mode_transition_end_to_end() {
    assert_eq!(
        lex_all("Hi <?php echo 1; ?> Bye"),
        pairs(&[
            (InlineHtml, "Hi "),
            (OpenTag, "<?php "),
            (EchoKeyword, "echo"),
            (WhitespaceTrivia, " "),
            (IntegerLiteral, "1"),
            (SemicolonToken, ";"),
            (WhitespaceTrivia, " "),
            (CloseTag, "?>"),
            (InlineHtml, " Bye"),
        ])
    );
}

#[test]
fn test_open_tag_with_echo() {
    assert_eq!(
        lex_all("<?= $x ?>"),
        pairs(&[
            (OpenTagWithEcho, "<?= "),
            (Variable, "$x"),
            (WhitespaceTrivia, " "),
            (CloseTag, "?>"),
        ])
    );
    assert_eq!(lex_kinds("<?=\n1")[0], OpenTagWithEcho);
    assert_eq!(lex_kinds("<%=1%>"), vec![OpenTagWithEcho, IntegerLiteral, CloseTag]);
}

#[test]
fn test_short_and_asp_open_tags() {
    assert_eq!(lex_kinds("<? 1 ?>"), vec![OpenTag, IntegerLiteral, WhitespaceTrivia, CloseTag]);
    assert_eq!(lex_kinds("<% 1 %>"), vec![OpenTag, IntegerLiteral, WhitespaceTrivia, CloseTag]);
}

#[test]
fn test_open_tag_is_case_sensitive() {
    assert_eq!(
        lex_all("<?PHP echo"),
        pairs(&[
            (OpenTag, "<?"),
            (Identifier, "PHP"),
            (WhitespaceTrivia, " "),
            (EchoKeyword, "echo"),
        ])
    );
}

#[test]
fn test_open_tag_absorbs_one_newline() {
    assert_eq!(
        lex_all("<?php\n\n$a"),
        pairs(&[(OpenTag, "<?php\n"), (WhitespaceTrivia, "\n"), (Variable, "$a")])
    );
}

#[test]
fn test_close_tag_absorbs_one_newline() {
    assert_eq!(
        lex_all("<?php 1 ?>\n\ntext"),
        pairs(&[
            (OpenTag, "<?php "),
            (IntegerLiteral, "1"),
            (WhitespaceTrivia, " "),
            (CloseTag, "?>\n"),
            (InlineHtml, "\ntext"),
        ])
    );
}

#[test]
fn test_multiple_script_regions() {
    let kinds = lex_kinds("a<?php 1 ?>b<?= 2 ?>c");
    assert_eq!(
        kinds,
        vec![
            InlineHtml,
            OpenTag,
            IntegerLiteral,
            WhitespaceTrivia,
            CloseTag,
            InlineHtml,
            OpenTagWithEcho,
            IntegerLiteral,
            WhitespaceTrivia,
            CloseTag,
            InlineHtml,
        ]
    );
}

#[test]
fn test_script_open_tag_is_not_reentered() {
    // Inside script mode an opening tag is just operators.
    assert_eq!(script_kinds("<?php"), vec![LessThanToken, QuestionToken, Identifier]);
}

#[test]
fn test_longest_match_operators() {
    assert_eq!(script_kinds("==="), vec![EqualsEqualsEqualsToken]);
    assert_eq!(script_kinds("<<="), vec![LessThanLessThanEqualsToken]);
    assert_eq!(script_kinds(">>="), vec![GreaterThanGreaterThanEqualsToken]);
    assert_eq!(script_kinds("!=="), vec![ExclamationEqualsEqualsToken]);
    assert_eq!(script_kinds("== ="), vec![EqualsEqualsToken, EqualsToken]);
    assert_eq!(script_kinds("===="), vec![EqualsEqualsEqualsToken, EqualsToken]);
    assert_eq!(script_kinds("<<"), vec![LessThanLessThanToken]);
}

#[test]
fn test_all_operators() {
    let source = "+ - * / % & | ~ ^ << >> && || ! < > <= >= == != <> === !== \
                  = *= /= %= += -= <<= >>= &= |= ^= .= ++ -- -> => :: \
                  ( ) [ ] { } , . ? : ; @";
    assert_eq!(
        script_kinds(source),
        vec![
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
            ExclamationEqualsToken,
            ExclamationEqualsToken,
            EqualsEqualsEqualsToken,
            ExclamationEqualsEqualsToken,
            EqualsToken,
            AsteriskEqualsToken,
            SlashEqualsToken,
            PercentEqualsToken,
            PlusEqualsToken,
            MinusEqualsToken,
            LessThanLessThanEqualsToken,
            GreaterThanGreaterThanEqualsToken,
            AmpersandEqualsToken,
            BarEqualsToken,
            CaretEqualsToken,
            DotEqualsToken,
            PlusPlusToken,
            MinusMinusToken,
            MinusGreaterThanToken,
            EqualsGreaterThanToken,
            ColonColonToken,
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
            SemicolonToken,
            AtToken,
        ]
    );
}

#[test]
fn test_punctuation_text_round_trips() {
    let output = default_lexer().lex("<?php ->=>::.=");
    for token in output.significant().skip(1) {
        assert_eq!(token.kind.punctuation_text(), Some(token.text));
    }
}

#[test]
fn test_case_insensitive_keywords() {
    assert_eq!(
        lex_all("<?php ECHO Echo echo $ECHO"),
        pairs(&[
            (OpenTag, "<?php "),
            (EchoKeyword, "ECHO"),
            (WhitespaceTrivia, " "),
            (EchoKeyword, "Echo"),
            (WhitespaceTrivia, " "),
            (EchoKeyword, "echo"),
            (WhitespaceTrivia, " "),
            (Variable, "$ECHO"),
        ])
    );
}

#[test]
fn test_keywords() {
    let source = "if elseif else endif while endwhile foreach as function return \
                  class extends implements interface abstract final public private protected \
                  static new clone try catch throw include_once require_once instanceof \
                  isset unset empty list array global var use exit die eval print cfunction old_function";
    assert_eq!(
        script_kinds(source),
        vec![
            IfKeyword,
            ElseIfKeyword,
            ElseKeyword,
            EndIfKeyword,
            WhileKeyword,
            EndWhileKeyword,
            ForeachKeyword,
            AsKeyword,
            FunctionKeyword,
            ReturnKeyword,
            ClassKeyword,
            ExtendsKeyword,
            ImplementsKeyword,
            InterfaceKeyword,
            AbstractKeyword,
            FinalKeyword,
            PublicKeyword,
            PrivateKeyword,
            ProtectedKeyword,
            StaticKeyword,
            NewKeyword,
            CloneKeyword,
            TryKeyword,
            CatchKeyword,
            ThrowKeyword,
            IncludeOnceKeyword,
            RequireOnceKeyword,
            InstanceOfKeyword,
            IssetKeyword,
            UnsetKeyword,
            EmptyKeyword,
            ListKeyword,
            ArrayKeyword,
            GlobalKeyword,
            VarKeyword,
            UseKeyword,
            ExitKeyword,
            ExitKeyword,
            EvalKeyword,
            PrintKeyword,
            CFunctionKeyword,
            OldFunctionKeyword,
        ]
    );
}

#[test]
fn test_word_operators_and_magic_constants() {
    assert_eq!(
        script_kinds("and && or || xor ^"),
        vec![
            AndKeyword,
            AmpersandAmpersandToken,
            OrKeyword,
            BarBarToken,
            XorKeyword,
            CaretToken,
        ]
    );
    assert_eq!(
        script_kinds("__DIR__ __FILE__ __LINE__ __FUNCTION__ __CLASS__ __METHOD__ __NAMESPACE__"),
        vec![
            DirConstant,
            FileConstant,
            LineConstant,
            FunctionConstant,
            ClassConstant,
            MethodConstant,
            NamespaceConstant,
        ]
    );
}

#[test]
fn test_identifiers_and_variables() {
    assert_eq!(
        lex_all("<?php $echo echoes _x1 $_"),
        pairs(&[
            (OpenTag, "<?php "),
            (Variable, "$echo"),
            (WhitespaceTrivia, " "),
            (Identifier, "echoes"),
            (WhitespaceTrivia, " "),
            (Identifier, "_x1"),
            (WhitespaceTrivia, " "),
            (Variable, "$_"),
        ])
    );
}

#[test]
fn test_numeric_literals() {
    let output = default_lexer().lex("<?php 42 3.14 1e10 2.5E-3f 0x1F 0b101 7L");
    let literals: Vec<(TokenKind, &str)> = output.significant().skip(1).map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        literals,
        vec![
            (IntegerLiteral, "42"),
            (FloatLiteral, "3.14"),
            (FloatLiteral, "1e10"),
            (FloatLiteral, "2.5E-3f"),
            (IntegerLiteral, "0x1F"),
            (IntegerLiteral, "0b101"),
            (IntegerLiteral, "7L"),
        ]
    );
}

#[test]
fn test_dot_after_integer_is_concat() {
    assert_eq!(script_kinds("1.$a"), vec![IntegerLiteral, DotToken, Variable]);
}

#[test]
fn test_string_literals() {
    let output = default_lexer().lex(r#"<?php 'single' "dou\"ble" 'it\'s'"#);
    let strings: Vec<&str> = output.significant().skip(1).map(|t| t.text).collect();
    assert_eq!(strings, vec!["'single'", r#""dou\"ble""#, r"'it\'s'"]);
    assert!(output.significant().skip(1).all(|t| t.kind == StringLiteral));
}

#[test]
fn test_comments_are_tokens() {
    assert_eq!(
        lex_all("<?php /** doc */ /* block */ // line\n# hash\n"),
        pairs(&[
            (OpenTag, "<?php "),
            (DocCommentTrivia, "/** doc */"),
            (WhitespaceTrivia, " "),
            (MultiLineCommentTrivia, "/* block */"),
            (WhitespaceTrivia, " "),
            (SingleLineCommentTrivia, "// line\n"),
            (SingleLineCommentTrivia, "# hash\n"),
        ])
    );
}

#[test]
fn test_empty_block_comment_is_not_doc_comment() {
    assert_eq!(
        script_kinds("/**/ $a /* b */"),
        vec![MultiLineCommentTrivia, Variable, MultiLineCommentTrivia]
    );
}

#[test]
fn test_line_comment_ends_before_close_tag() {
    assert_eq!(
        lex_all("<?php // note ?>after"),
        pairs(&[
            (OpenTag, "<?php "),
            (SingleLineCommentTrivia, "// note "),
            (CloseTag, "?>"),
            (InlineHtml, "after"),
        ])
    );
}

#[test]
fn test_line_comment_at_end_of_input() {
    // Without a terminator the comment rule does not match.
    assert_eq!(script_kinds("// x"), vec![SlashToken, SlashToken, Identifier]);
}

#[test]
fn test_unterminated_block_comment_degrades() {
    let output = default_lexer().lex("<?php /* open");
    assert_eq!(
        output.kinds(),
        vec![OpenTag, SlashToken, AsteriskToken, WhitespaceTrivia, Identifier]
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_unterminated_string_degrades() {
    let output = default_lexer().lex("<?php \"abc");
    assert_eq!(output.kinds(), vec![OpenTag, Identifier]);
    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!(diag.span.start, 6);
    assert_eq!(diag.message_text, "Illegal character '\"'.");
}

#[test]
fn test_illegal_character_is_skipped() {
    let source = "<?php $a `b` $c";
    let output = default_lexer().lex(source);
    assert_eq!(
        output.kinds(),
        vec![OpenTag, Variable, WhitespaceTrivia, Identifier, WhitespaceTrivia, Variable]
    );
    let offsets: Vec<u32> = output.diagnostics.iter().map(|d| d.span.start).collect();
    assert_eq!(offsets, vec![9, 11]);
    assert!(output.diagnostics.iter().all(|d| d.code == 1001 && d.line == 1));
    assert_eq!(output.reconstruct(), "<?php $a b $c");
}

#[test]
fn test_illegal_multibyte_character() {
    let output = default_lexer().lex("<?php é1");
    assert_eq!(output.kinds(), vec![OpenTag, IntegerLiteral]);
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!(diag.span.len(), 2);
    assert_eq!(diag.message_text, "Illegal character 'é'.");
}

#[test]
fn test_markup_accepts_anything() {
    let output = default_lexer().lex("`é\\ <x> $ <?");
    assert_eq!(output.kinds(), vec![InlineHtml, OpenTag]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_line_tracking_after_block_comment() {
    let source = "<?php /* one\ntwo\nthree */ $x";
    let tokens: Vec<_> = tokenize(source).collect();
    let comment = tokens.iter().find(|t| t.kind == MultiLineCommentTrivia).unwrap();
    let variable = tokens.iter().find(|t| t.kind == Variable).unwrap();
    assert_eq!(comment.line, 1);
    assert_eq!(variable.line, comment.line + 2);
}

#[test]
fn test_line_tracking_across_modes() {
    let source = "line1\nline2\n<?php\n$a = 1;\n\n$b\n?>\nafter\n<?= $c ?>";
    let lines: Vec<(TokenKind, u32)> = tokenize(source)
        .filter(|t| !t.is_trivia())
        .map(|t| (t.kind, t.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            (InlineHtml, 1),
            (OpenTag, 3),
            (Variable, 4),
            (EqualsToken, 4),
            (IntegerLiteral, 4),
            (SemicolonToken, 4),
            (Variable, 6),
            (CloseTag, 7),
            (InlineHtml, 8),
            (OpenTagWithEcho, 9),
            (Variable, 9),
            (CloseTag, 9),
        ]
    );
}

#[test]
fn test_crlf_line_endings() {
    let tokens: Vec<_> = tokenize("<?php\r\n$a\r\n$b").collect();
    let lines: Vec<u32> = tokens.iter().filter(|t| t.kind == Variable).map(|t| t.line).collect();
    assert_eq!(lines, vec![2, 3]);
}

#[test]
fn test_offsets_are_contiguous() {
    let source = "x <?php if ($a) { echo 'y'; } ?> z";
    let mut expected_start = 0;
    for token in tokenize(source) {
        assert_eq!(token.start(), expected_start);
        assert_eq!(&source[token.span.to_range()], token.text);
        expected_start = token.end();
    }
    assert_eq!(expected_start as usize, source.len());
}

#[test]
fn test_lazy_consumption() {
    let mut tokens = tokenize("<html><?php $a = 1; ?>");
    assert_eq!(tokens.mode(), Mode::Markup);
    assert_eq!(tokens.next().map(|t| t.kind), Some(InlineHtml));
    assert_eq!(tokens.next().map(|t| t.kind), Some(OpenTag));
    assert_eq!(tokens.mode(), Mode::Script);
    assert_eq!(tokens.offset(), 12);
    assert_eq!(tokens.line(), 1);
    let rest = tokens.into_output();
    assert_eq!(rest.tokens.first().map(|t| t.text), Some("$a"));
    assert_eq!(rest.tokens.last().map(|t| t.kind), Some(CloseTag));
}

#[test]
fn test_iterator_is_fused() {
    let mut tokens = tokenize("a");
    assert!(tokens.next().is_some());
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn test_take_diagnostics() {
    let mut tokens = tokenize("<?php `");
    assert_eq!(tokens.by_ref().count(), 1);
    assert_eq!(tokens.take_diagnostics().len(), 1);
    assert!(tokens.diagnostics().is_empty());
}

#[test]
fn test_relexing_is_deterministic() {
    let source = "<p><?php foreach ($xs as $k => $v) { print $k . $v; } ?></p>";
    let first = default_lexer().lex(source);
    let second = default_lexer().lex(source);
    assert_eq!(first.tokens, second.tokens);
}

#[test]
fn test_lex_many_matches_sequential() {
    let sources = vec![
        "a <?php echo 1; ?>".to_string(),
        "<?= $x ?>".to_string(),
        "<?php $a `".to_string(),
        String::new(),
    ];
    let lexer = default_lexer();
    let batch = lexer.lex_many(&sources);
    assert_eq!(batch.len(), sources.len());
    for (output, source) in batch.iter().zip(&sources) {
        let single = lexer.lex(source);
        assert_eq!(output.tokens, single.tokens);
        assert_eq!(output.diagnostics.len(), single.diagnostics.len());
    }
}

#[test]
fn test_default_lexer_is_shared() {
    assert!(std::ptr::eq(default_lexer(), default_lexer()));
    assert_eq!(*default_lexer().options(), LexerOptions::default());
}

#[test]
fn test_without_short_open_tag() {
    let options = LexerOptions::default().with_short_open_tag(false);
    let output = lex_with(options, "<?xml version ?><?php 1");
    assert_eq!(output.kinds(), vec![InlineHtml, OpenTag, IntegerLiteral]);
    assert_eq!(output.tokens[0].text, "<?xml version ?>");
}

#[test]
fn test_without_asp_tags() {
    let options = LexerOptions::default().with_asp_tags(false);
    assert_eq!(lex_with(options, "<% 1 %>").kinds(), vec![InlineHtml]);
    assert_eq!(
        lex_with(options, "<?php 5 %> 3").kinds(),
        vec![
            OpenTag,
            IntegerLiteral,
            WhitespaceTrivia,
            PercentToken,
            GreaterThanToken,
            WhitespaceTrivia,
            IntegerLiteral,
        ]
    );
}

#[test]
fn test_realistic_template() {
    let source = r#"<!DOCTYPE html>
<ul>
<?php foreach ($items as $item): ?>
  <li><?= htmlspecialchars($item->name) ?></li>
<?php endforeach; ?>
</ul>
"#;
    let output = default_lexer().lex(source);
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.reconstruct(), source);
    let significant: Vec<TokenKind> = output.significant().map(|t| t.kind).collect();
    assert_eq!(
        significant,
        vec![
            InlineHtml,
            OpenTag,
            ForeachKeyword,
            OpenParenToken,
            Variable,
            AsKeyword,
            Variable,
            CloseParenToken,
            ColonToken,
            CloseTag,
            InlineHtml,
            OpenTagWithEcho,
            Identifier,
            OpenParenToken,
            Variable,
            MinusGreaterThanToken,
            Identifier,
            CloseParenToken,
            CloseTag,
            InlineHtml,
            OpenTag,
            EndForeachKeyword,
            SemicolonToken,
            CloseTag,
            InlineHtml,
        ]
    );
}
