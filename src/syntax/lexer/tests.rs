use indoc::indoc;

use super::TokenKind::*;
use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
  lex(src).into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_source_is_just_eof() {
  assert_eq!(kinds(""), vec![Tok_Eof]);
}

#[test]
fn flat_statement() {
  assert_eq!(
    kinds("x = 1\n"),
    vec![Lit_Ident, Op_Equal, Lit_Number, Tok_Newline, Tok_Eof]
  );
}

#[test]
fn indented_block() {
  let src = indoc! {"
    def f():
        return 1
  "};
  assert_eq!(
    kinds(src),
    vec![
      Kw_Def,
      Lit_Ident,
      Brk_ParenL,
      Brk_ParenR,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Kw_Return,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Tok_Eof,
    ]
  );
}

#[test]
fn dedent_between_branches() {
  let src = indoc! {"
    if x:
        1
    else:
        2
  "};
  assert_eq!(
    kinds(src),
    vec![
      Kw_If,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Kw_Else,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Tok_Eof,
    ]
  );
}

#[test]
fn eof_flushes_every_open_level() {
  let src = "if a:\n    if b:\n        1\n";
  assert_eq!(
    kinds(src),
    vec![
      Kw_If,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Kw_If,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Tok_Dedent,
      Tok_Eof,
    ]
  );
}

// A truly empty line (no leading whitespace) flushes open blocks before
// its NEWLINE; a whitespace-only line does not.
#[test]
fn blank_line_flushes_open_blocks() {
  let src = "while x:\n    1\n\n    2\n";
  assert_eq!(
    kinds(src),
    vec![
      Kw_While,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Tok_Newline,
      Tok_Indent,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Tok_Eof,
    ]
  );
}

#[test]
fn whitespace_only_line_does_not_flush() {
  let src = "while x:\n    1\n    \n    2\n";
  assert_eq!(
    kinds(src),
    vec![
      Kw_While,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Number,
      Tok_Newline,
      Tok_Newline,
      Lit_Number,
      Tok_Newline,
      Tok_Dedent,
      Tok_Eof,
    ]
  );
}

#[test]
fn comment_lines_never_touch_the_indent_stack() {
  let src = "def f():\n    # c\n    return 1\n# done\nx = 1\n";
  assert_eq!(
    kinds(src),
    vec![
      Kw_Def,
      Lit_Ident,
      Brk_ParenL,
      Brk_ParenR,
      Tok_Colon,
      Tok_Newline,
      Tok_Newline,
      Tok_Indent,
      Kw_Return,
      Lit_Number,
      Tok_Newline,
      Tok_Newline,
      Tok_Dedent,
      Lit_Ident,
      Op_Equal,
      Lit_Number,
      Tok_Newline,
      Tok_Eof,
    ]
  );
}

#[test]
fn tab_counts_four_units() {
  assert_eq!(
    kinds("if x:\n\ty\n"),
    vec![
      Kw_If,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Ident,
      Tok_Newline,
      Tok_Dedent,
      Tok_Eof,
    ]
  );
}

// A width that matches no stack entry pops until the top is at or below
// it; the mismatch itself is tolerated.
#[test]
fn partial_dedent_pops_past_the_width() {
  let src = "if a:\n        x\n    y\n";
  assert_eq!(
    kinds(src),
    vec![
      Kw_If,
      Lit_Ident,
      Tok_Colon,
      Tok_Newline,
      Tok_Indent,
      Lit_Ident,
      Tok_Newline,
      Tok_Dedent,
      Lit_Ident,
      Tok_Newline,
      Tok_Eof,
    ]
  );
}

#[test]
fn string_escape_keeps_the_next_character_verbatim() {
  let tokens = lex(r#"s = "a\"b\\c""#);
  assert_eq!(tokens[2].kind, Lit_String);
  assert_eq!(&*tokens[2].lexeme, "a\"b\\c");
}

#[test]
fn single_quoted_strings() {
  let tokens = lex("x = 'hi'");
  assert_eq!(tokens[2].kind, Lit_String);
  assert_eq!(&*tokens[2].lexeme, "hi");
}

#[test]
fn unterminated_string_is_silently_closed() {
  let tokens = lex(r#"x = "abc"#);
  assert_eq!(tokens[2].kind, Lit_String);
  assert_eq!(&*tokens[2].lexeme, "abc");
  assert_eq!(tokens[3].kind, Tok_Eof);
}

#[test]
fn number_keeps_extra_dots_in_the_lexeme() {
  let tokens = lex("x = 1.2.3\n");
  assert_eq!(tokens[2].kind, Lit_Number);
  assert_eq!(&*tokens[2].lexeme, "1.2.3");
}

#[test]
fn unknown_characters_are_dropped() {
  assert_eq!(
    kinds("a $ b @ ! ; c\n"),
    vec![Lit_Ident, Lit_Ident, Lit_Ident, Tok_Newline, Tok_Eof]
  );
}

#[test]
fn multi_character_operators_win_over_single() {
  assert_eq!(
    kinds("** // == != <= >= += -=\n"),
    vec![
      Op_StarStar,
      Op_SlashSlash,
      Op_EqualEqual,
      Op_BangEqual,
      Op_LessEqual,
      Op_MoreEqual,
      Op_PlusEqual,
      Op_MinusEqual,
      Tok_Newline,
      Tok_Eof,
    ]
  );
}

#[test]
fn keywords_are_promoted_identifiers_are_not() {
  assert_eq!(kinds("def"), vec![Kw_Def, Tok_Eof]);
  assert_eq!(kinds("definitely"), vec![Lit_Ident, Tok_Eof]);
  assert_eq!(
    kinds("True False None and or not in is"),
    vec![
      Kw_True, Kw_False, Kw_None, Kw_And, Kw_Or, Kw_Not, Kw_In, Kw_Is, Tok_Eof,
    ]
  );
}

#[test]
fn trailing_comments_are_dropped() {
  assert_eq!(
    kinds("x = 1  # trailing\n"),
    vec![Lit_Ident, Op_Equal, Lit_Number, Tok_Newline, Tok_Eof]
  );
}

#[test]
fn line_and_column_positions() {
  let tokens = lex("x = 1\n  y\n");
  assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // x
  assert_eq!((tokens[1].line, tokens[1].column), (1, 3)); // =
  assert_eq!((tokens[2].line, tokens[2].column), (1, 5)); // 1
  assert_eq!(tokens[4].kind, Tok_Indent);
  assert_eq!((tokens[4].line, tokens[4].column), (2, 3));
  assert_eq!((tokens[5].line, tokens[5].column), (2, 3)); // y
}

#[test]
fn indents_and_dedents_always_balance() {
  let sources = [
    "",
    "x\n",
    "def f():\n    return 1\n",
    "if a:\n    if b:\n        1\n    else:\n        2\n",
    "while x:\n    1\n\n    2\n",
    "class C:\n    def m(self):\n        return 1\n",
    "if a:\n        x\n    y\n",
  ];
  for src in sources {
    let tokens = lex(src);
    let indents = tokens.iter().filter(|t| t.is(Tok_Indent)).count();
    let dedents = tokens.iter().filter(|t| t.is(Tok_Dedent)).count();
    assert_eq!(indents, dedents, "unbalanced stream for {src:?}");
    assert_eq!(tokens.iter().filter(|t| t.is(Tok_Eof)).count(), 1);
    assert!(tokens.last().unwrap().is(Tok_Eof));
  }
}
