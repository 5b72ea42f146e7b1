#![allow(non_camel_case_types)]

use beef::lean::Cow;
use logos::Logos;

use crate::span::Span;

#[derive(Clone, Debug)]
pub struct Token<'src> {
  pub kind: TokenKind,
  pub lexeme: Cow<'src, str>,
  pub span: Span,
  pub line: u32,
  pub column: u32,
}

impl<'src> Token<'src> {
  #[inline]
  pub fn is(&self, kind: TokenKind) -> bool {
    self.kind == kind
  }
}

/// Tokenize `src`.
///
/// Lexing cannot fail: unknown characters are dropped, unterminated strings
/// are closed at end of input, and the returned stream always ends in
/// exactly one EOF token. Block structure is made explicit as synthetic
/// INDENT/DEDENT tokens, one DEDENT per level left.
pub fn lex(src: &str) -> Vec<Token<'_>> {
  Lexer::new(src).run()
}

struct Lexer<'src> {
  src: &'src str,
  raw: Vec<(TokenKind, Span)>,
  tokens: Vec<Token<'src>>,
  indent: IndentStack,
  line: u32,
  line_start: usize,
}

impl<'src> Lexer<'src> {
  fn new(src: &'src str) -> Self {
    let mut raw = vec![];
    let mut inner = TokenKind::lexer(src);
    while let Some(kind) = inner.next() {
      let kind = kind.unwrap_or(TokenKind::_Tok_Error);
      raw.push((kind, inner.span().into()));
    }

    Self {
      src,
      raw,
      tokens: vec![],
      indent: IndentStack::new(),
      line: 1,
      line_start: 0,
    }
  }

  fn run(mut self) -> Vec<Token<'src>> {
    use TokenKind::*;

    let mut at_line_start = true;
    let mut i = 0;
    while i < self.raw.len() {
      let (kind, span) = self.raw[i];

      if at_line_start {
        match kind {
          _Tok_Whitespace => {
            // Leading whitespace only counts when the line has content
            // after it; blank and comment-only lines are not measured.
            if !matches!(
              self.raw.get(i + 1),
              None | Some((Tok_Newline | _Tok_Comment, _))
            ) {
              let width = measure_indent(&self.src[span]);
              self.apply_indent(width, span.end);
            }
            at_line_start = false;
            i += 1;
            continue;
          }
          Tok_Newline => {
            // A line that opens with its own newline is blank; while the
            // stack is deep, it flushes every open block early.
            if self.indent.depth() > 1 {
              self.flush_dedents(span.start);
            }
            self.push(Tok_Newline, Cow::borrowed("\n"), span);
            self.advance_line(span);
            i += 1;
            continue;
          }
          _Tok_Comment => {
            // Comment-only lines never touch the indent stack.
            at_line_start = false;
            i += 1;
            continue;
          }
          _ => {
            // Content in column zero.
            self.apply_indent(0, span.start);
            at_line_start = false;
          }
        }
      }

      match kind {
        Tok_Newline => {
          self.push(Tok_Newline, Cow::borrowed("\n"), span);
          at_line_start = true;
        }
        _Tok_Whitespace | _Tok_Comment | _Tok_Error => {}
        Lit_String => {
          let value = string_value(&self.src[span], true);
          self.push(Lit_String, value, span);
        }
        _Tok_StringOpen => {
          let value = string_value(&self.src[span], false);
          self.push(Lit_String, value, span);
        }
        kind => {
          self.push(kind, Cow::borrowed(&self.src[span]), span);
        }
      }

      self.advance_line(span);
      i += 1;
    }

    let end = self.src.len();
    self.flush_dedents(end);
    self.push(
      TokenKind::Tok_Eof,
      Cow::borrowed(""),
      Span { start: end, end },
    );

    self.tokens
  }

  fn apply_indent(&mut self, width: u32, pos: usize) {
    let top = self.indent.top();
    if width > top {
      self.indent.push(width);
      self.push_empty(TokenKind::Tok_Indent, pos);
    } else if width < top {
      // A width between two stack entries is tolerated: pop until the
      // remaining top is at or below it.
      while self.indent.top() > width {
        self.indent.pop();
        self.push_empty(TokenKind::Tok_Dedent, pos);
      }
    }
  }

  fn flush_dedents(&mut self, pos: usize) {
    while self.indent.depth() > 1 {
      self.indent.pop();
      self.push_empty(TokenKind::Tok_Dedent, pos);
    }
  }

  fn push_empty(&mut self, kind: TokenKind, pos: usize) {
    self.push(kind, Cow::borrowed(""), Span { start: pos, end: pos });
  }

  fn push(&mut self, kind: TokenKind, lexeme: Cow<'src, str>, span: Span) {
    let column = (span.start - self.line_start) as u32 + 1;
    self.tokens.push(Token {
      kind,
      lexeme,
      span,
      line: self.line,
      column,
    });
  }

  // String literals may span physical lines, so the slice is scanned
  // rather than counting newline tokens.
  fn advance_line(&mut self, span: Span) {
    let slice = &self.src[span];
    if let Some(pos) = slice.rfind('\n') {
      self.line += slice.matches('\n').count() as u32;
      self.line_start = span.start + pos + 1;
    }
  }
}

/// Space counts one unit, tab counts four.
fn measure_indent(ws: &str) -> u32 {
  ws.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum()
}

/// Strip the quotes and apply escapes: `\` causes the following character
/// to be kept verbatim, nothing more. A trailing lone `\` is discarded.
fn string_value<'a>(raw: &'a str, terminated: bool) -> Cow<'a, str> {
  let body = &raw[1..raw.len() - usize::from(terminated)];
  if !body.contains('\\') {
    return Cow::borrowed(body);
  }

  let mut out = String::with_capacity(body.len());
  let mut chars = body.chars();
  while let Some(c) = chars.next() {
    if c == '\\' {
      if let Some(next) = chars.next() {
        out.push(next);
      }
    } else {
      out.push(c);
    }
  }
  Cow::owned(out)
}

struct IndentStack {
  stack: Vec<u32>,
}

impl IndentStack {
  fn new() -> Self {
    Self { stack: vec![0] }
  }

  fn depth(&self) -> usize {
    self.stack.len()
  }

  fn top(&self) -> u32 {
    self.stack.last().copied().unwrap_or(0)
  }

  fn push(&mut self, width: u32) {
    self.stack.push(width);
  }

  fn pop(&mut self) {
    if self.stack.len() > 1 {
      self.stack.pop();
    }
  }
}

#[derive(Clone, Copy, Debug, Logos, PartialEq, Eq)]
pub enum TokenKind {
  // Keywords
  #[token("def")]
  Kw_Def,
  #[token("if")]
  Kw_If,
  #[token("else")]
  Kw_Else,
  #[token("elif")]
  Kw_Elif,
  #[token("for")]
  Kw_For,
  #[token("while")]
  Kw_While,
  #[token("return")]
  Kw_Return,
  #[token("class")]
  Kw_Class,
  #[token("import")]
  Kw_Import,
  #[token("from")]
  Kw_From,
  #[token("as")]
  Kw_As,
  #[token("True")]
  Kw_True,
  #[token("False")]
  Kw_False,
  #[token("None")]
  Kw_None,
  #[token("and")]
  Kw_And,
  #[token("or")]
  Kw_Or,
  #[token("not")]
  Kw_Not,
  #[token("in")]
  Kw_In,
  #[token("is")]
  Kw_Is,

  // Operators, multi-character forms first
  #[token("+=")]
  Op_PlusEqual,
  #[token("-=")]
  Op_MinusEqual,
  #[token("**")]
  Op_StarStar,
  #[token("//")]
  Op_SlashSlash,
  #[token("==")]
  Op_EqualEqual,
  #[token("!=")]
  Op_BangEqual,
  #[token("<=")]
  Op_LessEqual,
  #[token(">=")]
  Op_MoreEqual,
  #[token("+")]
  Op_Plus,
  #[token("-")]
  Op_Minus,
  #[token("*")]
  Op_Star,
  #[token("/")]
  Op_Slash,
  #[token("%")]
  Op_Percent,
  #[token("=")]
  Op_Equal,
  #[token("<")]
  Op_Less,
  #[token(">")]
  Op_More,
  #[token(".")]
  Op_Dot,

  // Delimiters
  #[token("(")]
  Brk_ParenL,
  #[token(")")]
  Brk_ParenR,
  #[token("[")]
  Brk_SquareL,
  #[token("]")]
  Brk_SquareR,
  #[token("{")]
  Brk_CurlyL,
  #[token("}")]
  Brk_CurlyR,
  #[token(",")]
  Tok_Comma,
  #[token(":")]
  Tok_Colon,

  // Literals
  /// `0`, `1.5`, also malformed runs like `1.2.3` (surfaced at parse time)
  #[regex(r"[0-9][0-9.]*")]
  Lit_Number,
  #[regex(r#""([^"\\]|\\.)*""#)]
  #[regex(r"'([^'\\]|\\.)*'")]
  Lit_String,
  /// `a`, `b_c`, `__x0`, etc.
  #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
  Lit_Ident,

  // Layout
  #[token("\n")]
  Tok_Newline,
  Tok_Indent,
  Tok_Dedent,
  Tok_Eof,

  /// A string still open at end of input; reported as `Lit_String`.
  #[doc(hidden)]
  #[regex(r#""([^"\\]|\\.)*"#)]
  #[regex(r"'([^'\\]|\\.)*")]
  _Tok_StringOpen,
  #[doc(hidden)]
  #[regex(r"[ \t]+")]
  _Tok_Whitespace,
  #[doc(hidden)]
  #[regex(r"#[^\n]*")]
  _Tok_Comment,
  #[doc(hidden)]
  _Tok_Error,
}

impl TokenKind {
  pub fn name(&self) -> &'static str {
    match self {
      TokenKind::Kw_Def => "def",
      TokenKind::Kw_If => "if",
      TokenKind::Kw_Else => "else",
      TokenKind::Kw_Elif => "elif",
      TokenKind::Kw_For => "for",
      TokenKind::Kw_While => "while",
      TokenKind::Kw_Return => "return",
      TokenKind::Kw_Class => "class",
      TokenKind::Kw_Import => "import",
      TokenKind::Kw_From => "from",
      TokenKind::Kw_As => "as",
      TokenKind::Kw_True => "True",
      TokenKind::Kw_False => "False",
      TokenKind::Kw_None => "None",
      TokenKind::Kw_And => "and",
      TokenKind::Kw_Or => "or",
      TokenKind::Kw_Not => "not",
      TokenKind::Kw_In => "in",
      TokenKind::Kw_Is => "is",
      TokenKind::Op_PlusEqual => "+=",
      TokenKind::Op_MinusEqual => "-=",
      TokenKind::Op_StarStar => "**",
      TokenKind::Op_SlashSlash => "//",
      TokenKind::Op_EqualEqual => "==",
      TokenKind::Op_BangEqual => "!=",
      TokenKind::Op_LessEqual => "<=",
      TokenKind::Op_MoreEqual => ">=",
      TokenKind::Op_Plus => "+",
      TokenKind::Op_Minus => "-",
      TokenKind::Op_Star => "*",
      TokenKind::Op_Slash => "/",
      TokenKind::Op_Percent => "%",
      TokenKind::Op_Equal => "=",
      TokenKind::Op_Less => "<",
      TokenKind::Op_More => ">",
      TokenKind::Op_Dot => ".",
      TokenKind::Brk_ParenL => "(",
      TokenKind::Brk_ParenR => ")",
      TokenKind::Brk_SquareL => "[",
      TokenKind::Brk_SquareR => "]",
      TokenKind::Brk_CurlyL => "{",
      TokenKind::Brk_CurlyR => "}",
      TokenKind::Tok_Comma => ",",
      TokenKind::Tok_Colon => ":",
      TokenKind::Lit_Number => "number",
      TokenKind::Lit_String => "string",
      TokenKind::Lit_Ident => "identifier",
      TokenKind::Tok_Newline => "<newline>",
      TokenKind::Tok_Indent => "<indent>",
      TokenKind::Tok_Dedent => "<dedent>",
      TokenKind::Tok_Eof => "<eof>",
      TokenKind::_Tok_StringOpen => "string",
      TokenKind::_Tok_Whitespace => "<whitespace>",
      TokenKind::_Tok_Comment => "<comment>",
      TokenKind::_Tok_Error => "<error>",
    }
  }
}

#[cfg(test)]
mod tests;
