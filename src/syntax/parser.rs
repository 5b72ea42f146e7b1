use beef::lean::Cow;

use super::ast;
use super::lexer::TokenKind::*;
use super::lexer::{lex, Token, TokenKind};
use crate::error::{Error, Result};
use crate::span::{Span, SpannedError};

/// Parse `src` into a [`Program`](ast::Program).
///
/// The first unmet expectation aborts the parse; there is no recovery.
pub fn parse(src: &str) -> Result<ast::Program<'_>> {
  parse_tokens(lex(src))
}

/// Parse a token stream produced by [`lex`](super::lexer::lex).
pub fn parse_tokens<'src>(tokens: Vec<Token<'src>>) -> Result<ast::Program<'src>> {
  Parser::new(tokens).program()
}

pub(crate) struct Parser<'src> {
  tokens: Vec<Token<'src>>,
  pos: usize,
  prev_span: Span,
}

impl<'src> Parser<'src> {
  pub(crate) fn new(mut tokens: Vec<Token<'src>>) -> Self {
    if tokens.is_empty() {
      tokens.push(Token {
        kind: Tok_Eof,
        lexeme: Cow::borrowed(""),
        span: Span::default(),
        line: 1,
        column: 1,
      });
    }

    Self {
      tokens,
      pos: 0,
      prev_span: Span::default(),
    }
  }

  pub(crate) fn program(mut self) -> Result<ast::Program<'src>> {
    let mut program = ast::Program::new();

    self.skip_newlines();
    while !self.at(Tok_Eof) {
      if self.at(Tok_Newline) {
        self.bump();
        continue;
      }
      let stmt = self.stmt()?;
      program.body.push(stmt);
    }

    Ok(program)
  }

  #[inline]
  fn current(&self) -> &Token<'src> {
    &self.tokens[self.pos]
  }

  #[inline]
  fn peek(&self, offset: usize) -> &Token<'src> {
    let pos = (self.pos + offset).min(self.tokens.len() - 1);
    &self.tokens[pos]
  }

  /// Move forward by one token; the cursor clamps at EOF.
  #[inline]
  fn bump(&mut self) {
    self.prev_span = self.current().span;
    if self.pos < self.tokens.len() - 1 {
      self.pos += 1;
    }
  }

  #[inline]
  fn at(&self, kind: TokenKind) -> bool {
    self.current().is(kind)
  }

  #[inline]
  fn bump_if(&mut self, kind: TokenKind) -> bool {
    if self.at(kind) {
      self.bump();
      true
    } else {
      false
    }
  }

  #[inline]
  fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>> {
    if self.at(kind) {
      let token = self.current().clone();
      self.bump();
      Ok(token)
    } else {
      let found = self.current();
      Err(Error::Syntax(SpannedError::new(
        format!("expected `{}`, found `{}`", kind.name(), found.kind.name()),
        found.span,
      )))
    }
  }

  fn ident(&mut self) -> Result<ast::Ident<'src>> {
    let token = self.expect(Lit_Ident)?;
    Ok(ast::Ident::new(token.span, token.lexeme))
  }

  fn skip_newlines(&mut self) {
    while self.at(Tok_Newline) {
      self.bump();
    }
  }

  fn error(&self, message: impl ToString, span: Span) -> Error {
    Error::Syntax(SpannedError::new(message, span))
  }
}

mod expr;
mod stmt;
