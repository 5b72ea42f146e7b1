use super::*;

impl<'src> Parser<'src> {
  pub(super) fn stmt(&mut self) -> Result<ast::Stmt<'src>> {
    self.skip_newlines();
    match self.current().kind {
      Kw_Def => self.func_stmt(),
      Kw_Class => self.class_stmt(),
      Kw_If => self.if_stmt(),
      Kw_For => self.for_stmt(),
      Kw_While => self.while_stmt(),
      Kw_Return => self.return_stmt(),
      Lit_Ident if self.peek(1).is(Op_Equal) => self.assign_stmt(),
      _ => self.expr_stmt(),
    }
  }

  fn func_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_Def)?.span.start;
    let func = self.func()?;
    let end = self.prev_span.end;
    Ok(ast::func_stmt(start..end, func))
  }

  /// Parses from the name onward; `def` was already consumed.
  fn func(&mut self) -> Result<ast::Func<'src>> {
    let name = self.ident()?;
    self.expect(Brk_ParenL)?;

    let mut params = vec![];
    while !self.at(Brk_ParenR) {
      params.push(self.ident()?);
      if self.at(Tok_Comma) {
        self.bump();
      }
    }
    self.expect(Brk_ParenR)?;
    self.expect(Tok_Colon)?;

    let body = self.block()?;
    Ok(ast::func(name, params, body))
  }

  fn class_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_Class)?.span.start;
    let name = self.ident()?;
    self.expect(Tok_Colon)?;

    self.skip_newlines();
    let mut methods = vec![];
    if self.bump_if(Tok_Indent) {
      while !self.at(Tok_Dedent) && !self.at(Tok_Eof) {
        if self.at(Tok_Newline) {
          self.bump();
          continue;
        }
        if self.bump_if(Kw_Def) {
          methods.push(self.func()?);
        } else {
          // only methods are admitted in a class body
          self.bump();
        }
      }
      self.bump_if(Tok_Dedent);
    }

    let end = self.prev_span.end;
    Ok(ast::class_stmt(start..end, name, methods))
  }

  fn if_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_If)?.span.start;
    let cond = self.expr()?;
    self.expect(Tok_Colon)?;
    let then_body = self.block()?;
    let else_body = self.else_clause()?;
    let end = self.prev_span.end;
    Ok(ast::if_stmt(start..end, cond, then_body, else_body))
  }

  /// `elif` is rewritten during parsing: each one becomes a nested if
  /// statement forming the sole element of the enclosing else body.
  fn else_clause(&mut self) -> Result<Option<Vec<ast::Stmt<'src>>>> {
    if self.at(Kw_Elif) {
      let nested = self.elif_stmt()?;
      Ok(Some(vec![nested]))
    } else if self.bump_if(Kw_Else) {
      self.expect(Tok_Colon)?;
      Ok(Some(self.block()?))
    } else {
      Ok(None)
    }
  }

  fn elif_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_Elif)?.span.start;
    let cond = self.expr()?;
    self.expect(Tok_Colon)?;
    let then_body = self.block()?;
    let else_body = self.else_clause()?;
    let end = self.prev_span.end;
    Ok(ast::if_stmt(start..end, cond, then_body, else_body))
  }

  fn for_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_For)?.span.start;
    let item = self.ident()?;
    self.expect(Kw_In)?;
    let iter = self.expr()?;
    self.expect(Tok_Colon)?;
    let body = self.block()?;
    let end = self.prev_span.end;
    Ok(ast::for_stmt(start..end, item, iter, body))
  }

  fn while_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_While)?.span.start;
    let cond = self.expr()?;
    self.expect(Tok_Colon)?;
    let body = self.block()?;
    let end = self.prev_span.end;
    Ok(ast::while_stmt(start..end, cond, body))
  }

  fn return_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.expect(Kw_Return)?.span.start;
    let value = if !self.at(Tok_Newline) && !self.at(Tok_Eof) {
      Some(self.expr()?)
    } else {
      None
    };
    let end = self.prev_span.end;
    Ok(ast::return_stmt(start..end, value))
  }

  fn assign_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let target = self.ident()?;
    self.expect(Op_Equal)?;
    let value = self.expr()?;
    Ok(ast::assign_stmt(target, value))
  }

  fn expr_stmt(&mut self) -> Result<ast::Stmt<'src>> {
    let expr = self.expr()?;
    Ok(ast::expr_stmt(expr))
  }

  fn block(&mut self) -> Result<Vec<ast::Stmt<'src>>> {
    self.skip_newlines();
    if !self.bump_if(Tok_Indent) {
      // a body on the same line as its header
      return Ok(vec![self.stmt()?]);
    }

    let mut body = vec![];
    while !self.at(Tok_Dedent) && !self.at(Tok_Eof) {
      if self.at(Tok_Newline) {
        self.bump();
        continue;
      }
      body.push(self.stmt()?);
    }
    self.bump_if(Tok_Dedent);

    Ok(body)
  }
}
