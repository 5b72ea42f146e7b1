use super::*;
use crate::syntax::ast::{BinaryOp, UnaryOp};

impl<'src> Parser<'src> {
  pub(super) fn expr(&mut self) -> Result<ast::Expr<'src>> {
    self.or_expr()
  }

  fn or_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.and_expr()?;
    while self.bump_if(Kw_Or) {
      let right = self.and_expr()?;
      left = ast::expr_binary(left.span.start..right.span.end, BinaryOp::Or, left, right);
    }
    Ok(left)
  }

  fn and_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.eq_expr()?;
    while self.bump_if(Kw_And) {
      let right = self.eq_expr()?;
      left = ast::expr_binary(left.span.start..right.span.end, BinaryOp::And, left, right);
    }
    Ok(left)
  }

  fn eq_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.comp_expr()?;
    loop {
      let op = match self.current().kind {
        Op_EqualEqual => BinaryOp::Eq,
        Op_BangEqual => BinaryOp::Neq,
        _ => break,
      };
      self.bump(); // bump operator
      let right = self.comp_expr()?;
      left = ast::expr_binary(left.span.start..right.span.end, op, left, right);
    }
    Ok(left)
  }

  fn comp_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.add_expr()?;
    loop {
      let op = match self.current().kind {
        Op_Less => BinaryOp::Less,
        Op_LessEqual => BinaryOp::LessEq,
        Op_More => BinaryOp::More,
        Op_MoreEqual => BinaryOp::MoreEq,
        _ => break,
      };
      self.bump(); // bump operator
      let right = self.add_expr()?;
      left = ast::expr_binary(left.span.start..right.span.end, op, left, right);
    }
    Ok(left)
  }

  fn add_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.mul_expr()?;
    loop {
      let op = match self.current().kind {
        Op_Plus => BinaryOp::Add,
        Op_Minus => BinaryOp::Sub,
        _ => break,
      };
      self.bump(); // bump operator
      let right = self.mul_expr()?;
      left = ast::expr_binary(left.span.start..right.span.end, op, left, right);
    }
    Ok(left)
  }

  fn mul_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.pow_expr()?;
    loop {
      let op = match self.current().kind {
        Op_Star => BinaryOp::Mul,
        Op_Slash => BinaryOp::Div,
        Op_SlashSlash => BinaryOp::FloorDiv,
        Op_Percent => BinaryOp::Rem,
        _ => break,
      };
      self.bump(); // bump operator
      let right = self.pow_expr()?;
      left = ast::expr_binary(left.span.start..right.span.end, op, left, right);
    }
    Ok(left)
  }

  // right-associative
  fn pow_expr(&mut self) -> Result<ast::Expr<'src>> {
    let left = self.unary_expr()?;
    if self.bump_if(Op_StarStar) {
      let right = self.pow_expr()?;
      return Ok(ast::expr_binary(
        left.span.start..right.span.end,
        BinaryOp::Pow,
        left,
        right,
      ));
    }
    Ok(left)
  }

  fn unary_expr(&mut self) -> Result<ast::Expr<'src>> {
    let op = match self.current().kind {
      Kw_Not => UnaryOp::Not,
      Op_Minus => UnaryOp::Minus,
      _ => return self.postfix_expr(),
    };
    let start = self.current().span.start;
    self.bump(); // bump operator
    let right = self.unary_expr()?;
    Ok(ast::expr_unary(start..right.span.end, op, right))
  }

  fn postfix_expr(&mut self) -> Result<ast::Expr<'src>> {
    let mut expr = self.primary_expr()?;
    loop {
      match self.current().kind {
        Brk_ParenL => {
          let args = self.call_args()?;
          let span = Span::from(expr.span.start..self.prev_span.end);
          // a call folds onto a bare name or a field access, nothing else
          expr = match expr.into_inner() {
            ast::ExprKind::GetVar(var) => ast::expr_call(span, var.name, args),
            ast::ExprKind::GetField(field) => {
              ast::expr_method_call(span, field.target, field.name, args)
            }
            _ => return Err(self.error("invalid call target", span)),
          };
        }
        Op_Dot => {
          self.bump(); // bump `.`
          let name = self.ident()?;
          expr = ast::expr_get_field(expr.span.start..name.span.end, expr, name);
        }
        Brk_SquareL => {
          self.bump(); // bump `[`
          let key = self.expr()?;
          self.expect(Brk_SquareR)?;
          expr = ast::expr_get_index(expr.span.start..self.prev_span.end, expr, key);
        }
        _ => break,
      }
    }
    Ok(expr)
  }

  fn call_args(&mut self) -> Result<Vec<ast::Expr<'src>>> {
    self.expect(Brk_ParenL)?;
    let mut args = vec![];
    while !self.at(Brk_ParenR) {
      args.push(self.expr()?);
      if self.at(Tok_Comma) {
        self.bump();
      }
    }
    self.expect(Brk_ParenR)?;
    Ok(args)
  }

  fn primary_expr(&mut self) -> Result<ast::Expr<'src>> {
    match self.current().kind {
      Lit_Number => {
        let token = self.expect(Lit_Number)?;
        ast::lit::number(token.span, &token.lexeme)
      }
      Lit_String => {
        let token = self.expect(Lit_String)?;
        Ok(ast::lit::str(token.span, token.lexeme))
      }
      Kw_True => {
        let token = self.expect(Kw_True)?;
        Ok(ast::lit::bool(token.span, true))
      }
      Kw_False => {
        let token = self.expect(Kw_False)?;
        Ok(ast::lit::bool(token.span, false))
      }
      Kw_None => {
        let token = self.expect(Kw_None)?;
        Ok(ast::lit::none(token.span))
      }
      Lit_Ident => Ok(ast::expr_get_var(self.ident()?)),
      Brk_SquareL => self.list_literal(),
      Brk_CurlyL => self.dict_literal(),
      Brk_ParenL => {
        self.bump(); // bump `(`
        let expr = self.expr()?;
        self.expect(Brk_ParenR)?;
        Ok(expr)
      }
      kind => {
        let span = self.current().span;
        Err(self.error(format!("unexpected token `{}`", kind.name()), span))
      }
    }
  }

  fn list_literal(&mut self) -> Result<ast::Expr<'src>> {
    let start = self.expect(Brk_SquareL)?.span.start;
    let mut items = vec![];
    while !self.at(Brk_SquareR) {
      items.push(self.expr()?);
      if self.at(Tok_Comma) {
        self.bump();
      }
    }
    self.expect(Brk_SquareR)?;
    Ok(ast::expr_list(start..self.prev_span.end, items))
  }

  fn dict_literal(&mut self) -> Result<ast::Expr<'src>> {
    let start = self.expect(Brk_CurlyL)?.span.start;
    let mut pairs = vec![];
    while !self.at(Brk_CurlyR) {
      let key = self.expr()?;
      self.expect(Tok_Colon)?;
      let value = self.expr()?;
      pairs.push((key, value));
      if self.at(Tok_Comma) {
        self.bump();
      }
    }
    self.expect(Brk_CurlyR)?;
    Ok(ast::expr_dict(start..self.prev_span.end, pairs))
  }
}
