use beef::lean::Cow;

use crate::span::{Span, Spanned};

pub type Ident<'src> = Spanned<Cow<'src, str>>;

/// Root of the syntax tree: an ordered sequence of top-level statements.
#[cfg_attr(test, derive(Debug))]
pub struct Program<'src> {
  pub body: Vec<Stmt<'src>>,
}

impl<'src> Program<'src> {
  pub fn new() -> Self {
    Self { body: vec![] }
  }
}

impl<'src> Default for Program<'src> {
  fn default() -> Self {
    Self::new()
  }
}

pub type Stmt<'src> = Spanned<StmtKind<'src>>;

#[cfg_attr(test, derive(Debug))]
pub enum StmtKind<'src> {
  Func(Box<Func<'src>>),
  Class(Box<Class<'src>>),
  If(Box<If<'src>>),
  For(Box<For<'src>>),
  While(Box<While<'src>>),
  Return(Box<Return<'src>>),
  Assign(Box<Assign<'src>>),
  Expr(Box<Expr<'src>>),
}

#[cfg_attr(test, derive(Debug))]
pub struct Func<'src> {
  pub name: Ident<'src>,
  pub params: Vec<Ident<'src>>,
  pub body: Vec<Stmt<'src>>,
}

/// A class body admits only function definitions; anything else is
/// discarded during parsing, so the tree stores methods directly.
#[cfg_attr(test, derive(Debug))]
pub struct Class<'src> {
  pub name: Ident<'src>,
  pub methods: Vec<Func<'src>>,
}

/// `elif` chains are lowered during parsing: each `elif` becomes a nested
/// `If` placed as the sole statement of the outer `else_body`.
#[cfg_attr(test, derive(Debug))]
pub struct If<'src> {
  pub cond: Expr<'src>,
  pub then_body: Vec<Stmt<'src>>,
  pub else_body: Option<Vec<Stmt<'src>>>,
}

#[cfg_attr(test, derive(Debug))]
pub struct For<'src> {
  pub item: Ident<'src>,
  pub iter: Expr<'src>,
  pub body: Vec<Stmt<'src>>,
}

#[cfg_attr(test, derive(Debug))]
pub struct While<'src> {
  pub cond: Expr<'src>,
  pub body: Vec<Stmt<'src>>,
}

#[cfg_attr(test, derive(Debug))]
pub struct Return<'src> {
  pub value: Option<Expr<'src>>,
}

#[cfg_attr(test, derive(Debug))]
pub struct Assign<'src> {
  pub target: Ident<'src>,
  pub value: Expr<'src>,
}

pub type Expr<'src> = Spanned<ExprKind<'src>>;

#[cfg_attr(test, derive(Debug))]
pub enum ExprKind<'src> {
  Literal(Box<Literal<'src>>),
  Binary(Box<Binary<'src>>),
  Unary(Box<Unary<'src>>),
  Call(Box<Call<'src>>),
  MethodCall(Box<MethodCall<'src>>),
  GetVar(Box<GetVar<'src>>),
  GetField(Box<GetField<'src>>),
  GetIndex(Box<GetIndex<'src>>),
  List(Vec<Expr<'src>>),
  Dict(Vec<(Expr<'src>, Expr<'src>)>),
}

#[cfg_attr(test, derive(Debug))]
pub enum Literal<'src> {
  None,
  Int(i64),
  Float(f64),
  Bool(bool),
  Str(Cow<'src, str>),
}

#[cfg_attr(test, derive(Debug))]
pub struct Binary<'src> {
  pub op: BinaryOp,
  pub left: Expr<'src>,
  pub right: Expr<'src>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  FloorDiv,
  Rem,
  Pow,
  Eq,
  Neq,
  Less,
  LessEq,
  More,
  MoreEq,
  And,
  Or,
}

#[cfg_attr(test, derive(Debug))]
pub struct Unary<'src> {
  pub op: UnaryOp,
  pub right: Expr<'src>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
  Not,
  Minus,
}

/// A call whose target was a bare identifier, e.g. `len(x)`.
#[cfg_attr(test, derive(Debug))]
pub struct Call<'src> {
  pub name: Ident<'src>,
  pub args: Vec<Expr<'src>>,
}

/// A call whose target was a field access, e.g. `obj.push(x)`.
#[cfg_attr(test, derive(Debug))]
pub struct MethodCall<'src> {
  pub target: Expr<'src>,
  pub name: Ident<'src>,
  pub args: Vec<Expr<'src>>,
}

#[cfg_attr(test, derive(Debug))]
pub struct GetVar<'src> {
  pub name: Ident<'src>,
}

#[cfg_attr(test, derive(Debug))]
pub struct GetField<'src> {
  pub target: Expr<'src>,
  pub name: Ident<'src>,
}

#[cfg_attr(test, derive(Debug))]
pub struct GetIndex<'src> {
  pub target: Expr<'src>,
  pub key: Expr<'src>,
}

pub fn func<'src>(
  name: Ident<'src>,
  params: Vec<Ident<'src>>,
  body: Vec<Stmt<'src>>,
) -> Func<'src> {
  Func { name, params, body }
}

pub fn func_stmt(s: impl Into<Span>, func: Func) -> Stmt {
  Stmt::new(s, StmtKind::Func(Box::new(func)))
}

pub fn class_stmt<'src>(
  s: impl Into<Span>,
  name: Ident<'src>,
  methods: Vec<Func<'src>>,
) -> Stmt<'src> {
  Stmt::new(s, StmtKind::Class(Box::new(Class { name, methods })))
}

pub fn if_stmt<'src>(
  s: impl Into<Span>,
  cond: Expr<'src>,
  then_body: Vec<Stmt<'src>>,
  else_body: Option<Vec<Stmt<'src>>>,
) -> Stmt<'src> {
  Stmt::new(
    s,
    StmtKind::If(Box::new(If {
      cond,
      then_body,
      else_body,
    })),
  )
}

pub fn for_stmt<'src>(
  s: impl Into<Span>,
  item: Ident<'src>,
  iter: Expr<'src>,
  body: Vec<Stmt<'src>>,
) -> Stmt<'src> {
  Stmt::new(s, StmtKind::For(Box::new(For { item, iter, body })))
}

pub fn while_stmt<'src>(
  s: impl Into<Span>,
  cond: Expr<'src>,
  body: Vec<Stmt<'src>>,
) -> Stmt<'src> {
  Stmt::new(s, StmtKind::While(Box::new(While { cond, body })))
}

pub fn return_stmt(s: impl Into<Span>, value: Option<Expr>) -> Stmt {
  Stmt::new(s, StmtKind::Return(Box::new(Return { value })))
}

pub fn assign_stmt<'src>(target: Ident<'src>, value: Expr<'src>) -> Stmt<'src> {
  Stmt::new(
    target.span.start..value.span.end,
    StmtKind::Assign(Box::new(Assign { target, value })),
  )
}

pub fn expr_stmt(expr: Expr) -> Stmt {
  Stmt::new(expr.span, StmtKind::Expr(Box::new(expr)))
}

pub fn expr_binary<'src>(
  s: impl Into<Span>,
  op: BinaryOp,
  left: Expr<'src>,
  right: Expr<'src>,
) -> Expr<'src> {
  Expr::new(s, ExprKind::Binary(Box::new(Binary { op, left, right })))
}

pub fn expr_unary(s: impl Into<Span>, op: UnaryOp, right: Expr) -> Expr {
  Expr::new(s, ExprKind::Unary(Box::new(Unary { op, right })))
}

pub fn expr_call<'src>(
  s: impl Into<Span>,
  name: Ident<'src>,
  args: Vec<Expr<'src>>,
) -> Expr<'src> {
  Expr::new(s, ExprKind::Call(Box::new(Call { name, args })))
}

pub fn expr_method_call<'src>(
  s: impl Into<Span>,
  target: Expr<'src>,
  name: Ident<'src>,
  args: Vec<Expr<'src>>,
) -> Expr<'src> {
  Expr::new(
    s,
    ExprKind::MethodCall(Box::new(MethodCall { target, name, args })),
  )
}

pub fn expr_get_var(name: Ident) -> Expr {
  Expr::new(name.span, ExprKind::GetVar(Box::new(GetVar { name })))
}

pub fn expr_get_field<'src>(
  s: impl Into<Span>,
  target: Expr<'src>,
  name: Ident<'src>,
) -> Expr<'src> {
  Expr::new(s, ExprKind::GetField(Box::new(GetField { target, name })))
}

pub fn expr_get_index<'src>(
  s: impl Into<Span>,
  target: Expr<'src>,
  key: Expr<'src>,
) -> Expr<'src> {
  Expr::new(s, ExprKind::GetIndex(Box::new(GetIndex { target, key })))
}

pub fn expr_list(s: impl Into<Span>, items: Vec<Expr>) -> Expr {
  Expr::new(s, ExprKind::List(items))
}

pub fn expr_dict<'src>(
  s: impl Into<Span>,
  pairs: Vec<(Expr<'src>, Expr<'src>)>,
) -> Expr<'src> {
  Expr::new(s, ExprKind::Dict(pairs))
}

pub mod lit {
  use super::*;
  use crate::error::{Error, Result};

  pub fn none<'src>(s: impl Into<Span>) -> Expr<'src> {
    Expr::new(s, ExprKind::Literal(Box::new(Literal::None)))
  }

  pub fn bool<'src>(s: impl Into<Span>, value: bool) -> Expr<'src> {
    Expr::new(s, ExprKind::Literal(Box::new(Literal::Bool(value))))
  }

  /// A lexeme containing `.` is attached as a float, anything else as an
  /// integer. A lexeme that does not convert (`1..2`) is surfaced here.
  pub fn number<'src>(s: impl Into<Span>, lexeme: &str) -> Result<Expr<'src>> {
    let s = s.into();
    let value = if lexeme.contains('.') {
      lexeme
        .parse::<f64>()
        .map(Literal::Float)
        .map_err(|_| Error::Internal(format!("invalid number literal `{lexeme}`")))?
    } else {
      lexeme
        .parse::<i64>()
        .map(Literal::Int)
        .map_err(|_| Error::Internal(format!("invalid number literal `{lexeme}`")))?
    };
    Ok(Expr::new(s, ExprKind::Literal(Box::new(value))))
  }

  pub fn str<'src>(s: impl Into<Span>, value: Cow<'src, str>) -> Expr<'src> {
    Expr::new(s, ExprKind::Literal(Box::new(Literal::Str(value))))
  }
}
