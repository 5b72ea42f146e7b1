//! JavaScript text generation.
//!
//! A pure transducer over the syntax tree: statements become lines indented
//! by two spaces per level, expressions become strings. It never fails; the
//! tree is a closed union and every shape is handled.

use crate::syntax::ast;

pub fn emit(program: &ast::Program) -> String {
  let mut generator = Generator::new();
  generator.program(program);
  generator.finish()
}

struct Generator {
  indent: usize,
  lines: Vec<String>,
}

impl Generator {
  fn new() -> Self {
    Self {
      indent: 0,
      lines: vec![],
    }
  }

  fn finish(self) -> String {
    self.lines.join("\n")
  }

  fn line(&mut self, text: impl AsRef<str>) {
    self.lines.push(format!(
      "{}{}",
      "  ".repeat(self.indent),
      text.as_ref()
    ));
  }

  fn program(&mut self, program: &ast::Program) {
    for stmt in &program.body {
      self.stmt(stmt);
      // a blank line after each top-level function definition
      if matches!(&**stmt, ast::StmtKind::Func(_)) {
        self.line("");
      }
    }
  }

  fn stmt(&mut self, stmt: &ast::Stmt) {
    match &**stmt {
      ast::StmtKind::Func(node) => self.func(node),
      ast::StmtKind::Class(node) => self.class(node),
      ast::StmtKind::If(node) => self.if_stmt(node),
      ast::StmtKind::For(node) => self.for_stmt(node),
      ast::StmtKind::While(node) => self.while_stmt(node),
      ast::StmtKind::Return(node) => self.return_stmt(node),
      ast::StmtKind::Assign(node) => {
        let value = self.expr(&node.value);
        self.line(format!("let {} = {};", node.target, value));
      }
      ast::StmtKind::Expr(node) => {
        let expr = self.expr(node);
        self.line(format!("{expr};"));
      }
    }
  }

  fn func(&mut self, node: &ast::Func) {
    self.line(format!(
      "function {}({}) {{",
      node.name,
      params(&node.params)
    ));
    self.body(&node.body);
    self.line("}");
  }

  /// A method header omits the `function` keyword.
  fn method(&mut self, node: &ast::Func) {
    self.line(format!("{}({}) {{", node.name, params(&node.params)));
    self.body(&node.body);
    self.line("}");
  }

  fn class(&mut self, node: &ast::Class) {
    self.line(format!("class {} {{", node.name));
    self.indent += 1;
    for method in &node.methods {
      self.method(method);
    }
    self.indent -= 1;
    self.line("}");
  }

  fn if_stmt(&mut self, node: &ast::If) {
    let cond = self.expr(&node.cond);
    self.line(format!("if ({cond}) {{"));
    self.body(&node.then_body);
    if let Some(else_body) = &node.else_body {
      self.line("} else {");
      self.body(else_body);
    }
    self.line("}");
  }

  fn for_stmt(&mut self, node: &ast::For) {
    let iter = self.expr(&node.iter);
    self.line(format!("for (const {} of {}) {{", node.item, iter));
    self.body(&node.body);
    self.line("}");
  }

  fn while_stmt(&mut self, node: &ast::While) {
    let cond = self.expr(&node.cond);
    self.line(format!("while ({cond}) {{"));
    self.body(&node.body);
    self.line("}");
  }

  fn return_stmt(&mut self, node: &ast::Return) {
    match &node.value {
      Some(value) => {
        let value = self.expr(value);
        self.line(format!("return {value};"));
      }
      None => self.line("return;"),
    }
  }

  fn body(&mut self, body: &[ast::Stmt]) {
    self.indent += 1;
    for stmt in body {
      self.stmt(stmt);
    }
    self.indent -= 1;
  }

  fn expr(&self, expr: &ast::Expr) -> String {
    match &**expr {
      ast::ExprKind::Literal(node) => self.literal(node),
      ast::ExprKind::Binary(node) => self.binary(node),
      ast::ExprKind::Unary(node) => {
        let right = self.expr(&node.right);
        match node.op {
          ast::UnaryOp::Not => format!("!{right}"),
          ast::UnaryOp::Minus => format!("-{right}"),
        }
      }
      ast::ExprKind::Call(node) => self.call(node),
      ast::ExprKind::MethodCall(node) => {
        let target = self.expr(&node.target);
        format!("{}.{}({})", target, node.name, self.args(&node.args))
      }
      ast::ExprKind::GetVar(node) => node.name.to_string(),
      ast::ExprKind::GetField(node) => {
        format!("{}.{}", self.expr(&node.target), node.name)
      }
      ast::ExprKind::GetIndex(node) => {
        format!("{}[{}]", self.expr(&node.target), self.expr(&node.key))
      }
      ast::ExprKind::List(items) => {
        format!("[{}]", self.args(items))
      }
      ast::ExprKind::Dict(pairs) => {
        // pairs keep their source order
        let pairs = pairs
          .iter()
          .map(|(key, value)| format!("{}: {}", self.expr(key), self.expr(value)))
          .collect::<Vec<_>>();
        format!("{{{}}}", pairs.join(", "))
      }
    }
  }

  fn binary(&self, node: &ast::Binary) -> String {
    let left = self.expr(&node.left);
    let right = self.expr(&node.right);
    match node.op {
      ast::BinaryOp::FloorDiv => format!("Math.floor({left} / {right})"),
      op => format!("({left} {} {right})", js_op(op)),
    }
  }

  fn call(&self, node: &ast::Call) -> String {
    let args: Vec<String> = node.args.iter().map(|arg| self.expr(arg)).collect();
    let name: &str = &node.name;
    match name {
      "print" => format!("console.log({})", args.join(", ")),
      "len" => match args.first() {
        Some(value) => format!("{value}.length"),
        None => "0".to_string(),
      },
      "str" => format!("String({})", args.join(", ")),
      "int" => format!("parseInt({})", args.join(", ")),
      "float" => format!("parseFloat({})", args.join(", ")),
      "bool" => format!("Boolean({})", args.join(", ")),
      "list" => format!("[{}]", args.join(", ")),
      "dict" => match args.first() {
        Some(value) => format!("{{{value}}}"),
        None => "{}".to_string(),
      },
      "range" => range_call(&args),
      // an uppercase initial marks a constructor call
      _ if name.starts_with(char::is_uppercase) => {
        format!("new {}({})", name, args.join(", "))
      }
      _ => format!("{}({})", name, args.join(", ")),
    }
  }

  fn args(&self, args: &[ast::Expr]) -> String {
    args
      .iter()
      .map(|arg| self.expr(arg))
      .collect::<Vec<_>>()
      .join(", ")
  }

  fn literal(&self, literal: &ast::Literal) -> String {
    match literal {
      ast::Literal::None => "null".to_string(),
      ast::Literal::Int(value) => value.to_string(),
      ast::Literal::Float(value) => float_repr(*value),
      ast::Literal::Bool(true) => "true".to_string(),
      ast::Literal::Bool(false) => "false".to_string(),
      // re-wrapped verbatim, no re-escaping
      ast::Literal::Str(value) => format!("\"{value}\""),
    }
  }
}

fn params(params: &[ast::Ident]) -> String {
  params
    .iter()
    .map(|param| param.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

fn range_call(args: &[String]) -> String {
  match args {
    [n] => format!("Array.from({{length: {n}}}, (_, i) => i)"),
    [a, b] => format!("Array.from({{length: {b} - {a}}}, (_, i) => i + {a})"),
    [a, b, s] => format!(
      "Array.from({{length: Math.ceil(({b} - {a}) / {s})}}, (_, i) => {a} + i * {s})"
    ),
    _ => "[]".to_string(),
  }
}

fn js_op(op: ast::BinaryOp) -> &'static str {
  match op {
    ast::BinaryOp::Add => "+",
    ast::BinaryOp::Sub => "-",
    ast::BinaryOp::Mul => "*",
    ast::BinaryOp::Div => "/",
    ast::BinaryOp::FloorDiv => "/",
    ast::BinaryOp::Rem => "%",
    ast::BinaryOp::Pow => "**",
    ast::BinaryOp::Eq => "==",
    ast::BinaryOp::Neq => "!=",
    ast::BinaryOp::Less => "<",
    ast::BinaryOp::LessEq => "<=",
    ast::BinaryOp::More => ">",
    ast::BinaryOp::MoreEq => ">=",
    ast::BinaryOp::And => "&&",
    ast::BinaryOp::Or => "||",
  }
}

/// A whole float keeps one decimal place so it still reads as a float.
fn float_repr(value: f64) -> String {
  if value.is_finite() && value.fract() == 0.0 {
    format!("{value:.1}")
  } else {
    value.to_string()
  }
}

#[cfg(test)]
mod tests;
