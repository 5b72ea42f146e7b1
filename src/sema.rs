use indexmap::IndexMap;

use crate::error::Diagnostic;
use crate::span::Span;
use crate::syntax::ast;

/// Names implicitly in scope before analysis starts. Their call sites are
/// lowered by table in the generator.
const BUILTINS: [&str; 9] = [
  "print", "len", "range", "str", "int", "float", "bool", "list", "dict",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SymbolKind {
  Function,
  Class,
  Variable,
}

/// Walk `program` in source order, collecting diagnostics.
///
/// An empty list means the program is accepted. The walk never aborts
/// early; all findings are batched into a single report.
pub fn analyze(program: &ast::Program) -> Vec<Diagnostic> {
  let mut analyzer = Analyzer::new();
  for builtin in BUILTINS {
    analyzer.declare(builtin, SymbolKind::Function);
  }
  analyzer.program(program);
  analyzer.diagnostics
}

struct Analyzer {
  scopes: Vec<IndexMap<String, SymbolKind>>,
  diagnostics: Vec<Diagnostic>,
  function_depth: usize,
}

impl Analyzer {
  fn new() -> Self {
    Self {
      scopes: vec![IndexMap::new()],
      diagnostics: vec![],
      function_depth: 0,
    }
  }

  fn enter_scope(&mut self) {
    self.scopes.push(IndexMap::new());
  }

  fn exit_scope(&mut self) {
    if self.scopes.len() > 1 {
      self.scopes.pop();
    }
  }

  fn declare(&mut self, name: &str, kind: SymbolKind) {
    if let Some(scope) = self.scopes.last_mut() {
      scope.insert(name.to_string(), kind);
    }
  }

  fn lookup(&self, name: &str) -> Option<SymbolKind> {
    self
      .scopes
      .iter()
      .rev()
      .find_map(|scope| scope.get(name).copied())
  }

  fn declared_in_current_scope(&self, name: &str) -> bool {
    self
      .scopes
      .last()
      .map(|scope| scope.contains_key(name))
      .unwrap_or(false)
  }

  fn error(&mut self, message: String, span: Span) {
    self.diagnostics.push(Diagnostic::new(message, span));
  }

  fn program(&mut self, program: &ast::Program) {
    for stmt in &program.body {
      self.stmt(stmt);
    }
  }

  fn stmt(&mut self, stmt: &ast::Stmt) {
    match &**stmt {
      ast::StmtKind::Func(node) => self.func(node),
      ast::StmtKind::Class(node) => self.class(node),
      ast::StmtKind::If(node) => self.if_stmt(node),
      ast::StmtKind::For(node) => self.for_stmt(node),
      ast::StmtKind::While(node) => self.while_stmt(node),
      ast::StmtKind::Return(node) => self.return_stmt(node, stmt.span),
      ast::StmtKind::Assign(node) => self.assign(node),
      ast::StmtKind::Expr(node) => self.expr(node),
    }
  }

  fn func(&mut self, node: &ast::Func) {
    let name: &str = &node.name;
    if self.declared_in_current_scope(name) {
      self.error(
        format!("Function '{name}' already declared in current scope"),
        node.name.span,
      );
    }
    self.declare(name, SymbolKind::Function);

    self.enter_scope();
    self.function_depth += 1;
    for param in &node.params {
      if self.declared_in_current_scope(param) {
        self.error(format!("Parameter '{param}' already declared"), param.span);
      }
      self.declare(param, SymbolKind::Variable);
    }
    for stmt in &node.body {
      self.stmt(stmt);
    }
    self.function_depth -= 1;
    self.exit_scope();
  }

  fn class(&mut self, node: &ast::Class) {
    let name: &str = &node.name;
    if self.declared_in_current_scope(name) {
      self.error(
        format!("Class '{name}' already declared in current scope"),
        node.name.span,
      );
    }
    self.declare(name, SymbolKind::Class);

    self.enter_scope();
    for method in &node.methods {
      self.func(method);
    }
    self.exit_scope();
  }

  // branch bodies share the enclosing scope
  fn if_stmt(&mut self, node: &ast::If) {
    self.expr(&node.cond);
    for stmt in &node.then_body {
      self.stmt(stmt);
    }
    if let Some(else_body) = &node.else_body {
      for stmt in else_body {
        self.stmt(stmt);
      }
    }
  }

  fn for_stmt(&mut self, node: &ast::For) {
    self.expr(&node.iter);

    // the loop target lives in its own scope
    self.enter_scope();
    self.declare(&node.item, SymbolKind::Variable);
    for stmt in &node.body {
      self.stmt(stmt);
    }
    self.exit_scope();
  }

  fn while_stmt(&mut self, node: &ast::While) {
    self.expr(&node.cond);
    for stmt in &node.body {
      self.stmt(stmt);
    }
  }

  fn return_stmt(&mut self, node: &ast::Return, span: Span) {
    if self.function_depth == 0 {
      self.error("Return statement outside function".to_string(), span);
    }
    if let Some(value) = &node.value {
      self.expr(value);
    }
  }

  fn assign(&mut self, node: &ast::Assign) {
    self.expr(&node.value);

    // first write declares; later writes are silent
    let name: &str = &node.target;
    if self.lookup(name).is_none() {
      self.declare(name, SymbolKind::Variable);
    }
  }

  fn expr(&mut self, expr: &ast::Expr) {
    match &**expr {
      ast::ExprKind::Literal(_) => {}
      ast::ExprKind::Binary(node) => {
        self.expr(&node.left);
        self.expr(&node.right);
      }
      ast::ExprKind::Unary(node) => self.expr(&node.right),
      ast::ExprKind::Call(node) => self.call(node),
      ast::ExprKind::MethodCall(node) => {
        self.expr(&node.target);
        for arg in &node.args {
          self.expr(arg);
        }
      }
      ast::ExprKind::GetVar(node) => {
        let name: &str = &node.name;
        if self.lookup(name).is_none() {
          self.error(format!("Undefined variable '{name}'"), node.name.span);
        }
      }
      ast::ExprKind::GetField(node) => self.expr(&node.target),
      ast::ExprKind::GetIndex(node) => {
        self.expr(&node.target);
        self.expr(&node.key);
      }
      ast::ExprKind::List(items) => {
        for item in items {
          self.expr(item);
        }
      }
      ast::ExprKind::Dict(pairs) => {
        for (key, value) in pairs {
          self.expr(key);
          self.expr(value);
        }
      }
    }
  }

  fn call(&mut self, node: &ast::Call) {
    let name: &str = &node.name;
    match self.lookup(name) {
      None => self.error(format!("Undefined function '{name}'"), node.name.span),
      Some(SymbolKind::Function | SymbolKind::Class) => {}
      Some(_) => self.error(
        format!("'{name}' is not a function or class"),
        node.name.span,
      ),
    }

    // arguments are analyzed regardless of the callee verdict
    for arg in &node.args {
      self.expr(arg);
    }
  }
}

#[cfg(test)]
mod tests;
