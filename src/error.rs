use std::error::Error as StdError;
use std::fmt::Display;

use crate::span::{Span, SpannedError};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A single finding produced by the semantic pass.
///
/// Findings are collected without aborting the walk; any non-empty batch
/// fails the compilation as a whole.
#[derive(Clone, Debug)]
pub struct Diagnostic {
  pub message: String,
  pub span: Span,
}

impl Diagnostic {
  pub fn new(message: impl ToString, span: impl Into<Span>) -> Self {
    Self {
      message: message.to_string(),
      span: span.into(),
    }
  }
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)
  }
}

/// The message prefixes are stable; callers pattern-match on them.
#[derive(Debug)]
pub enum Error {
  /// The parser hit a token it could not accept. Fatal on first failure.
  Syntax(SpannedError),
  /// The semantic pass produced one or more diagnostics.
  Semantic(Vec<Diagnostic>),
  /// Anything else, e.g. a number literal that does not convert.
  Internal(String),
}

impl From<SpannedError> for Error {
  fn from(value: SpannedError) -> Self {
    Error::Syntax(value)
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Syntax(e) => {
        write!(f, "Syntax error: {e}")
      }
      Error::Semantic(diagnostics) => {
        write!(f, "Semantic errors found:")?;
        for diagnostic in diagnostics {
          write!(f, "\n{diagnostic}")?;
        }
        Ok(())
      }
      Error::Internal(message) => {
        write!(f, "Compile error: {message}")
      }
    }
  }
}

impl StdError for Error {}
