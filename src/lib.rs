//! culebra is a source-to-source translator: it reads a small,
//! statically-shaped subset of a Python-like, indentation-delimited
//! language and emits modern JavaScript with matching behavior.
//!
//! The pipeline is linear: lexing (with synthetic INDENT/DEDENT/NEWLINE
//! tokens), recursive-descent parsing, a name-resolution pass, and text
//! generation. [`compile`] runs all four stages.

mod emit;
mod error;
mod sema;
mod span;
pub mod syntax;

pub use error::{Diagnostic, Error, Result};
pub use span::{Span, Spanned, SpannedError};

use log::debug;

/// Translate `src` to JavaScript.
///
/// Each call runs with fresh component state, so the result for a given
/// input is always the same. Semantic diagnostics abort the pipeline
/// before generation, batched into a single [`Error::Semantic`].
pub fn compile(src: &str) -> Result<String> {
  let tokens = syntax::lexer::lex(src);
  debug!("lexed {} tokens", tokens.len());

  let program = syntax::parser::parse_tokens(tokens)?;
  debug!("parsed {} top-level statements", program.body.len());

  let diagnostics = sema::analyze(&program);
  if !diagnostics.is_empty() {
    debug!("analysis rejected the program, {} findings", diagnostics.len());
    return Err(Error::Semantic(diagnostics));
  }
  debug!("analysis passed");

  Ok(emit::emit(&program))
}
