use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use culebra::Error;

mod repl;

#[derive(Debug, Parser)]
#[command(name = "culebra", version, about = "Translate Python-like source to JavaScript")]
struct Cli {
  /// Source file to compile.
  file: Option<PathBuf>,

  /// Output path; defaults to the input with a `.js` extension.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Print the token stream instead of compiling.
  #[arg(long)]
  tokens: bool,

  /// Start an interactive session.
  #[arg(short, long)]
  interactive: bool,

  /// Log phase progress (-v: info, -vv: debug).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
  let args = Cli::parse();

  let level = match args.verbose {
    0 => log::Level::Warn,
    1 => log::Level::Info,
    _ => log::Level::Debug,
  };
  simple_logger::init_with_level(level)?;

  let file = match args.file {
    Some(file) if !args.interactive => file,
    _ => {
      repl::run()?;
      return Ok(ExitCode::SUCCESS);
    }
  };

  let src = fs::read_to_string(&file)
    .with_context(|| format!("could not read `{}`", file.display()))?;

  if args.tokens {
    for token in culebra::syntax::lexer::lex(&src) {
      println!(
        "{:>4}:{:<4} {:?} {:?}",
        token.line, token.column, token.kind, token.lexeme
      );
    }
    return Ok(ExitCode::SUCCESS);
  }

  match culebra::compile(&src) {
    Ok(js) => {
      let output = args.output.unwrap_or_else(|| file.with_extension("js"));
      fs::write(&output, &js)
        .with_context(|| format!("could not write `{}`", output.display()))?;
      println!("{} -> {}", file.display(), output.display());
      Ok(ExitCode::SUCCESS)
    }
    Err(error) => {
      report(&error, &src);
      Ok(ExitCode::FAILURE)
    }
  }
}

fn report(error: &Error, src: &str) {
  match error {
    Error::Syntax(e) => eprintln!("Syntax error: {}", e.report(src, true).trim_end()),
    error => eprintln!("{error}"),
  }
}
