use anyhow::Result;
use culebra::Error;
use rustyline::error::ReadlineError;
use rustyline::Editor;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read blocks of source terminated by an empty line, compile each one,
/// and print the JavaScript or the error report.
pub fn run() -> Result<()> {
  let mut editor = Editor::<()>::new()?;

  println!("culebra v{VERSION}");
  println!("Finish a block with an empty line; press CTRL-D to exit.");

  loop {
    let mut buffer = String::new();
    loop {
      let prompt = if buffer.is_empty() { ">>> " } else { "... " };
      let line = match editor.readline(prompt) {
        Ok(line) => line,
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
        Err(e) => return Err(e.into()),
      };

      if line.trim().is_empty() {
        if buffer.is_empty() {
          continue;
        }
        break;
      }

      editor.add_history_entry(line.as_str());
      buffer.push_str(&line);
      buffer.push('\n');
    }

    match culebra::compile(&buffer) {
      Ok(js) => println!("{js}"),
      Err(Error::Syntax(e)) => {
        println!("Syntax error: {}", e.report(&buffer, true).trim_end())
      }
      Err(error) => println!("{error}"),
    }
  }
}
