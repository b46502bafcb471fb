use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    diagnostics::{DojoError, Result},
    runner::Runner,
};

/// Interactive browser over the section catalogue.
pub struct Repl {
    runner: Runner,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            runner: Runner::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().map_err(|err| {
            DojoError::from(std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;
        println!("type `list`, `run <section>`, `all`, or `:quit`");
        loop {
            match editor.readline(">> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed == ":quit" || trimmed == ":exit" {
                        break;
                    }
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    if let Err(err) = self.dispatch(trimmed) {
                        eprintln!("error: {err}");
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    return Err(DojoError::from(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        err,
                    )));
                }
            }
        }
        Ok(())
    }

    fn dispatch(&self, input: &str) -> Result<()> {
        match input.split_once(' ') {
            None if input == "list" => {
                for section in self.runner.sections() {
                    println!("{}", section.name());
                    for demo in section.demos() {
                        println!("  {}", demo.label());
                    }
                }
                Ok(())
            }
            None if input == "all" => {
                for line in Runner::new().run() {
                    println!("{}", line?);
                }
                Ok(())
            }
            Some(("run", name)) => {
                for line in self.runner.section(name.trim())?.render()? {
                    println!("{line}");
                }
                Ok(())
            }
            _ => {
                eprintln!("unknown command `{input}`");
                Ok(())
            }
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
