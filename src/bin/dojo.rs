use std::io;

use clap::{Parser, Subcommand};

use dojo::{DojoError, Repl, Runner};

#[derive(Parser)]
#[command(author, version, about = "Guided tour of language fundamentals")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full demonstration catalogue
    Tour,
    /// List the sections of the catalogue
    List,
    /// Run a single section by name
    Section { name: String },
    /// Browse the catalogue interactively
    Repl,
}

fn main() -> Result<(), DojoError> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Tour) {
        Command::Tour => Runner::new().write_to(&mut io::stdout().lock()),
        Command::List => {
            let runner = Runner::new();
            for name in runner.section_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Section { name } => {
            let runner = Runner::new();
            for line in runner.section(&name)?.render()? {
                println!("{line}");
            }
            Ok(())
        }
        Command::Repl => {
            let mut repl = Repl::new();
            repl.run()
        }
    }
}
