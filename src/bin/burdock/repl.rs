use rustyline::error::ReadlineError;
use rustyline::Editor;

use burdock::{Error, Sexp};

use crate::OUT_CAPACITY;

const REPL_PROMPT: &str = "> ";
const QUIT_FORM: &str = "(quit)";
const REPL_WELCOME_MSG: &str = concat!(
    "Welcome to BURDOCK v",
    env!("CARGO_PKG_VERSION"),
    ". Enter (quit) to leave."
);

pub fn repl() -> Result<(), ReadlineError> {
    println!("{}", REPL_WELCOME_MSG);

    let mut rl = Editor::<()>::new()?;

    loop {
        match rl.readline(REPL_PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                if line.trim() == QUIT_FORM {
                    break Ok(());
                }
                // every line starts from the empty environment
                match line.parse::<Sexp>() {
                    Ok(expr) => match expr.eval(&Sexp::nil()) {
                        Ok(result) => {
                            let mut out = String::new();
                            result.print_list(&mut out, OUT_CAPACITY);
                            println!("{}", out);
                        }
                        Err(error) => println!("{}", error),
                    },
                    Err(Error::EmptyInput) => continue,
                    Err(error) => println!("{}", error),
                }
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break Ok(()),
            Err(error) => break Err(error),
        }
    }
}
