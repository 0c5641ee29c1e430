use std::fs;
use std::io::{self, Read, Result};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use burdock::prelude::*;

mod repl;

const OUT_CAPACITY: usize = 1_000;

#[derive(Debug, Parser)]
#[clap(about = "An interactive Roots of Lisp interpreter")]
struct Cli {
    /// Enter interactive REPL after evaluating file or stdin
    #[clap(short = 'i', long = "interactive")]
    force_interactive: bool,
    /// Read and evaluate code from stdin
    #[clap(short = 's', long = "stdin")]
    read_stdin: bool,
    /// Read and evaluate code from file
    #[clap(parse(from_os_str))]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let code = if let Some(f_name) = args.file {
        info!("Reading source from {}", f_name.display());
        fs::read_to_string(&f_name)?
    } else if args.read_stdin {
        let mut code_buffer = String::new();
        io::stdin().read_to_string(&mut code_buffer)?;
        code_buffer
    } else {
        String::new()
    };

    if !code.is_empty() {
        run_source(&code);
    }

    if code.is_empty() || args.force_interactive {
        if let Err(error) = repl::repl() {
            eprintln!("{}", error);
        }
    }

    Ok(())
}

/// Evaluate every form in the buffer, each under the empty environment.
fn run_source(code: &str) {
    match Sexp::parse_all(code) {
        Ok(forms) => {
            for form in forms {
                match form.eval(&Sexp::nil()) {
                    Ok(result) => {
                        let mut out = String::new();
                        result.print_list(&mut out, OUT_CAPACITY);
                        println!("{}", out);
                    }
                    Err(error) => eprintln!("{}", error),
                }
            }
        }
        Err(error) => eprintln!("{}", error),
    }
}
