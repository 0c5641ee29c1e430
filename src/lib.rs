//! A parsing and evaluation framework for the Lisp of McCarthy's
//! "Recursive Functions of Symbolic Expressions" paper: the seven-operator
//! dialect Paul Graham reconstructs in *The Roots of Lisp*.
//!
//! Every value is a symbolic expression: an atom (an uninterpreted symbol)
//! or a pair of two expressions. Environments are association lists and are
//! themselves expressions, so the whole machine is three small pieces: a
//! reader, a printer, and `eval`.
//!
//! # Example
//! ```
//! use burdock::prelude::*;
//!
//! let env = Sexp::nil();
//!
//! let expr = "(cons 'a '(b c))".parse::<Sexp>().unwrap();
//! assert_eq!(expr.eval(&env).unwrap().to_string(), "(a b c)");
//!
//! let expr = "((lambda (x y) (cons x (cdr y))) 'z '(a b c))"
//!     .parse::<Sexp>()
//!     .unwrap();
//! assert_eq!(expr.eval(&env).unwrap().to_string(), "(z b c)");
//! ```

mod errors;
mod sexp;
mod utils;

pub use self::errors::Error;
pub use self::sexp::{Iter, Sexp};
pub use self::utils::{append, assoc, pair};

/// The result of reading or evaluating an expression.
pub type Result = std::result::Result<Sexp, Error>;

/// Quick access to the important stuff.
pub mod prelude {
    pub use super::{Error, Result, Sexp};
}
