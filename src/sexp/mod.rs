#[macro_use]
mod from;

mod display;
mod eval;
mod iter;
mod parse;

use std::rc::Rc;

use super::{Error, Result};

use self::Sexp::{Atom, Pair};

pub use self::iter::Iter;

/// A symbolic expression. Can be parsed from a string via `FromStr`, or
/// constructed programmatically.
///
/// An atom is an immutable, non-empty symbol with no further meaning; a pair
/// holds two expressions. Lists are chains of pairs ending in the atom
/// `nil`, which is an ordinary atom rather than a distinct value.
///
/// # Examples
/// ```
/// use burdock::Sexp;
/// let empty = "()".parse::<Sexp>().unwrap();
/// assert_eq!(empty, Sexp::nil());
/// ```
/// ```
/// use burdock::Sexp;
/// let parsed = "hello".parse::<Sexp>().unwrap();
/// assert_eq!(parsed, Sexp::sym("hello"));
/// ```
#[derive(PartialEq, Clone)]
pub enum Sexp {
    Atom(Rc<str>),
    Pair { head: Rc<Sexp>, tail: Rc<Sexp> },
}

impl Sexp {
    /// Convenience method to build an atom.
    pub fn sym(sym: &str) -> Self {
        debug_assert!(!sym.is_empty(), "atoms carry at least one byte");
        Atom(Rc::from(sym))
    }

    /// The atom `nil`: lisp's "false" and its empty list.
    pub fn nil() -> Self {
        thread_local! {
            static NIL: Rc<str> = Rc::from("nil");
        }
        Atom(NIL.with(Rc::clone))
    }

    /// The atom `t`: canonical truth.
    pub fn t() -> Self {
        thread_local! {
            static T: Rc<str> = Rc::from("t");
        }
        Atom(T.with(Rc::clone))
    }

    /// The natural way to build up a list - from the end to the beginning.
    ///
    /// # Example
    /// ```
    /// use burdock::Sexp;
    ///
    /// let list = Sexp::nil()
    ///     .cons(Sexp::sym("c"))
    ///     .cons(Sexp::sym("b"))
    ///     .cons(Sexp::sym("a"));
    /// assert_eq!(list.to_string(), "(a b c)");
    /// ```
    pub fn cons(self, exp: Self) -> Self {
        Pair {
            head: Rc::new(exp),
            tail: Rc::new(self),
        }
    }

    fn split(&self) -> ::std::result::Result<(Self, Self), Error> {
        match self {
            Atom(_) => Err(Error::NotAPair {
                atom: self.to_string(),
            }),
            Pair { head, tail } => Ok(((**head).clone(), (**tail).clone())),
        }
    }

    /// The first component of a pair. Projecting an atom is a fault.
    pub fn car(&self) -> Result {
        Ok(self.split()?.0)
    }

    /// The rest component of a pair. Projecting an atom is a fault.
    pub fn cdr(&self) -> Result {
        Ok(self.split()?.1)
    }

    /// Whether this expression is an atom.
    pub fn is_atom(&self) -> bool {
        if let Atom(_) = self {
            true
        } else {
            false
        }
    }

    /// Whether this expression is the atom `nil`.
    pub fn is_nil(&self) -> bool {
        if let Atom(s) = self {
            &**s == "nil"
        } else {
            false
        }
    }

    /// Bridge into a host boolean: only the atom `t` counts as true.
    pub fn is_true(&self) -> bool {
        if let Atom(s) = self {
            &**s == "t"
        } else {
            false
        }
    }

    /// Atom identity: true when both expressions are atoms spelled the same
    /// way. Pairs are never identical, even to themselves; comparing whole
    /// trees is what `==` is for.
    ///
    /// # Example
    /// ```
    /// use burdock::Sexp;
    ///
    /// assert!(Sexp::sym("a").same_atom(&Sexp::sym("a")));
    ///
    /// let pair = Sexp::sym("b").cons(Sexp::sym("a"));
    /// assert!(!pair.same_atom(&pair.clone()));
    /// ```
    pub fn same_atom(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom(a), Atom(b)) => Rc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }

    pub(crate) fn as_sym(&self) -> Option<&str> {
        if let Atom(s) = self {
            Some(s)
        } else {
            None
        }
    }
}
