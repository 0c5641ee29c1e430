use std::fmt::{self, Write};

use super::Sexp::{self, Atom, Pair};

/// List notation: chains of pairs print space-separated, a pair tail that is
/// neither a pair nor `nil` prints after a dot, and a `quote` applied to
/// exactly one expression collapses to the `'` shorthand.
impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom(s) => write!(f, "{}", s),
            Pair { head, tail } => {
                if let Atom(q) = &**head {
                    if &**q == "quote" {
                        if let Pair { head: quoted, tail: rest } = &**tail {
                            if rest.is_nil() {
                                return write!(f, "'{}", quoted);
                            }
                        }
                    }
                }
                write!(f, "({}", head)?;
                write_tail(f, tail)
            }
        }
    }
}

fn write_tail(f: &mut fmt::Formatter, exp: &Sexp) -> fmt::Result {
    let mut exp = exp;
    loop {
        match exp {
            Pair { head, tail } => {
                write!(f, " {}", head)?;
                exp = tail;
            }
            atom if atom.is_nil() => return write!(f, ")"),
            atom => return write!(f, " . {})", atom),
        }
    }
}

/// Dot notation: every pair fully parenthesised, both components spelled
/// out. Verbose, but free of special cases.
impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom(s) => write!(f, "{}", s),
            Pair { head, tail } => write!(f, "({:?} . {:?})", head, tail),
        }
    }
}

/// A `fmt::Write` sink that stores up to a fixed number of bytes and counts
/// everything it was asked to write.
struct BoundedBuf<'a> {
    out: &'a mut String,
    capacity: usize,
    required: usize,
}

impl fmt::Write for BoundedBuf<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        let room = self.capacity.saturating_sub(self.out.len());
        if room > 0 {
            let mut end = s.len().min(room);
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            self.out.push_str(&s[..end]);
        }
        Ok(())
    }
}

impl Sexp {
    /// Render in list notation, never growing `out` past `capacity` bytes.
    /// Returns the length a complete rendering needs, so callers can detect
    /// truncation the way `snprintf` reports it.
    pub fn print_list(&self, out: &mut String, capacity: usize) -> usize {
        let mut buf = BoundedBuf {
            out,
            capacity,
            required: 0,
        };
        let _ = write!(buf, "{}", self);
        buf.required
    }

    /// Render in dot notation, with the same bounded contract as
    /// [`print_list`](#method.print_list).
    pub fn print_dot(&self, out: &mut String, capacity: usize) -> usize {
        let mut buf = BoundedBuf {
            out,
            capacity,
            required: 0,
        };
        let _ = write!(buf, "{:?}", self);
        buf.required
    }
}
