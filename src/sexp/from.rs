use super::Sexp;

/// Construct a proper list from a sequence of expressions.
///
/// # Example
/// ```
/// use burdock::{sexp, Sexp};
///
/// assert_eq!(sexp!["a", "b", "c"], "(a b c)".parse::<Sexp>().unwrap());
/// ```
#[macro_export]
macro_rules! sexp {
    ( $( $e:expr ),* ) => {{
        $crate::Sexp::from(&[ $( $crate::Sexp::from($e) ),* ][..])
    }};
}

impl From<&str> for Sexp {
    fn from(sym: &str) -> Self {
        Self::sym(sym)
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        if b {
            Self::t()
        } else {
            Self::nil()
        }
    }
}

impl From<()> for Sexp {
    fn from(_: ()) -> Self {
        Self::nil()
    }
}

impl From<&[Sexp]> for Sexp {
    fn from(ary: &[Sexp]) -> Self {
        ary.iter().cloned().collect()
    }
}
