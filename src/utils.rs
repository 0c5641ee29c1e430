//! Environment plumbing for the evaluator: building association lists and
//! searching them. These are ordinary list functions; environments are
//! plain expressions, so they can be printed, quoted and consed like
//! anything else.

use crate::Sexp;

/// Look `key` up in an association list of `(key . value)` pairs. An
/// unbound atom comes back unchanged, which is what makes unbound atoms
/// self-evaluating.
///
/// # Example
/// ```
/// use burdock::{assoc, pair, Sexp};
///
/// let env = pair(
///     &"(value key)".parse::<Sexp>().unwrap(),
///     &"(3 definition)".parse::<Sexp>().unwrap(),
/// );
/// assert_eq!(assoc(&Sexp::sym("key"), &env), Sexp::sym("definition"));
/// assert_eq!(assoc(&Sexp::sym("other"), &env), Sexp::sym("other"));
/// ```
pub fn assoc(key: &Sexp, map: &Sexp) -> Sexp {
    let mut rest = map;

    while let Sexp::Pair { head, tail } = rest {
        if let Sexp::Pair { head: k, tail: v } = &**head {
            if k.same_atom(key) {
                return (**v).clone();
            }
        }
        rest = tail;
    }

    key.clone()
}

/// Zip keys with values into an association list:
/// `((k1 . v1) (k2 . v2) ...)`. Pairing stops the moment either side is no
/// longer a pair, so a length mismatch or a dotted tail silently drops the
/// remainder.
pub fn pair(keys: &Sexp, values: &Sexp) -> Sexp {
    let mut entries = Vec::new();
    let mut keys = keys;
    let mut values = values;

    while let (Sexp::Pair { head: k, tail: kt }, Sexp::Pair { head: v, tail: vt }) =
        (keys, values)
    {
        entries.push((**v).clone().cons((**k).clone()));
        keys = kt;
        values = vt;
    }

    entries.into_iter().collect()
}

/// Concatenate two lists; `b` becomes the tail of the result.
pub fn append(a: &Sexp, b: &Sexp) -> Sexp {
    let elems: Vec<Sexp> = a.iter().cloned().collect();
    elems.into_iter().rev().fold(b.clone(), Sexp::cons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexp;

    #[test]
    fn assoc_on_the_empty_map_is_identity() {
        let key = Sexp::sym("k");
        assert_eq!(assoc(&key, &Sexp::nil()), key);
    }

    #[test]
    fn assoc_takes_the_frontmost_binding() {
        let env = pair(&sexp!["x", "y", "x"], &sexp!["a", "b", "c"]);
        assert_eq!(assoc(&Sexp::sym("x"), &env), Sexp::sym("a"));
        assert_eq!(assoc(&Sexp::sym("y"), &env), Sexp::sym("b"));
        assert_eq!(assoc(&Sexp::sym("z"), &env), Sexp::sym("z"));
    }

    #[test]
    fn pair_zips_and_truncates() {
        let map = pair(&sexp!["a", "b", "c"], &sexp!["1", "2"]);
        assert_eq!(map.to_string(), "((a . 1) (b . 2))");

        assert_eq!(pair(&Sexp::nil(), &Sexp::nil()), Sexp::nil());
        assert_eq!(pair(&sexp!["a"], &Sexp::nil()), Sexp::nil());
    }

    #[test]
    fn pair_stops_at_a_dotted_tail() {
        let map = pair(
            &"(x . y)".parse::<Sexp>().unwrap(),
            &"(1 2)".parse::<Sexp>().unwrap(),
        );
        assert_eq!(map.to_string(), "((x . 1))");

        let map = pair(
            &"(x y)".parse::<Sexp>().unwrap(),
            &"(1 . 2)".parse::<Sexp>().unwrap(),
        );
        assert_eq!(map.to_string(), "((x . 1))");
    }

    #[test]
    fn append_identities() {
        let xs = sexp!["a", "b"];
        assert_eq!(append(&Sexp::nil(), &xs), xs);
        assert_eq!(append(&xs, &Sexp::nil()), xs);
        assert_eq!(append(&xs, &sexp!["c", "d"]).to_string(), "(a b c d)");
    }
}
