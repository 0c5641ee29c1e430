#![cfg(test)]

use crate::sexp;
use crate::{Error, Sexp};

fn do_parse_and_assert(test_val: &str, expected_val: Sexp) {
    let test_parsed = test_val.parse::<Sexp>().unwrap();
    assert_eq!(test_parsed, expected_val);
}

#[test]
fn empty_list_is_nil() {
    do_parse_and_assert("()", Sexp::nil());
    do_parse_and_assert("( )", Sexp::nil());
    do_parse_and_assert("(\t\r\n)", Sexp::nil());
}

#[test]
fn bare_atoms() {
    do_parse_and_assert("hello", Sexp::sym("hello"));
    do_parse_and_assert("  t", Sexp::t());
    do_parse_and_assert("nil", Sexp::nil());
}

#[test]
fn list_of_atoms() {
    do_parse_and_assert(
        "(a bc de fgh ijk l mnop)",
        sexp!["a", "bc", "de", "fgh", "ijk", "l", "mnop"],
    );
}

#[test]
fn nested_lists() {
    do_parse_and_assert("(() () ())", sexp![(), (), ()]);
    do_parse_and_assert("(a (b (c)) d)", sexp!["a", sexp!["b", sexp!["c"]], "d"]);
}

#[test]
fn quote_shorthand() {
    do_parse_and_assert("'a", sexp!["quote", "a"]);
    do_parse_and_assert("(quote a)", sexp!["quote", "a"]);
    do_parse_and_assert(
        "'(a b c d)",
        Sexp::nil()
            .cons(sexp!["a", "b", "c", "d"])
            .cons(Sexp::sym("quote")),
    );
    do_parse_and_assert("''a", sexp!["quote", sexp!["quote", "a"]]);
}

#[test]
fn dotted_pairs() {
    do_parse_and_assert("(a . b)", Sexp::sym("b").cons(Sexp::sym("a")));
    do_parse_and_assert("(a . b )", Sexp::sym("b").cons(Sexp::sym("a")));
    do_parse_and_assert(
        "(a b . c)",
        Sexp::sym("c").cons(Sexp::sym("b")).cons(Sexp::sym("a")),
    );
}

#[test]
fn dot_notation_input() {
    do_parse_and_assert("(quote . (a . nil))", sexp!["quote", "a"]);
    do_parse_and_assert("(a . (b . (c . nil)))", sexp!["a", "b", "c"]);
}

#[test]
fn absent_input() {
    assert!(matches!("".parse::<Sexp>(), Err(Error::EmptyInput)));
    assert!(matches!("  \t\r\n".parse::<Sexp>(), Err(Error::EmptyInput)));
}

#[test]
fn unclosed_forms_end_the_read() {
    assert!(matches!("(a b".parse::<Sexp>(), Err(Error::UnexpectedEnd)));
    assert!(matches!("'".parse::<Sexp>(), Err(Error::UnexpectedEnd)));
}

#[test]
fn trailing_input_is_left_unread() {
    do_parse_and_assert("a b c", Sexp::sym("a"));
    do_parse_and_assert("(a) (b)", sexp!["a"]);
}

#[test]
fn misplaced_dots_are_rejected() {
    assert!("(. a)".parse::<Sexp>().is_err());
    assert!("(a . b c)".parse::<Sexp>().is_err());
    assert!("(a .)".parse::<Sexp>().is_err());
}

#[test]
fn parse_all_peels_every_form() {
    let forms = Sexp::parse_all("(a) b '(c)").unwrap();
    assert_eq!(forms.len(), 3);
    assert_eq!(forms[1], Sexp::sym("b"));

    assert!(Sexp::parse_all("   ").unwrap().is_empty());
}
