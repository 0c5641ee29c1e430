use std::str::FromStr;

use log::debug;

use super::Sexp;
use super::{Error, Result};

mod tests;

/// Whitespace between tokens: space, tab, carriage return, line feed.
const WS: &[char] = &[' ', '\t', '\r', '\n'];

/// The transient dot token. It scans like any other atom but never survives
/// parsing: a well-placed dot marks the tail of a pair and is dropped.
const DOT: &str = ".";

fn is_separator(c: char) -> bool {
    c == '(' || c == ')' || WS.contains(&c)
}

fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start_matches(WS);
    if s.is_empty() {
        return ("", "");
    }

    // paren or quote
    if s.starts_with('(') || s.starts_with(')') || s.starts_with('\'') {
        return (&s[..1], &s[1..]);
    }

    // atom (a leading quote starts a form, but an embedded one is just a byte)
    let pos = s.find(is_separator).unwrap_or_else(|| s.len());
    (&s[..pos], &s[pos..])
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    OpenParen,
    CloseParen,
    Quote,
    Atom(String),
}

fn lex(mut s: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    loop {
        let (tok, rest) = next_token(s);
        s = rest;
        match tok {
            "" => break,
            "(" => tokens.push(Token::OpenParen),
            ")" => tokens.push(Token::CloseParen),
            "'" => tokens.push(Token::Quote),
            atom => tokens.push(Token::Atom(atom.into())),
        }
    }

    tokens
}

fn next_sexp(tokens: &[Token]) -> ::std::result::Result<(Sexp, &[Token]), Error> {
    match tokens.split_first() {
        None => Err(Error::UnexpectedEnd),
        Some((Token::Quote, rest)) => {
            let (quoted, rest) = next_sexp(rest)?;
            Ok((Sexp::nil().cons(quoted).cons(Sexp::sym("quote")), rest))
        }
        Some((Token::Atom(s), rest)) => Ok((Sexp::sym(s), rest)),
        Some((Token::OpenParen, _)) => parse_list(tokens),
        Some((Token::CloseParen, _)) => Err(Error::Syntax {
            exp: "unexpected `)`".to_string(),
        }),
    }
}

fn parse_list(tokens: &[Token]) -> ::std::result::Result<(Sexp, &[Token]), Error> {
    // find the matching close paren
    let mut idx = 1;
    let mut n = 1;

    for tok in &tokens[1..] {
        match *tok {
            Token::OpenParen => n += 1,
            Token::CloseParen => n -= 1,
            _ => (),
        }

        if n == 0 {
            break;
        }
        idx += 1;
    }

    if n != 0 {
        return Err(Error::UnexpectedEnd);
    }

    let mut inner = &tokens[1..idx];
    let mut elems = Vec::new();

    while !inner.is_empty() {
        let (exp, rest) = next_sexp(inner)?;
        inner = rest;
        elems.push(exp);
    }

    Ok((assemble(elems)?, &tokens[idx + 1..]))
}

/// Turn the elements of one paren form into a value. A dot atom may appear
/// with at least one element before it and exactly one expression after it,
/// making that expression the tail; anywhere else it is malformed.
fn assemble(elems: Vec<Sexp>) -> ::std::result::Result<Sexp, Error> {
    let dot = Sexp::sym(DOT);

    match elems.iter().position(|e| e.same_atom(&dot)) {
        None => Ok(elems.into_iter().collect()),
        Some(i) if i > 0 && i + 2 == elems.len() => {
            let tail = elems[elems.len() - 1].clone();
            Ok(elems[..i].iter().cloned().rev().fold(tail, Sexp::cons))
        }
        Some(_) => Err(Error::Syntax {
            exp: "misplaced `.`".to_string(),
        }),
    }
}

impl FromStr for Sexp {
    type Err = Error;

    /// Read the first complete expression; anything after it is left
    /// unread, which is how the interactive loop peels one form per line.
    fn from_str(s: &str) -> Result {
        let tokens = lex(s);
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (expr, _) = next_sexp(&tokens)?;
        debug!("read expression: {}", expr);
        Ok(expr)
    }
}

impl Sexp {
    /// Read every expression in the buffer, in order.
    ///
    /// # Example
    /// ```
    /// use burdock::Sexp;
    ///
    /// let forms = Sexp::parse_all("(a) b '(c)").unwrap();
    /// assert_eq!(forms.len(), 3);
    /// ```
    pub fn parse_all(src: &str) -> ::std::result::Result<Vec<Self>, Error> {
        let tokens = lex(src);
        let mut rest = &tokens[..];
        let mut forms = Vec::new();

        while !rest.is_empty() {
            let (expr, remaining) = next_sexp(rest)?;
            rest = remaining;
            forms.push(expr);
        }

        debug!("read {} forms", forms.len());
        Ok(forms)
    }
}
