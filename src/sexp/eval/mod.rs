mod helpers;

use log::trace;

use crate::utils::{append, assoc, pair};

use self::helpers::{eval_cond, eval_list};
use super::Result;
use super::Sexp::{self, Atom, Pair};

impl Sexp {
    /// Reduce an expression to a value under an environment of bindings.
    ///
    /// The environment is itself an expression: a list of `(key . value)`
    /// pairs searched front to back. An atom with no binding evaluates to
    /// itself. Functions see the environment of their caller, extended with
    /// their argument bindings; there is no capture at definition time.
    ///
    /// # Examples
    /// ```
    /// use burdock::prelude::*;
    ///
    /// let expr: Sexp = "(cond ((eq 'a 'b) 'first) ((atom 'a) 'second))"
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(expr.eval(&Sexp::nil()).unwrap(), Sexp::sym("second"));
    /// ```
    /// ```
    /// use burdock::prelude::*;
    ///
    /// let expr: Sexp = "unbound".parse().unwrap();
    /// assert_eq!(expr.eval(&Sexp::nil()).unwrap(), Sexp::sym("unbound"));
    /// ```
    pub fn eval(&self, env: &Self) -> Result {
        let mut expr = self.clone();
        let mut env = env.clone();

        // The operator-lookup, label and lambda cases re-enter eval in tail
        // position; looping keeps those off the host stack.
        loop {
            let (op, args) = match &expr {
                Atom(_) => return Ok(assoc(&expr, &env)),
                Pair { head, tail } => ((**head).clone(), (**tail).clone()),
            };

            match &op {
                Atom(name) => match &**name {
                    "quote" => return args.car(),
                    "atom" => return Ok(Self::from(args.car()?.eval(&env)?.is_atom())),
                    "eq" => {
                        let lhs = args.car()?.eval(&env)?;
                        let rhs = args.cdr()?.car()?.eval(&env)?;
                        return Ok(Self::from(lhs.same_atom(&rhs)));
                    }
                    "car" => return args.car()?.eval(&env)?.car(),
                    "cdr" => return args.car()?.eval(&env)?.cdr(),
                    "cons" => {
                        let head = args.car()?.eval(&env)?;
                        let tail = args.cdr()?.car()?.eval(&env)?;
                        return Ok(tail.cons(head));
                    }
                    "cond" => return eval_cond(&args, &env),
                    _ => {
                        // a named function: swap the name for its binding
                        trace!("resolving operator {}", name);
                        let target = assoc(&op, &env);
                        if target.same_atom(&op) {
                            return Err(crate::Error::NotAProcedure {
                                exp: name.to_string(),
                            });
                        }
                        expr = args.cons(target);
                    }
                },
                Pair { head: kind, tail: def } => match kind.as_sym() {
                    Some("label") => {
                        // (label name body): the name resolves to the body
                        // while the body runs, and nowhere else
                        let name = def.car()?;
                        let body = def.cdr()?.car()?;
                        trace!("labelling {}", name);
                        env = env.cons(body.clone().cons(name));
                        expr = args.cons(body);
                    }
                    Some("lambda") => {
                        let params = def.car()?;
                        let body = def.cdr()?.car()?;
                        let values = eval_list(&args, &env)?;
                        env = append(&pair(&params, &values), &env);
                        expr = body;
                    }
                    _ => return Ok(Self::nil()),
                },
            }
        }
    }
}
