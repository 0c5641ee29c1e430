use log::trace;

use crate::{Result, Sexp};

/// Evaluate every element of `args`, producing the list of argument values
/// in order.
pub(super) fn eval_list(args: &Sexp, env: &Sexp) -> Result {
    args.iter().map(|a| a.eval(env)).collect()
}

/// Walk clauses of the shape `(predicate consequent)`, evaluating
/// predicates until one yields `t`, then evaluate only that clause's
/// consequent. No matching clause is `nil`.
pub(super) fn eval_cond(clauses: &Sexp, env: &Sexp) -> Result {
    for clause in clauses.iter() {
        let test = clause.car()?.eval(env)?;
        if test.is_true() {
            trace!("selected clause {}", clause);
            return clause.cdr()?.car()?.eval(env);
        }
    }

    Ok(Sexp::nil())
}
