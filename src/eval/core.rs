use std::collections::HashSet;

use super::*;
use crate::term::Node::{*};
use crate::term::{cell_contents, fill, get, is_value, new_cell, Graph};

// Which slot of an application the descent went into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
  Fun,
  Arg,
}

// The subterm the next step rewrites.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Redex {
  // A reference whose cell holds `val`.
  Deref { val: Term },
  // The application `at` of the abstraction `lam` to `arg`.
  Beta { at: Term, lam: Term, arg: Term },
}

// Finds the leftmost-outermost subterm that steps, without changing anything. Returns it with the
// applications above it, innermost last. The path lives on the heap, so long spines don't grow the
// call stack, and an application met again while it is still on the path is a cycle.
fn locate(graph: &Graph, root: Term) -> Result<Option<(Vec<(Term, Side)>, Redex)>, EvalError> {
  let mut path: Vec<(Term, Side)> = vec![];
  let mut open: HashSet<Term> = HashSet::new();
  let mut term = root;
  loop {
    match get(graph, term) {
      Var { var } => {
        if let Some(val) = cell_contents(graph, var) {
          return Ok(Some((path, Redex::Deref { val })));
        }
      }
      App { fun, .. } => {
        if !open.insert(term) {
          return Err(EvalError::CyclicApplication { app: term, term: root });
        }
        path.push((term, Side::Fun));
        term = fun;
        continue;
      }
      Lam { .. } | Con { .. } => {}
    }
    // `term` doesn't step: back up to the first application with a side left to try.
    loop {
      let Some((app, side)) = path.pop() else {
        return Ok(None);
      };
      let App { fun, arg } = get(graph, app) else {
        unreachable!("locate: {} on the path is not an application", app);
      };
      if side == Side::Fun {
        path.push((app, Side::Arg));
        term = arg;
        break;
      }
      open.remove(&app);
      if let Lam { .. } = get(graph, fun) {
        return Ok(Some((path, Redex::Beta { at: app, lam: fun, arg })));
      }
    }
  }
}

// Attempts one reduction step. Returns the term to continue with, or `None` if `term` is in weak
// normal form. Applications are rewritten in place, so a congruence step returns `term` itself.
pub fn step(graph: &mut Graph, term: Term) -> Result<Option<Term>, EvalError> {
  Ok(reduce(graph, term)?.map(|(next, _)| next))
}

// Same as `step`, also returning the rule that fired.
//
// Priority is the function side, then the argument, then the redex itself. A redex fills the
// binder's cell and continues with the body. Cells are filled once: applying an abstraction whose
// cell is already taken fails with `SharedBinder` and leaves the graph as it was.
pub fn reduce(graph: &mut Graph, term: Term) -> Result<Option<(Term, Rule)>, EvalError> {
  let Some((path, redex)) = locate(graph, term)? else {
    return Ok(None);
  };
  let (next, rule) = match redex {
    // One dereference; chains of filled cells take one step each.
    Redex::Deref { val } => (val, Rule::Deref),
    Redex::Beta { at, lam, arg } => {
      let Lam { var, bod: Some(bod) } = get(graph, lam) else {
        panic!("reduce: abstraction {} has no body", lam);
      };
      if cell_contents(graph, var).is_some() {
        return Err(EvalError::SharedBinder { lam, term });
      }
      fill(graph, var, arg);
      // The redex becomes a reference to its result, so other paths into it read the body
      // instead of firing the abstraction again.
      let done = new_cell(graph);
      fill(graph, done, bod);
      graph.nodes[at.index()] = Var { var: done };
      (bod, Rule::Beta)
    }
  };
  match path.last() {
    Some(&(app, side)) => {
      let App { fun, arg } = get(graph, app) else {
        unreachable!("reduce: {} on the path is not an application", app);
      };
      graph.nodes[app.index()] = match side {
        Side::Fun => App { fun: next, arg },
        Side::Arg => App { fun, arg: next },
      };
      Ok(Some((term, rule)))
    }
    None => Ok(Some((next, rule))),
  }
}

// Checks, without reducing anything, whether `term` is not yet in weak normal form. A term whose
// next step would fail counts as one that still steps.
pub fn can_step(graph: &Graph, term: Term) -> bool {
  !matches!(locate(graph, term), Ok(None))
}

// Tells a proper value from a stuck application. Meant for terms `step` leaves alone.
pub fn classify(graph: &Graph, term: Term) -> Outcome {
  if is_value(graph, term) {
    Outcome::Value
  } else {
    Outcome::Stuck
  }
}

// Steps `term` until it reaches weak normal form. Doesn't return if `term` diverges.
pub fn evaluate(graph: &mut Graph, term: Term) -> Result<Term, EvalError> {
  let mut term = term;
  while let Some(next) = step(graph, term)? {
    term = next;
  }
  Ok(term)
}

// Like `evaluate`, calling `observe` with the iteration number and the current term before each
// step, and counting the rules that fired.
pub fn evaluate_with<F>(graph: &mut Graph, term: Term, mut observe: F) -> Result<Normal, EvalError>
where
  F: FnMut(&Graph, u64, Term),
{
  let mut stats = Stats::default();
  let mut term = term;
  loop {
    observe(graph, stats.steps, term);
    match reduce(graph, term)? {
      Some((next, rule)) => {
        stats.record(rule);
        term = next;
      }
      None => return Ok(Normal { term, stats }),
    }
  }
}

// Like `evaluate_with`, failing once `limit` steps were taken and the term can still step.
pub fn evaluate_bounded<F>(graph: &mut Graph, term: Term, limit: u64, mut observe: F) -> Result<Normal, EvalError>
where
  F: FnMut(&Graph, u64, Term),
{
  let mut stats = Stats::default();
  let mut term = term;
  loop {
    observe(graph, stats.steps, term);
    if stats.steps >= limit && can_step(graph, term) {
      return Err(EvalError::StepLimitExceeded { limit, term });
    }
    match reduce(graph, term)? {
      Some((next, rule)) => {
        stats.record(rule);
        term = next;
      }
      None => return Ok(Normal { term, stats }),
    }
  }
}
