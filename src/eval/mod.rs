// Normal-order reduction of terms in place. A step rewrites the leftmost-outermost redex; the
// driver loop repeats it until no step applies.

mod core;

pub use self::core::*;

use crate::term::Term;
use std::fmt;

// The leaf rule a step fired. Congruence steps (reducing inside an application) report the rule
// that fired below them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rule {
  // A reference to a filled cell stepped to the cell's contents.
  Deref,
  // A redex fired.
  Beta,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Stats {
  pub steps: u64,
  pub betas: u64,
  pub derefs: u64,
}

impl Stats {
  pub fn record(&mut self, rule: Rule) {
    self.steps += 1;
    match rule {
      Rule::Deref => self.derefs += 1,
      Rule::Beta => self.betas += 1,
    }
  }
}

// A term that doesn't step anymore, with the counts of how it got there.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Normal {
  pub term: Term,
  pub stats: Stats,
}

// What kind of normal form a term is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
  // An abstraction, a constant, or a reference to an empty cell.
  Value,
  // An application whose function side is a value but not an abstraction.
  Stuck,
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Outcome::Value => "value",
      Outcome::Stuck => "stuck",
    })
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvalError {
  // The step budget ran out; `term` is where evaluation stopped.
  StepLimitExceeded { limit: u64, term: Term },
  // The abstraction `lam` was applied again after its cell was filled.
  SharedBinder { lam: Term, term: Term },
  // The application `app` is nested inside itself, so it has no leftmost-outermost redex.
  CyclicApplication { app: Term, term: Term },
}

impl fmt::Display for EvalError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      EvalError::StepLimitExceeded { limit, term } => {
        write!(f, "no normal form within {} steps (stopped at {})", limit, term)
      }
      EvalError::SharedBinder { lam, term } => {
        write!(f, "abstraction {} applied a second time (stopped at {})", lam, term)
      }
      EvalError::CyclicApplication { app, term } => {
        write!(f, "application {} contains itself (stopped at {})", app, term)
      }
    }
  }
}

impl std::error::Error for EvalError {}
