// Runs terms and scenarios for the command line: renders the input, drives evaluation with a
// tracing observer and an optional step limit, and classifies what comes out.

use std::fmt;

use log::{debug, info, log_enabled, Level};

use crate::eval::*;
use crate::fixtures::Scenario;
use crate::term::*;

#[derive(Clone, Debug)]
pub struct Config {
  // Steps allowed before giving up. `None` evaluates until a normal form, forever if need be.
  pub limit: Option<u64>,
  // Nesting depth printed before a term is cut off.
  pub depth: usize,
  // Print node trees instead of the one-line notation.
  pub dump: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config { limit: None, depth: SHOW_DEPTH, dump: false }
  }
}

#[derive(Clone, Debug)]
pub struct Report {
  pub name: String,
  pub input: String,
  pub output: String,
  pub term: Term,
  pub outcome: Outcome,
  pub stats: Stats,
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "-- {}", self.name)?;
    writeln!(f, "input:  {}", self.input)?;
    writeln!(f, "output: {}", self.output)?;
    write!(
      f,
      "{} after {} steps ({} beta, {} deref)",
      self.outcome, self.stats.steps, self.stats.betas, self.stats.derefs
    )
  }
}

fn render(graph: &Graph, term: Term, config: &Config) -> String {
  if config.dump {
    dump(graph, term, config.depth)
  } else {
    show_depth(graph, term, config.depth)
  }
}

// Evaluates `term` and reports the normal form it reaches.
pub fn run(graph: &mut Graph, name: &str, term: Term, config: &Config) -> Result<Report, EvalError> {
  let input = render(graph, term, config);
  info!("evaluating {}: {}", name, input);

  let depth = config.depth;
  let observe = |graph: &Graph, iteration: u64, term: Term| {
    if log_enabled!(Level::Debug) {
      debug!("iteration {}: {}", iteration, show_depth(graph, term, depth));
    }
  };
  let normal = match config.limit {
    Some(limit) => evaluate_bounded(graph, term, limit, observe)?,
    None => evaluate_with(graph, term, observe)?,
  };

  let outcome = classify(graph, normal.term);
  info!("{} reached a {} normal form in {} steps", name, outcome, normal.stats.steps);

  Ok(Report {
    name: name.to_string(),
    input,
    output: render(graph, normal.term, config),
    term: normal.term,
    outcome,
    stats: normal.stats,
  })
}

// Builds a scenario on a graph of its own and runs it.
pub fn run_scenario(scenario: &Scenario, config: &Config) -> Result<Report, EvalError> {
  let mut graph = new_graph();
  let term = (scenario.build)(&mut graph);
  run(&mut graph, scenario.name, term, config)
}
