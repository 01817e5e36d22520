// Example terms and the named scenarios the command line runs.

use crate::term::*;

// λx. x
pub fn identity(graph: &mut Graph) -> Term {
  lam(graph, |graph, x| make_var(graph, x))
}

// λx. ()
pub fn const_unit(graph: &mut Graph) -> Term {
  lam(graph, |graph, _| make_con(graph, UNIT))
}

// λx. λy. x
pub fn lam_true(graph: &mut Graph) -> Term {
  lam(graph, |graph, x| lam(graph, |graph, _| make_var(graph, x)))
}

// λx. λy. y
pub fn lam_false(graph: &mut Graph) -> Term {
  lam(graph, |graph, _| lam(graph, |graph, y| make_var(graph, y)))
}

pub struct Scenario {
  pub name: &'static str,
  pub about: &'static str,
  pub build: fn(&mut Graph) -> Term,
}

pub const SCENARIOS: &[Scenario] = &[
  Scenario { name: "id-const", about: "identity applied to λx. ()", build: id_const },
  Scenario { name: "true-id", about: "λx. λy. x applied to identity", build: true_id },
  Scenario { name: "false-id", about: "λx. λy. y applied to identity", build: false_id },
  Scenario { name: "stuck", about: "zero applied to ()", build: stuck },
  Scenario { name: "const-one", about: "λx. () applied to one", build: const_one },
  Scenario { name: "id-const-one", about: "identity applied to λx. (), then to one", build: id_const_one },
  Scenario { name: "true-zero-one", about: "λx. λy. x applied to zero, then to one", build: true_zero_one },
  Scenario { name: "false-zero-one", about: "λx. λy. y applied to zero, then to one", build: false_zero_one },
];

// Finds a scenario by name.
pub fn scenario(name: &str) -> Option<&'static Scenario> {
  SCENARIOS.iter().find(|scenario| scenario.name == name)
}

fn id_const(graph: &mut Graph) -> Term {
  let fun = identity(graph);
  let arg = const_unit(graph);
  make_app(graph, fun, arg)
}

fn true_id(graph: &mut Graph) -> Term {
  let fun = lam_true(graph);
  let arg = identity(graph);
  make_app(graph, fun, arg)
}

fn false_id(graph: &mut Graph) -> Term {
  let fun = lam_false(graph);
  let arg = identity(graph);
  make_app(graph, fun, arg)
}

fn stuck(graph: &mut Graph) -> Term {
  let fun = make_con(graph, ZERO);
  let arg = make_con(graph, UNIT);
  make_app(graph, fun, arg)
}

fn const_one(graph: &mut Graph) -> Term {
  let fun = const_unit(graph);
  let arg = make_con(graph, ONE);
  make_app(graph, fun, arg)
}

// ((fun fst) one)
fn select(graph: &mut Graph, fun: Term, fst: Term) -> Term {
  let app = make_app(graph, fun, fst);
  let snd = make_con(graph, ONE);
  make_app(graph, app, snd)
}

fn id_const_one(graph: &mut Graph) -> Term {
  let fun = identity(graph);
  let fst = const_unit(graph);
  select(graph, fun, fst)
}

fn true_zero_one(graph: &mut Graph) -> Term {
  let fun = lam_true(graph);
  let fst = make_con(graph, ZERO);
  select(graph, fun, fst)
}

fn false_zero_one(graph: &mut Graph) -> Term {
  let fun = lam_false(graph);
  let fst = make_con(graph, ZERO);
  select(graph, fun, fst)
}
