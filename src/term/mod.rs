// Terms of the lambda calculus as an abstract binding tree. Variables don't have names: every
// abstraction owns a binding cell, and every reference points at the cell of its binder. Beta
// reduction writes the argument into the cell, so all occurrences see the same term at once.

mod equal;
mod syntax;
mod views;

pub use self::equal::*;
pub use self::syntax::*;
pub use self::views::*;

use std::collections::HashMap;
use std::fmt;

// A term is an index into the graph's node table. Two terms are the same object iff their
// indices are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Term(u32);

// A binding cell is an index into the graph's cell table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Cell(u32);

impl Term {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl Cell {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl fmt::Display for Term {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "@{}", self.0)
  }
}

impl fmt::Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Node {
  // Applications
  App { fun: Term, arg: Term },

  // Abstractions (`bod` is only missing between `make_lam` and `bind`)
  Lam { var: Cell, bod: Option<Term> },

  // References to the cell of an enclosing abstraction
  Var { var: Cell },

  // Constants (index into the graph's base values)
  Con { val: u32 },
}

use self::Node::{*};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
  App,
  Lam,
  Var,
  Con,
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Kind::App => "APP",
      Kind::Lam => "LAM",
      Kind::Var => "VAR",
      Kind::Con => "CON",
    })
  }
}

pub const ZERO : &str = "zero";
pub const ONE  : &str = "one";
pub const UNIT : &str = "()";

// The term graph. Nodes and cells are only ever appended, so handles stay valid for the
// lifetime of the graph, and everything is reclaimed when the graph is dropped.
#[derive(Clone, Debug, Default)]
pub struct Graph {
  pub nodes: Vec<Node>,
  pub cells: Vec<Option<Term>>,
  pub bases: Vec<String>,
  interned: HashMap<String, Term>,
}

impl Graph {
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

// Creates an empty graph.
pub fn new_graph() -> Graph {
  Graph::default()
}

// Allocates a node.
pub fn new_node(graph: &mut Graph, node: Node) -> Term {
  let term = Term(graph.nodes.len() as u32);
  graph.nodes.push(node);
  term
}

// Allocates an empty binding cell.
pub fn new_cell(graph: &mut Graph) -> Cell {
  let cell = Cell(graph.cells.len() as u32);
  graph.cells.push(None);
  cell
}

pub fn make_app(graph: &mut Graph, fun: Term, arg: Term) -> Term {
  new_node(graph, App { fun, arg })
}

// Allocates an abstraction with a fresh empty cell. The body is attached later with `bind`, so
// that it can be built with references to the returned cell.
pub fn make_lam(graph: &mut Graph) -> (Term, Cell) {
  let var = new_cell(graph);
  (new_node(graph, Lam { var, bod: None }), var)
}

// Attaches the body of an abstraction created by `make_lam`.
pub fn bind(graph: &mut Graph, lam: Term, body: Term) {
  match graph.nodes[lam.index()] {
    Lam { var, bod: None } => {
      graph.nodes[lam.index()] = Lam { var, bod: Some(body) };
    }
    node => panic!("bind: {} is not an unfinished abstraction ({:?})", lam, node),
  }
}

// Builds `λx. body`, where `body` is built from the binder's cell.
pub fn lam<F>(graph: &mut Graph, body: F) -> Term
where
  F: FnOnce(&mut Graph, Cell) -> Term,
{
  let (lam, var) = make_lam(graph);
  let bod = body(graph, var);
  bind(graph, lam, bod);
  lam
}

pub fn make_var(graph: &mut Graph, var: Cell) -> Term {
  new_node(graph, Var { var })
}

// Constants are interned: the same value always yields the same term.
pub fn make_con(graph: &mut Graph, value: &str) -> Term {
  if let Some(&term) = graph.interned.get(value) {
    return term;
  }
  let val = graph.bases.len() as u32;
  graph.bases.push(value.to_string());
  let term = new_node(graph, Con { val });
  graph.interned.insert(value.to_string(), term);
  term
}

// Reads a node.
pub fn get(graph: &Graph, term: Term) -> Node {
  graph.nodes[term.index()]
}

// Kind of the node.
pub fn kind(graph: &Graph, term: Term) -> Kind {
  match get(graph, term) {
    App { .. } => Kind::App,
    Lam { .. } => Kind::Lam,
    Var { .. } => Kind::Var,
    Con { .. } => Kind::Con,
  }
}

// Payload of a constant.
pub fn base(graph: &Graph, term: Term) -> Option<&str> {
  match get(graph, term) {
    Con { val } => Some(graph.bases[val as usize].as_str()),
    _ => None,
  }
}

// What a cell currently points to; `None` while its binder hasn't been applied.
pub fn cell_contents(graph: &Graph, cell: Cell) -> Option<Term> {
  graph.cells[cell.index()]
}

// Points a cell at a term, returning what it pointed to before.
pub fn fill(graph: &mut Graph, cell: Cell, term: Term) -> Option<Term> {
  graph.cells[cell.index()].replace(term)
}

// Abstractions, constants and references to empty cells are values. Applications and references
// to filled cells still step.
pub fn is_value(graph: &Graph, term: Term) -> bool {
  match get(graph, term) {
    Lam { .. } | Con { .. } => true,
    Var { var } => cell_contents(graph, var).is_none(),
    App { .. } => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constants_are_interned() {
    let mut graph = new_graph();
    let zero = make_con(&mut graph, ZERO);
    let unit = make_con(&mut graph, UNIT);
    assert_eq!(zero, make_con(&mut graph, ZERO));
    assert_ne!(zero, unit);
    assert_eq!(base(&graph, unit), Some("()"));
    assert_eq!(graph.len(), 2);
  }

  #[test]
  fn lam_binds_body_to_its_own_cell() {
    let mut graph = new_graph();
    let id = lam(&mut graph, |graph, x| make_var(graph, x));
    let Lam { var, bod: Some(bod) } = get(&graph, id) else {
      panic!("expected a finished abstraction");
    };
    assert_eq!(get(&graph, bod), Var { var });
    assert_eq!(cell_contents(&graph, var), None);
  }

  #[test]
  fn value_classification() {
    let mut graph = new_graph();
    let (id, x) = make_lam(&mut graph);
    let var = make_var(&mut graph, x);
    bind(&mut graph, id, var);
    let unit = make_con(&mut graph, UNIT);
    let app = make_app(&mut graph, id, unit);
    assert!(is_value(&graph, id));
    assert!(is_value(&graph, unit));
    assert!(is_value(&graph, var));
    assert!(!is_value(&graph, app));
    assert_eq!(fill(&mut graph, x, unit), None);
    assert!(!is_value(&graph, var));
    assert_eq!(cell_contents(&graph, x), Some(unit));
  }

  #[test]
  fn kinds() {
    let mut graph = new_graph();
    let (lam, x) = make_lam(&mut graph);
    let var = make_var(&mut graph, x);
    bind(&mut graph, lam, var);
    let one = make_con(&mut graph, ONE);
    let app = make_app(&mut graph, lam, one);
    assert_eq!(kind(&graph, lam), Kind::Lam);
    assert_eq!(kind(&graph, var), Kind::Var);
    assert_eq!(kind(&graph, one), Kind::Con);
    assert_eq!(kind(&graph, app), Kind::App);
    assert_eq!(Kind::Var.to_string(), "VAR");
  }

  #[test]
  #[should_panic]
  fn bind_twice_panics() {
    let mut graph = new_graph();
    let (lam, x) = make_lam(&mut graph);
    let var = make_var(&mut graph, x);
    bind(&mut graph, lam, var);
    bind(&mut graph, lam, var);
  }
}
