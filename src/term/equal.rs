use super::*;

// Default depth budget of `equal`.
pub const EQUAL_DEPTH: usize = 4096;

// Checks if two terms are observably the same: filled references are read through to their
// contents, constants must match, and references must point to binders at the same position.
pub fn equal(graph: &Graph, a: Term, b: Term) -> bool {
  equal_within(graph, a, b, EQUAL_DEPTH)
}

// Like `equal`, giving up (false) once `depth` nested nodes have been compared.
pub fn equal_within(graph: &Graph, a: Term, b: Term, depth: usize) -> bool {
  // Pairs each binder of `a` with the binder of `b` at the same position.
  type Pairs = im::HashMap<Cell, Cell>;

  // Reads through filled cells.
  fn enter(graph: &Graph, mut term: Term, depth: &mut usize) -> Option<Term> {
    while let Var { var } = get(graph, term) {
      match cell_contents(graph, var) {
        Some(val) if *depth > 0 => {
          *depth -= 1;
          term = val;
        }
        Some(_) => return None,
        None => break,
      }
    }
    Some(term)
  }

  fn compare(graph: &Graph, a: Term, b: Term, pairs: &Pairs, mut depth: usize) -> bool {
    if depth == 0 {
      return false;
    }
    depth -= 1;
    let (a, b) = match (enter(graph, a, &mut depth), enter(graph, b, &mut depth)) {
      (Some(a), Some(b)) => (a, b),
      _ => return false,
    };
    match (get(graph, a), get(graph, b)) {
      (App { fun: a_fun, arg: a_arg }, App { fun: b_fun, arg: b_arg }) => {
        compare(graph, a_fun, b_fun, pairs, depth) && compare(graph, a_arg, b_arg, pairs, depth)
      }
      (Lam { var: a_var, bod: Some(a_bod) }, Lam { var: b_var, bod: Some(b_bod) }) => {
        compare(graph, a_bod, b_bod, &pairs.update(a_var, b_var), depth)
      }
      (Var { var: a_var }, Var { var: b_var }) => match pairs.get(&a_var) {
        Some(&paired) => paired == b_var,
        None => a_var == b_var && !pairs.values().any(|&cell| cell == b_var),
      },
      (Con { val: a_val }, Con { val: b_val }) => a_val == b_val,
      _ => false,
    }
  }

  compare(graph, a, b, &Pairs::new(), depth)
}
