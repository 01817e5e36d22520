use super::*;

// Renders the graph below `term` as an indented tree of nodes, one field per line:
//
//   @3: APP {
//     fun: @0: LAM {
//       var: #0,
//       body: @1: VAR { #0 -> 0 }
//     }
//     arg: @2: CON { () }
//   }
//
// References print the cell they point through, followed by what it holds. A filled cell can
// lead back into the term that contains it, so the walk stops after `depth` nested nodes.
pub fn dump(graph: &Graph, term: Term, depth: usize) -> String {
  fn indent(code: &mut String, tabs: usize) {
    for _ in 0..tabs {
      code.push_str("  ");
    }
  }

  fn dump_term(graph: &Graph, code: &mut String, term: Term, tabs: usize, depth: usize) {
    code.push_str(&format!("{}: {} {{", term, kind(graph, term)));
    if depth == 0 {
      code.push_str(" ... }");
      return;
    }
    match get(graph, term) {
      Lam { var, bod } => {
        code.push('\n');
        indent(code, tabs + 1);
        code.push_str(&format!("var: {},\n", var));
        indent(code, tabs + 1);
        code.push_str("body: ");
        match bod {
          Some(bod) => dump_term(graph, code, bod, tabs + 1, depth - 1),
          None => code.push('_'),
        }
        code.push('\n');
        indent(code, tabs);
        code.push('}');
      }
      App { fun, arg } => {
        code.push('\n');
        indent(code, tabs + 1);
        code.push_str("fun: ");
        dump_term(graph, code, fun, tabs + 1, depth - 1);
        code.push('\n');
        indent(code, tabs + 1);
        code.push_str("arg: ");
        dump_term(graph, code, arg, tabs + 1, depth - 1);
        code.push('\n');
        indent(code, tabs);
        code.push('}');
      }
      Var { var } => {
        code.push_str(&format!(" {} -> ", var));
        match cell_contents(graph, var) {
          Some(val) => {
            dump_term(graph, code, val, tabs, depth - 1);
            code.push_str(" }");
          }
          None => code.push_str("0 }"),
        }
      }
      Con { val } => {
        code.push_str(&format!(" {} }}", graph.bases[val as usize]));
      }
    }
  }

  let mut code = String::new();
  dump_term(graph, &mut code, term, 0, depth);
  code
}
