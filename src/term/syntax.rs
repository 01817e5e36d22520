// Term parser and stringifier. Grammar:
// <Term> ::= <Lam> | <App> | <Unit> | <Name>
// <Lam>  ::= ("λ" | "\") <name> ["."] <Term>
// <App>  ::= "(" <Term> <Term>* ")"
// <Unit> ::= "()"
// <Name> ::= <alphanumeric_name>
// A name bound by an enclosing lambda is a reference to that lambda's cell. Any other name is a
// constant.

use super::*;

// Source code is Ascii-encoded.
pub type Str = [u8];
pub type Chr = u8;

// Names in scope while parsing. Persistent, so a nested lambda extends it without undoing.
type Context = im::HashMap<Vec<Chr>, Cell>;

// Converts an index to a name (1="a", 26="z", 27="aa"...).
pub fn index_to_name(idx: u32) -> Vec<Chr> {
  let mut name = Vec::new();
  let mut idx = idx;
  while idx > 0 {
    idx = idx - 1;
    name.push((97 + idx % 26) as u8);
    idx = idx / 26;
  }
  name
}

fn is_name_char(c: Chr) -> bool {
  false
  || (c >= b'A' && c <= b'Z')
  || (c >= b'a' && c <= b'z')
  || (c >= b'0' && c <= b'9')
  || (c == b'_')
  || (c == b'\'')
}

// Skips whitespace and `// comments`.
fn skip_whitespace(code: &Str) -> &Str {
  let mut i: usize = 0;
  while i < code.len() {
    if code[i] == b' ' || code[i] == b'\n' || code[i] == b'\t' || code[i] == b'\r' {
      i += 1;
    } else if code[i..].starts_with(b"//") {
      while i < code.len() && code[i] != b'\n' {
        i += 1;
      }
    } else {
      break;
    }
  }
  &code[i..]
}

// Parses a name, returns the remaining code and the name.
fn parse_name(code: &Str) -> Result<(&Str, &Str), String> {
  let code = skip_whitespace(code);
  let mut i: usize = 0;
  while i < code.len() && is_name_char(code[i]) {
    i += 1;
  }
  if i == 0 {
    return Err(format!("Expected a name, found '{}'", String::from_utf8_lossy(code)));
  }
  Ok((&code[i..], &code[0..i]))
}

fn parse_text<'a>(code: &'a Str, text: &Str) -> Result<&'a Str, String> {
  let code = skip_whitespace(code);
  if code.starts_with(text) {
    Ok(&code[text.len()..])
  } else {
    Err(format!("Expected '{}', found '{}'", String::from_utf8_lossy(text), String::from_utf8_lossy(code)))
  }
}

// Parses a term, returns the remaining code and the term.
pub fn parse_term<'a>(graph: &mut Graph, code: &'a Str, ctx: &Context) -> Result<(&'a Str, Term), String> {
  let code = skip_whitespace(code);
  if code.is_empty() {
    return Err("Expected a term, found the end of input".to_string());
  }
  match code[0] {
    // Abstraction: `λx body` or `\x. body`
    b'\xce' | b'\\' => {
      let code = if code[0] == b'\\' { &code[1..] } else { parse_text(code, "λ".as_bytes())? };
      let (code, nam) = parse_name(code)?;
      let code = skip_whitespace(code);
      let code = if code.starts_with(b".") { &code[1..] } else { code };
      let (lam, var) = make_lam(graph);
      let ctx = ctx.update(nam.to_vec(), var);
      let (code, bod) = parse_term(graph, code, &ctx)?;
      bind(graph, lam, bod);
      Ok((code, lam))
    }
    // Unit: `()`
    b'(' if skip_whitespace(&code[1..]).starts_with(b")") => {
      let code = parse_text(&code[1..], b")")?;
      Ok((code, make_con(graph, UNIT)))
    }
    // Application: `(func argm1 argm2 ... argmN)`
    b'(' => {
      let (mut code, mut fun) = parse_term(graph, &code[1..], ctx)?;
      loop {
        code = skip_whitespace(code);
        if code.is_empty() {
          return Err("Expected ')', found the end of input".to_string());
        }
        if code[0] == b')' {
          break;
        }
        let (new_code, arg) = parse_term(graph, code, ctx)?;
        code = new_code;
        fun = make_app(graph, fun, arg);
      }
      Ok((&code[1..], fun))
    }
    // Reference or constant: `<alphanumeric_name>`
    _ => {
      let (code, nam) = parse_name(code)?;
      let term = match ctx.get(nam) {
        Some(&var) => make_var(graph, var),
        None => make_con(graph, &String::from_utf8_lossy(nam)),
      };
      Ok((code, term))
    }
  }
}

// Converts a source-code to a term allocated on `graph`.
pub fn from_string(graph: &mut Graph, code: &Str) -> Result<Term, String> {
  let (rest, term) = parse_term(graph, code, &Context::new())?;
  let rest = skip_whitespace(rest);
  if rest.is_empty() {
    Ok(term)
  } else {
    Err(format!("Unexpected input after term: '{}'", String::from_utf8_lossy(rest)))
  }
}

// Default depth budget of `show`.
pub const SHOW_DEPTH: usize = 256;

// Converts a term back to a source-code. Filled references are written as their contents, so the
// output is the term as it is observed after substitution.
pub fn to_string(graph: &Graph, term: Term, depth: usize) -> Vec<Chr> {
  fn stringify_term(graph: &Graph, code: &mut Vec<u8>, term: Term, names: &im::HashMap<Cell, Vec<Chr>>, lams: u32, depth: usize) {
    if depth == 0 {
      code.extend_from_slice(b"...");
      return;
    }
    match get(graph, term) {
      Lam { var, bod } => {
        let nam = index_to_name(lams + 1);
        code.extend_from_slice("λ".as_bytes());
        code.extend_from_slice(&nam);
        code.extend_from_slice(b" ");
        let names = names.update(var, nam);
        match bod {
          Some(bod) => stringify_term(graph, code, bod, &names, lams + 1, depth - 1),
          None => code.extend_from_slice(b"_"),
        }
      }
      App { fun, arg } => {
        code.extend_from_slice(b"(");
        stringify_term(graph, code, fun, names, lams, depth - 1);
        code.extend_from_slice(b" ");
        stringify_term(graph, code, arg, names, lams, depth - 1);
        code.extend_from_slice(b")");
      }
      Var { var } => match cell_contents(graph, var) {
        Some(val) => stringify_term(graph, code, val, names, lams, depth - 1),
        None => match names.get(&var) {
          Some(nam) => code.extend_from_slice(nam),
          None => code.extend_from_slice(format!("?{}", var.index()).as_bytes()),
        },
      },
      Con { val } => {
        code.extend_from_slice(graph.bases[val as usize].as_bytes());
      }
    }
  }
  let mut code = Vec::new();
  stringify_term(graph, &mut code, term, &im::HashMap::new(), 0, depth);
  code
}

pub fn show_depth(graph: &Graph, term: Term, depth: usize) -> String {
  String::from_utf8_lossy(&to_string(graph, term, depth)).to_string()
}

pub fn show(graph: &Graph, term: Term) -> String {
  show_depth(graph, term, SHOW_DEPTH)
}
