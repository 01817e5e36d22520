// Command line for the evaluator. Terms are written as:
// - [λx body] or [\x. body] for an abstraction
// - [(f a b)] for an application, associating to the left
// - [()] for the unit constant
// - [name] for a reference, or a constant if no enclosing λ binds the name
// Without arguments, every built-in scenario is run.

use abt::driver::{self, Config};
use abt::fixtures::{scenario, SCENARIOS};
use abt::term::{from_string, new_graph, SHOW_DEPTH};
use anyhow::{anyhow, bail, Context, Result};
use clap::{App, Arg, ArgMatches};

fn config(matches: &ArgMatches) -> Result<Config> {
  let limit = match matches.value_of("limit") {
    Some(limit) => Some(limit.parse::<u64>().with_context(|| format!("invalid --limit '{}'", limit))?),
    None => None,
  };
  let depth = match matches.value_of("depth") {
    Some(depth) => depth.parse::<usize>().with_context(|| format!("invalid --depth '{}'", depth))?,
    None => SHOW_DEPTH,
  };
  let dump = matches.is_present("dump");
  Ok(Config { limit, depth, dump })
}

fn main() -> Result<()> {
  let matches = App::new("abt")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Evaluates lambda terms by normal-order reduction over shared binding cells.")
    .arg(Arg::with_name("scenario")
      .value_name("SCENARIO")
      .multiple(true)
      .help("Built-in scenarios to run (all of them if neither these nor --term are given)"))
    .arg(Arg::with_name("term")
      .short("t")
      .long("term")
      .value_name("TERM")
      .takes_value(true)
      .help("Evaluates a term, e.g. \"(λx λy x zero one)\""))
    .arg(Arg::with_name("limit")
      .short("l")
      .long("limit")
      .value_name("STEPS")
      .takes_value(true)
      .help("Gives up after this many steps"))
    .arg(Arg::with_name("depth")
      .short("d")
      .long("depth")
      .value_name("NODES")
      .takes_value(true)
      .help("Nesting depth printed before terms are cut off"))
    .arg(Arg::with_name("dump")
      .long("dump")
      .help("Prints terms as node trees"))
    .arg(Arg::with_name("trace")
      .long("trace")
      .help("Logs every intermediate term"))
    .arg(Arg::with_name("list")
      .long("list")
      .help("Lists the built-in scenarios"))
    .get_matches();

  let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
  if matches.is_present("trace") {
    logger.filter_level(log::LevelFilter::Debug);
  }
  logger.init();

  if matches.is_present("list") {
    for scenario in SCENARIOS {
      println!("{:<16} {}", scenario.name, scenario.about);
    }
    return Ok(());
  }

  let config = config(&matches)?;

  if let Some(code) = matches.value_of("term") {
    let mut graph = new_graph();
    let term = from_string(&mut graph, code.as_bytes())
      .map_err(|err| anyhow!(err))
      .context("invalid --term")?;
    let report = driver::run(&mut graph, "term", term, &config)?;
    println!("{}\n", report);
  }

  let names: Vec<&str> = match matches.values_of("scenario") {
    Some(names) => names.collect(),
    None if matches.is_present("term") => vec![],
    None => SCENARIOS.iter().map(|scenario| scenario.name).collect(),
  };
  for name in names {
    let Some(found) = scenario(name) else {
      bail!("unknown scenario '{}' (see --list)", name);
    };
    let report = driver::run_scenario(found, &config).with_context(|| format!("scenario {}", name))?;
    println!("{}\n", report);
  }

  Ok(())
}
