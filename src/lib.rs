pub mod driver;
pub mod eval;
pub mod fixtures;
pub mod term;
