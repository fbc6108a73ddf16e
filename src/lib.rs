#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod algorithm;
pub mod cases;
pub mod config;
pub mod cube;
pub mod error;
pub mod r#move;
pub mod oracle;
pub mod prelude;
pub mod service;
pub mod solver;

#[cfg(test)]
mod test;
