//! Read-only case tables for the three table-driven stages.
//!
//! Every algorithm is stored in standard notation and compiled once into
//! face turns. The pattern a case recognises is the state its algorithm
//! solves: the solved cube with the algorithm's inverse applied.

use crate::prelude::*;

mod f2l;
mod oll;
mod pll;

pub use f2l::*;
pub use oll::*;
pub use pll::*;

/// Turn of the U face by `quarter_turns`, or nothing for a multiple of four.
pub fn auf(quarter_turns: u8) -> Option<Move> {
    Direction::from_quarter_turns(quarter_turns).map(|d| Move::new(Face::Up, d))
}

/// Builds every case table up front instead of on first use.
pub fn init_tables() {
    F2lCase::init_tables();
    OllCase::init_tables();
    PllCase::init_tables();
}

/// The state `notation` resolves, as seen from solved.
fn case_state(algorithm: &Algorithm) -> Cube {
    Cube::solved().apply_all(&algorithm.inverse())
}

fn compile(table: &str, id: impl core::fmt::Display, notation: &str) -> Algorithm {
    Algorithm::parse_notation(notation)
        .unwrap_or_else(|e| panic!("{} case {} has a bad algorithm: {}", table, id, e))
}
