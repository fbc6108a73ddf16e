pub use crate::algorithm::*;
pub use crate::cases::*;
pub use crate::config::*;
pub use crate::cube::*;
pub use crate::error::*;
pub use crate::oracle::*;
pub use crate::r#move::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;
