/// Search bounds for the solver and the reference oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub cross_max_depth: u8,
    pub f2l_search_depth: u8,
    pub oracle_max_depth: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            cross_max_depth: 8,
            f2l_search_depth: 6,
            oracle_max_depth: 8,
        }
    }
}
