use crate::prelude::*;

use super::search::BoundedSearch;

/// All four D-layer edges home and oriented.
pub fn is_cross_solved(cube: &Cube) -> bool {
    CROSS_EDGES.iter().all(|&e| cube.edge_solved(e))
}

/// Shortest sequence, at most `max_depth` moves, that solves the D cross.
pub fn solve_cross(cube: &Cube, max_depth: u8) -> Result<Algorithm, SolveError> {
    let start = CrossCoord::from(cube);
    if start.is_solved() {
        log::debug!("cross already solved");
        return Ok(Algorithm::new());
    }

    let found = BoundedSearch::new(CrossCoord::is_solved, CrossCoord::lower_bound)
        .run(&start, max_depth)
        .ok_or(SolveError::NoSolutionFound {
            stage: "cross",
            max_depth,
        })?;

    log::debug!(
        "cross: {} ({} moves, {} nodes)",
        found.moves,
        found.moves.len(),
        found.nodes
    );
    Ok(found.moves)
}
