use crate::prelude::*;

use std::collections::HashMap;

/// Something that can produce a shortest solution for comparison. Never
/// consulted for correctness.
pub trait ReferenceOracle {
    fn optimal_solve(&self, scramble: &Algorithm) -> Result<Algorithm, OracleError>;
}

/// Bidirectional breadth-first search from the scrambled and the solved
/// state, growing whichever frontier is smaller one full layer at a time.
#[derive(Debug, Clone, Copy)]
pub struct MeetInTheMiddle {
    max_depth: u8,
}

impl MeetInTheMiddle {
    pub fn new(max_depth: u8) -> MeetInTheMiddle {
        MeetInTheMiddle { max_depth }
    }
}

impl From<&SolverConfig> for MeetInTheMiddle {
    fn from(config: &SolverConfig) -> MeetInTheMiddle {
        MeetInTheMiddle::new(config.oracle_max_depth)
    }
}

impl ReferenceOracle for MeetInTheMiddle {
    fn optimal_solve(&self, scramble: &Algorithm) -> Result<Algorithm, OracleError> {
        let start = std::time::Instant::now();
        let cube = Cube::solved().apply_all(scramble);
        if cube.is_solved() {
            return Ok(Algorithm::new());
        }

        let mut forward = Side::rooted_at(cube);
        let mut reverse = Side::rooted_at(Cube::solved());

        while forward.depth + reverse.depth < self.max_depth {
            let met = if forward.frontier.len() <= reverse.frontier.len() {
                forward.expand(&reverse)
            } else {
                reverse.expand(&forward)
            };

            if let Some(meeting) = met {
                let (there, back) = forward
                    .visited
                    .get(&meeting)
                    .zip(reverse.visited.get(&meeting))
                    .ok_or_else(|| OracleError::Unavailable("lost meeting point".to_string()))?;
                let solution = there.clone().then(&back.inverse());
                log::debug!(
                    "oracle: {} moves, {} + {} states, took {:?}",
                    solution.len(),
                    forward.visited.len(),
                    reverse.visited.len(),
                    start.elapsed()
                );
                return Ok(solution);
            }
        }

        Err(OracleError::Unavailable(format!(
            "no solution within {} moves",
            self.max_depth
        )))
    }
}

struct Side {
    /// Every state reached so far with the path that first reached it.
    visited: HashMap<Cube, Algorithm>,
    frontier: Vec<(Cube, Algorithm)>,
    depth: u8,
}

impl Side {
    fn rooted_at(cube: Cube) -> Side {
        let mut visited = HashMap::new();
        visited.insert(cube, Algorithm::new());
        Side {
            visited,
            frontier: vec![(cube, Algorithm::new())],
            depth: 0,
        }
    }

    /// Grows the frontier by one layer, stopping at the first state `other`
    /// has already seen. Any such state lies on a shortest solution.
    fn expand(&mut self, other: &Side) -> Option<Cube> {
        let mut next = Vec::new();

        for (cube, path) in std::mem::take(&mut self.frontier) {
            let last = path.moves().last().copied();
            // Only same-face pruning; the stored path is one of many.
            for move_ in Move::all().filter(|m| last.map_or(true, |l| l.face != m.face)) {
                let reached = cube.apply(move_);
                if self.visited.contains_key(&reached) {
                    continue;
                }

                let mut extended = path.clone();
                extended.push(move_);
                self.visited.insert(reached, extended.clone());
                if other.visited.contains_key(&reached) {
                    return Some(reached);
                }
                next.push((reached, extended));
            }
        }

        self.frontier = next;
        self.depth += 1;
        None
    }
}
