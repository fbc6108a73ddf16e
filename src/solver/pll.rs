use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PllSolution {
    pub moves: Algorithm,
    /// `None` when at most a U turn was needed.
    pub case: Option<PllCase>,
    /// Quarter turns of U before and after the case algorithm.
    pub pre_auf: u8,
    pub post_auf: u8,
}

impl PllSolution {
    pub fn description(&self) -> String {
        match (self.case, self.moves.is_empty()) {
            (Some(case), _) => case.name(),
            (None, true) => "skip".to_string(),
            (None, false) => format!("skip, finish with {}", self.moves),
        }
    }
}

/// Permutes the last layer of an oriented cube, finishing the solve.
pub fn solve_pll(cube: &Cube) -> Result<PllSolution, SolveError> {
    if let Some(turns) = (0..4).find(|&turns| cube.apply_all(auf(turns)).is_solved()) {
        log::debug!("PLL skip after {} quarter turns", turns);
        return Ok(PllSolution {
            moves: auf(turns).into_iter().collect(),
            case: None,
            pre_auf: 0,
            post_auf: turns,
        });
    }

    let (pre, case, post) = (0..4)
        .find_map(|pre| {
            let turned = cube.apply_all(auf(pre));
            PllCase::recognize(&PllSignature::of(&turned)).map(|(case, post)| (pre, case, post))
        })
        .ok_or(SolveError::PllRecognition)?;

    let mut moves: Algorithm = auf(pre).into_iter().collect();
    moves.extend(case.algorithm());
    moves.extend(auf(post));
    let moves = moves.simplified();

    if !cube.apply_all(&moves).is_solved() {
        return Err(SolveError::SolverInconsistency(format!(
            "{} did not finish the cube",
            case.name()
        )));
    }

    log::debug!("PLL: {} via {}", moves, case.name());
    Ok(PllSolution {
        moves,
        case: Some(case),
        pre_auf: pre,
        post_auf: post,
    })
}
