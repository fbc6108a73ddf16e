use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllSolution {
    pub moves: Algorithm,
    /// `None` when the last layer was already oriented.
    pub case: Option<OllCaseId>,
    /// Quarter turns of U applied before the case algorithm.
    pub pre_auf: u8,
}

impl OllSolution {
    pub fn description(&self) -> String {
        match self.case.and_then(OllCaseId::case) {
            None => "skip".to_string(),
            Some(case) => case.description(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.case.and_then(OllCaseId::case).map_or("skip", OllCase::name)
    }
}

/// Orients the last layer of a cube whose first two layers are solved.
pub fn solve_oll(cube: &Cube) -> Result<OllSolution, SolveError> {
    if OllSignature::of(cube).is_oriented() {
        log::debug!("OLL skip");
        return Ok(OllSolution {
            moves: Algorithm::new(),
            case: None,
            pre_auf: 0,
        });
    }

    let (turns, case) = (0..4)
        .find_map(|turns| {
            let turned = cube.apply_all(auf(turns));
            OllCase::recognize(&OllSignature::of(&turned)).map(|case| (turns, case))
        })
        .ok_or(SolveError::OllRecognition)?;

    let mut moves: Algorithm = auf(turns).into_iter().collect();
    moves.extend(&case.algorithm);
    let moves = moves.simplified();

    let after = cube.apply_all(&moves);
    if !is_f2l_solved(&after) || !OllSignature::of(&after).is_oriented() {
        return Err(SolveError::SolverInconsistency(format!(
            "{} did not orient the last layer",
            case.id
        )));
    }

    log::debug!("OLL: {} via {}", moves, case.description());
    Ok(OllSolution {
        moves,
        case: Some(case.id),
        pre_auf: turns,
    })
}
