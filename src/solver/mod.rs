use crate::prelude::*;

use serde::Serialize;

mod cross;
pub use cross::*;

mod f2l;
pub use f2l::*;

mod oll;
pub use oll::*;

mod pll;
pub use pll::*;

mod search;
pub use search::*;

mod analysis;
pub use analysis::*;

pub const ORIENTATION: &str = "white bottom, green front";

/// Moves, length and a short description of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub moves: Algorithm,
    pub steps: usize,
    pub description: String,
}

impl Stage {
    fn new(moves: Algorithm, description: String) -> Stage {
        Stage {
            steps: moves.len(),
            moves,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct F2lStage {
    #[serde(flatten)]
    pub stage: Stage,
    pub pairs: Vec<SlotCase>,
    pub slots: Vec<SlotSolution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OllStage {
    #[serde(flatten)]
    pub stage: Stage,
    pub case: Option<OllCaseId>,
    pub name: &'static str,
    /// Quarter turns of U before the case algorithm.
    pub pre_auf: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PllStage {
    #[serde(flatten)]
    pub stage: Stage,
    pub case: Option<PllCase>,
    pub name: String,
    pub group: Option<PllGroup>,
    pub pre_auf: u8,
    pub post_auf: u8,
}

/// Cross and F2L only, for practising the first two layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstTwoLayers {
    pub scramble: Algorithm,
    pub cross: Stage,
    /// The cross came from the caller rather than the search.
    pub cross_supplied: bool,
    pub f2l: F2lStage,
    pub total_steps: usize,
}

/// A complete, validated CFOP solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CfopSolution {
    pub scramble: Algorithm,
    pub cross: Stage,
    pub f2l: F2lStage,
    pub oll: OllStage,
    pub pll: PllStage,
    pub total_steps: usize,
    pub full_solution: Algorithm,
    pub orientation: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct CfopSolver {
    config: SolverConfig,
}

impl CfopSolver {
    pub fn new(config: SolverConfig) -> CfopSolver {
        CfopSolver { config }
    }

    /// Parses `scramble` and solves it. A bad token fails before any
    /// search runs; an empty scramble gives empty stages.
    pub fn solve(&self, scramble: &str) -> Result<CfopSolution, SolveError> {
        let scramble = Algorithm::parse(scramble)?;
        self.solve_algorithm(scramble)
    }

    pub fn solve_algorithm(&self, scramble: Algorithm) -> Result<CfopSolution, SolveError> {
        let start = std::time::Instant::now();
        let cube = Cube::solved().apply_all(&scramble);

        let cross = solve_cross(&cube, self.config.cross_max_depth)?;
        let cube = cube.apply_all(&cross);

        let f2l = solve_f2l(&cube, self.config.f2l_search_depth)?;
        let cube = cube.apply_all(&f2l.moves);

        let oll = solve_oll(&cube)?;
        let cube = cube.apply_all(&oll.moves);

        let pll = solve_pll(&cube)?;

        let solution = compose(scramble, cross_stage(cross, false), f2l_stage(f2l), oll, pll)?;
        log::debug!(
            "solved in {} moves, took {:?}",
            solution.total_steps,
            start.elapsed()
        );
        Ok(solution)
    }

    /// Solves the cross and F2L of `scramble`. A supplied `cross` is used as
    /// given and must solve the cross on its own.
    pub fn solve_first_two_layers(
        &self,
        scramble: Algorithm,
        cross: Option<Algorithm>,
    ) -> Result<FirstTwoLayers, SolveError> {
        let cube = Cube::solved().apply_all(&scramble);
        let cross_supplied = cross.is_some();

        let cross = match cross {
            Some(cross) if is_cross_solved(&cube.apply_all(&cross)) => cross,
            Some(cross) => {
                return Err(SolveError::CrossNotSolved {
                    cross: cross.to_string(),
                })
            }
            None => solve_cross(&cube, self.config.cross_max_depth)?,
        };
        let cube = cube.apply_all(&cross);

        let f2l = solve_f2l(&cube, self.config.f2l_search_depth)?;
        if !is_f2l_solved(&cube.apply_all(&f2l.moves)) {
            return Err(SolveError::SolverInconsistency(format!(
                "{} does not finish F2L",
                f2l.moves
            )));
        }

        let cross = cross_stage(cross, cross_supplied);
        let f2l = f2l_stage(f2l);
        Ok(FirstTwoLayers {
            scramble,
            total_steps: cross.steps + f2l.stage.steps,
            cross,
            cross_supplied,
            f2l,
        })
    }
}

/// Solves `scramble` with the default search bounds.
pub fn solve_cfop(scramble: &str) -> Result<CfopSolution, SolveError> {
    CfopSolver::default().solve(scramble)
}

fn cross_stage(cross: Algorithm, supplied: bool) -> Stage {
    let description = if supplied {
        "cross as supplied".to_string()
    } else if cross.is_empty() {
        "cross already solved".to_string()
    } else {
        format!("cross on {} ({})", Face::Down, Face::Down.colour())
    };
    Stage::new(cross, description)
}

fn f2l_stage(f2l: F2lSolution) -> F2lStage {
    let pairs = f2l.pairs();
    let description = Slot::all()
        .zip(&pairs)
        .map(|(slot, case)| format!("{} {}", slot, case))
        .collect::<Vec<_>>()
        .join(", ");
    F2lStage {
        stage: Stage::new(f2l.moves, description),
        pairs,
        slots: f2l.slots,
    }
}

/// Joins the stages and replays the whole thing from solved.
fn compose(
    scramble: Algorithm,
    cross: Stage,
    f2l: F2lStage,
    oll: OllSolution,
    pll: PllSolution,
) -> Result<CfopSolution, SolveError> {
    let oll = OllStage {
        name: oll.name(),
        case: oll.case,
        pre_auf: oll.pre_auf,
        stage: Stage::new(oll.moves.clone(), oll.description()),
    };

    let pll = PllStage {
        name: pll.case.map_or_else(|| "skip".to_string(), PllCase::name),
        group: pll.case.map(PllCase::group),
        case: pll.case,
        pre_auf: pll.pre_auf,
        post_auf: pll.post_auf,
        stage: Stage::new(pll.moves.clone(), pll.description()),
    };

    let full_solution = cross
        .moves
        .clone()
        .then(&f2l.stage.moves)
        .then(&oll.stage.moves)
        .then(&pll.stage.moves);
    let total_steps = [&cross, &f2l.stage, &oll.stage, &pll.stage]
        .iter()
        .map(|stage| stage.steps)
        .sum();

    let replayed = Cube::solved().apply_all(&scramble).apply_all(&full_solution);
    if !replayed.is_solved() {
        return Err(SolveError::SolverInconsistency(format!(
            "{} does not solve {}",
            full_solution, scramble
        )));
    }

    Ok(CfopSolution {
        scramble,
        cross,
        f2l,
        oll,
        pll,
        total_steps,
        full_solution,
        orientation: ORIENTATION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alg(moves: &str) -> Algorithm {
        Algorithm::parse(moves).unwrap()
    }

    fn replays(scramble: &str, solution: &CfopSolution) -> bool {
        cube_with_moves(scramble)
            .apply_all(&solution.full_solution)
            .is_solved()
    }

    #[test]
    fn empty_scramble_gives_empty_stages() {
        let solution = solve_cfop("").unwrap();
        assert_eq!(solution.total_steps, 0);
        assert!(solution.full_solution.is_empty());
        for stage in [&solution.cross, &solution.f2l.stage, &solution.oll.stage, &solution.pll.stage] {
            assert!(stage.moves.is_empty());
            assert_eq!(stage.steps, 0);
        }
        assert_eq!(solution.oll.name, "skip");
        assert_eq!(solution.pll.name, "skip");
    }

    #[test]
    fn sexy_move_scramble() {
        let solution = solve_cfop("R U R' U'").unwrap();
        assert!(replays("R U R' U'", &solution));
        assert!(solution.total_steps <= 20);
        assert_eq!(solution.cross.steps, 0);
        assert_eq!(solution.f2l.stage.moves.to_string(), "U R U' R'");
        assert_eq!(solution.oll.stage.steps, 0);
        assert_eq!(solution.pll.stage.steps, 0);
    }

    #[test]
    fn bad_token_fails_up_front() {
        assert_eq!(
            solve_cfop("X9"),
            Err(SolveError::InvalidMoveToken {
                token: "X9".to_string()
            })
        );
        assert!(matches!(
            solve_cfop("R U x9 D"),
            Err(SolveError::InvalidMoveToken { .. })
        ));
    }

    #[test]
    fn cross_already_solved() {
        let scramble = "R U R' U2 F' U' F R U2 R' U' R U R'";
        assert!(is_cross_solved(&cube_with_moves(scramble)));

        let solution = solve_cfop(scramble).unwrap();
        assert_eq!(solution.cross.steps, 0);
        assert_eq!(solution.cross.description, "cross already solved");
        assert!(solution.f2l.stage.steps > 0);
        assert!(replays(scramble, &solution));
    }

    #[test]
    fn stage_post_conditions() {
        let scramble = "D2 F' R U2 L B' D R2 F L' U B2 R' D' F2 U L2 B R U' F D2 L' B2";
        let cube = cube_with_moves(scramble);
        let solution = solve_cfop(scramble).unwrap();

        let cube = cube.apply_all(&solution.cross.moves);
        assert!(is_cross_solved(&cube));
        let cube = cube.apply_all(&solution.f2l.stage.moves);
        assert!(is_f2l_solved(&cube));
        let cube = cube.apply_all(&solution.oll.stage.moves);
        assert!(is_f2l_solved(&cube));
        assert!(OllSignature::of(&cube).is_oriented());
        let cube = cube.apply_all(&solution.pll.stage.moves);
        assert!(cube.is_solved());

        assert_eq!(solution.f2l.pairs.len(), 4);
        assert_eq!(
            solution.total_steps,
            solution.cross.steps
                + solution.f2l.stage.steps
                + solution.oll.stage.steps
                + solution.pll.stage.steps
        );
        assert_eq!(solution.total_steps, solution.full_solution.len());
    }

    #[test]
    fn output_uses_only_face_turns() {
        let solution = solve_cfop("F R U' B2 L D").unwrap();
        assert!(Algorithm::parse(&solution.full_solution.to_string()).is_ok());
    }

    #[test]
    fn serializes_camel_case() {
        let solution = solve_cfop("R U R' U'").unwrap();
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["totalSteps"], 4);
        assert_eq!(json["fullSolution"], "U R U' R'");
        assert_eq!(json["orientation"], ORIENTATION);
        assert_eq!(json["cross"]["steps"], 0);
        assert_eq!(json["f2l"]["moves"], "U R U' R'");
        assert_eq!(json["f2l"]["pairs"][1], "solved");
        assert_eq!(json["f2l"]["slots"][3]["slot"], "FR");
        assert_eq!(json["oll"]["case"], serde_json::Value::Null);
        assert_eq!(json["pll"]["name"], "skip");
    }

    #[test]
    fn last_layer_turns_are_reported() {
        let scramble = "R U R' U2 F' U' F R U2 R' U' R U R'";
        let solution = solve_cfop(scramble).unwrap();
        assert_eq!(solution.pll.case, None);
        assert_eq!(solution.pll.pre_auf, 0);
        assert_ne!(solution.pll.post_auf, 0);
        assert_eq!(solution.pll.stage.steps, 1);

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["pll"]["preAuf"], 0);
        assert_eq!(json["pll"]["postAuf"], solution.pll.post_auf);
        assert_eq!(json["oll"]["preAuf"], solution.oll.pre_auf);
    }

    #[test]
    fn first_two_layers_only() {
        let solver = CfopSolver::default();
        let layers = solver
            .solve_first_two_layers(alg("R U R' U'"), None)
            .unwrap();
        assert!(!layers.cross_supplied);
        assert_eq!(layers.cross.description, "cross already solved");
        assert_eq!(layers.f2l.stage.moves.to_string(), "U R U' R'");
        assert_eq!(layers.total_steps, 4);

        let json = serde_json::to_value(&layers).unwrap();
        assert_eq!(json["totalSteps"], 4);
        assert_eq!(json["crossSupplied"], false);
    }

    #[test]
    fn supplied_cross_is_kept() {
        let solver = CfopSolver::default();
        let layers = solver
            .solve_first_two_layers(alg("F"), Some(alg("F'")))
            .unwrap();
        assert!(layers.cross_supplied);
        assert_eq!(layers.cross.moves.to_string(), "F'");
        assert_eq!(layers.cross.description, "cross as supplied");
        assert_eq!(layers.f2l.stage.steps, 0);
        assert_eq!(layers.total_steps, 1);
    }

    #[test]
    fn supplied_cross_must_solve_the_cross() {
        let err = CfopSolver::default()
            .solve_first_two_layers(alg("F"), Some(alg("R")))
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::CrossNotSolved {
                cross: "R".to_string()
            }
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn tighter_config_is_respected() {
        let solver = CfopSolver::new(SolverConfig {
            cross_max_depth: 1,
            ..SolverConfig::default()
        });
        assert_eq!(
            solver.solve("F R D2 B L"),
            Err(SolveError::NoSolutionFound {
                stage: "cross",
                max_depth: 1
            })
        );
    }

    #[test]
    fn round_trips_random_scrambles() {
        fn property(scramble: Scramble) -> bool {
            let solution = CfopSolver::default()
                .solve_algorithm(scramble.algorithm())
                .unwrap();
            Cube::solved()
                .apply_all(scramble.0)
                .apply_all(&solution.full_solution)
                .is_solved()
        }

        quickcheck::QuickCheck::new()
            .tests(25)
            .quickcheck(property as fn(Scramble) -> bool);
    }
}
