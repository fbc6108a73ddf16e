use crate::prelude::*;

use super::search::iddfs;

/// How a slot got solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCase {
    Solved,
    Case(F2lCaseId),
    Search,
}

impl std::fmt::Display for SlotCase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SlotCase::Solved => write!(f, "solved"),
            SlotCase::Case(id) => write!(f, "{}", id),
            SlotCase::Search => write!(f, "search"),
        }
    }
}

impl serde::Serialize for SlotCase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SlotSolution {
    pub slot: Slot,
    pub case: SlotCase,
    pub moves: Algorithm,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct F2lSolution {
    pub moves: Algorithm,
    /// In the order the slots were solved.
    pub slots: Vec<SlotSolution>,
}

impl F2lSolution {
    /// Case of each slot in FR, FL, BL, BR order.
    pub fn pairs(&self) -> Vec<SlotCase> {
        Slot::all()
            .map(|slot| {
                self.slots
                    .iter()
                    .find(|s| s.slot == slot)
                    .map_or(SlotCase::Solved, |s| s.case)
            })
            .collect()
    }
}

pub fn is_f2l_solved(cube: &Cube) -> bool {
    is_cross_solved(cube) && Slot::all().all(|s| s.is_solved(cube))
}

fn slot_goal(cube: &Cube, done: &[Slot], slot: Slot) -> bool {
    is_cross_solved(cube) && slot.is_solved(cube) && done.iter().all(|s| s.is_solved(cube))
}

/// Solves the four slots over a solved cross. Each round solves whichever
/// remaining slot takes the fewest moves, preferring FR, FL, BL, BR on ties.
pub fn solve_f2l(cube: &Cube, search_depth: u8) -> Result<F2lSolution, SolveError> {
    if !is_cross_solved(cube) {
        return Err(SolveError::SolverInconsistency(
            "F2L started without a solved cross".to_string(),
        ));
    }

    let mut cube = *cube;
    let mut done = Vec::new();
    let mut slots = Vec::new();
    let mut moves = Algorithm::new();

    while done.len() < 4 {
        let mut best: Option<(Slot, Algorithm, SlotCase)> = None;
        for slot in Slot::all().filter(|s| !done.contains(s)) {
            if slot.is_solved(&cube) {
                best = Some((slot, Algorithm::new(), SlotCase::Solved));
                break;
            }
            let (plan, case) = plan_slot(&cube, slot, &done, search_depth)?;
            if best.as_ref().map_or(true, |(_, b, _)| plan.len() < b.len()) {
                best = Some((slot, plan, case));
            }
        }

        let (slot, plan, case) = best.ok_or_else(|| {
            SolveError::SolverInconsistency("no F2L slot left to solve".to_string())
        })?;

        cube = cube.apply_all(&plan);
        if !slot_goal(&cube, &done, slot) {
            return Err(SolveError::SolverInconsistency(format!(
                "slot {} not solved by {}",
                slot, plan
            )));
        }
        log::debug!("F2L slot {}: {} ({})", slot, plan, case);

        let description = match case {
            SlotCase::Solved => "already solved".to_string(),
            SlotCase::Case(id) => F2lCase::all()
                .iter()
                .find(|c| c.id == id)
                .map_or_else(String::new, |c| c.description.clone()),
            SlotCase::Search => "found by search".to_string(),
        };

        done.push(slot);
        moves.extend(&plan);
        slots.push(SlotSolution {
            slot,
            case,
            moves: plan,
            description,
        });
    }

    Ok(F2lSolution {
        moves: moves.simplified(),
        slots,
    })
}

/// Moves that solve `slot` while keeping the cross and the `done` slots.
fn plan_slot(
    cube: &Cube,
    slot: Slot,
    done: &[Slot],
    search_depth: u8,
) -> Result<(Algorithm, SlotCase), SolveError> {
    let mut setup = Algorithm::new();
    let mut state = *cube;

    // Lift pieces out of other slots first; each lift may expose another.
    for _ in 0..4 {
        let config = PairConfig::of(&state, slot);
        let stuck = Slot::holding_corner(config.corner)
            .filter(|&s| s != slot)
            .or_else(|| Slot::holding_edge(config.edge).filter(|&s| s != slot));

        match stuck {
            None => break,
            Some(other) => {
                setup.extend(other.extraction());
                state = state.apply_all(other.extraction());
            }
        }
    }

    log::debug!(
        "slot {} pair {}",
        slot,
        if PairConfig::of(&state, slot).is_paired(slot) { "joined" } else { "split" }
    );
    for turns in 0..4 {
        let turned = state.apply_all(auf(turns));
        let config = PairConfig::of(&turned, slot);
        if let Some((case, algorithm)) = F2lCase::recognize(slot, &config) {
            if slot_goal(&turned.apply_all(algorithm), done, slot) {
                let mut plan = setup;
                plan.extend(auf(turns));
                plan.extend(algorithm);
                return Ok((plan.simplified(), SlotCase::Case(case.id)));
            }
            log::debug!("{} matched slot {} but did not solve it", case.id, slot);
        }
    }

    log::warn!(
        "no F2L case resolves slot {}, searching up to {} moves",
        slot,
        search_depth
    );
    iddfs(cube, search_depth, |c| slot_goal(c, done, slot))
        .map(|found| (found.moves, SlotCase::Search))
        .ok_or_else(|| {
            SolveError::SolverInconsistency(format!(
                "slot {} unresolved after searching {} moves",
                slot, search_depth
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_has_nothing_to_do() {
        let solution = solve_f2l(&Cube::solved(), 6).unwrap();
        assert!(solution.moves.is_empty());
        assert_eq!(solution.pairs(), vec![SlotCase::Solved; 4]);
        assert_eq!(
            solution.slots.iter().map(|s| s.slot).collect::<Vec<_>>(),
            Slot::all().collect::<Vec<_>>()
        );
    }

    #[test]
    fn refuses_unsolved_cross() {
        assert!(matches!(
            solve_f2l(&cube_with_moves("F"), 6),
            Err(SolveError::SolverInconsistency(_))
        ));
    }

    #[test]
    fn single_pair_uses_its_case() {
        let cube = cube_with_moves("R U R' U'");
        let solution = solve_f2l(&cube, 6).unwrap();
        assert_eq!(solution.moves.to_string(), "U R U' R'");
        assert_eq!(solution.slots.last().map(|s| s.slot), Some(Slot::Fr));
        assert!(matches!(solution.pairs()[0], SlotCase::Case(_)));
        assert_eq!(&solution.pairs()[1..], &[SlotCase::Solved; 3]);
        assert!(is_f2l_solved(&cube.apply_all(&solution.moves)));
    }

    #[test]
    fn pair_in_another_slot_is_extracted() {
        // The FR corner ends up in the FL slot.
        let cube = cube_with_moves("R U' R' L' U L");
        assert_eq!(Slot::holding_corner(cube.locate_corner(Corner::Dfr).0), Some(Slot::Fl));

        let (plan, case) = plan_slot(&cube, Slot::Fr, &[Slot::Bl, Slot::Br], 6).unwrap();
        assert!(matches!(case, SlotCase::Case(_)));
        let after = cube.apply_all(&plan);
        assert!(Slot::Fr.is_solved(&after) && is_cross_solved(&after));

        let solution = solve_f2l(&cube, 6).unwrap();
        assert!(is_f2l_solved(&cube.apply_all(&solution.moves)));
        assert!(solution.slots.iter().all(|s| s.case != SlotCase::Search));
    }

    #[test]
    fn every_case_resolves_with_its_own_algorithm() {
        for slot in Slot::all() {
            let others = Slot::all().filter(|&s| s != slot).collect::<Vec<_>>();
            for state in f2l_pair_states(slot) {
                if slot.is_solved(&state) {
                    continue;
                }
                let (plan, case) = plan_slot(&state, slot, &others, 6).unwrap();
                assert!(matches!(case, SlotCase::Case(_)), "{} fell back to search", slot);
                assert!(is_f2l_solved(&state.apply_all(&plan)));
            }
        }
    }

    #[test]
    fn case_states_use_documented_length() {
        let others = [Slot::Fl, Slot::Bl, Slot::Br];
        for case in F2lCase::all() {
            let state = Cube::solved().apply_all(&case.algorithm.inverse());
            let (plan, found) = plan_slot(&state, Slot::Fr, &others, 6).unwrap();
            assert_eq!(found, SlotCase::Case(case.id));
            assert_eq!(plan.len(), case.algorithm.len());
        }
    }

    #[test]
    fn solves_after_any_cross() {
        fn property(scramble: Scramble) -> bool {
            let cube = Cube::solved().apply_all(scramble.0);
            let cube = cube.apply_all(&solve_cross(&cube, 8).unwrap());
            let solution = solve_f2l(&cube, 6).unwrap();
            solution.slots.len() == 4 && is_f2l_solved(&cube.apply_all(&solution.moves))
        }

        quickcheck::QuickCheck::new()
            .tests(25)
            .quickcheck(property as fn(Scramble) -> bool);
    }
}
