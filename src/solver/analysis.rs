use crate::prelude::*;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Rates a solution by its length and efficiency score.
    pub fn rate(user_steps: usize, efficiency: u8) -> SkillLevel {
        if user_steps <= 40 && efficiency >= 9 {
            SkillLevel::Expert
        } else if user_steps <= 50 && efficiency >= 8 {
            SkillLevel::Advanced
        } else if user_steps <= 60 && efficiency >= 6 {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }
}

/// How a hand-written solution compares with the staged and optimal ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionAnalysis {
    /// The user's solution as face turns.
    pub solution: Algorithm,
    pub is_solved: bool,
    /// Turns as written, not counting whole-cube rotations.
    pub user_steps: usize,
    pub cfop_steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_steps: Option<usize>,
    /// 1 to 10, only for solutions that solve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    pub reference: CfopSolution,
}

/// 10 when no longer than `reference`, one point less per three extra
/// turns, never below 1.
pub fn efficiency(user_steps: usize, reference: usize) -> u8 {
    let extra = user_steps.saturating_sub(reference) / 3;
    10usize.saturating_sub(extra).max(1) as u8
}

fn written_turns(solution: &str) -> usize {
    solution
        .split_whitespace()
        .filter(|token| !token.starts_with(['x', 'y', 'z']))
        .count()
}

impl CfopSolver {
    /// Replays `solution` on `scramble` and scores it against the staged
    /// solution, or against `optimal_steps` when one is known.
    pub fn analyze(
        &self,
        scramble: Algorithm,
        solution: &str,
        optimal_steps: Option<usize>,
    ) -> Result<SolutionAnalysis, SolveError> {
        let moves = Algorithm::parse_notation(solution)?;
        let reference = self.solve_algorithm(scramble)?;

        let is_solved = Cube::solved()
            .apply_all(&reference.scramble)
            .apply_all(&moves)
            .is_solved();
        let user_steps = written_turns(solution);
        let cfop_steps = reference.total_steps;

        let score = is_solved.then(|| efficiency(user_steps, optimal_steps.unwrap_or(cfop_steps)));
        log::debug!(
            "analysed {} turns against {}: solved {}, efficiency {:?}",
            user_steps,
            cfop_steps,
            is_solved,
            score
        );

        Ok(SolutionAnalysis {
            solution: moves,
            is_solved,
            user_steps,
            cfop_steps,
            optimal_steps,
            level: score.map(|score| SkillLevel::rate(user_steps, score)),
            efficiency: score,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(scramble: &str, solution: &str) -> Result<SolutionAnalysis, SolveError> {
        CfopSolver::default().analyze(Algorithm::parse(scramble).unwrap(), solution, None)
    }

    #[test]
    fn inverse_scores_full_marks() {
        let analysis = analyze("R U R' U'", "U R U' R'").unwrap();
        assert!(analysis.is_solved);
        assert_eq!(analysis.user_steps, 4);
        assert_eq!(analysis.cfop_steps, 4);
        assert_eq!(analysis.efficiency, Some(10));
        assert_eq!(analysis.level, Some(SkillLevel::Expert));
    }

    #[test]
    fn unsolved_gets_no_score() {
        let analysis = analyze("R U R' U'", "U R").unwrap();
        assert!(!analysis.is_solved);
        assert_eq!(analysis.user_steps, 2);
        assert_eq!(analysis.efficiency, None);
        assert_eq!(analysis.level, None);

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["isSolved"], false);
        assert!(json.get("efficiency").is_none());
        assert_eq!(json["reference"]["totalSteps"], 4);
    }

    #[test]
    fn rotations_are_followed_but_not_counted() {
        let analysis = analyze("R U R' U'", "y U F U' F'").unwrap();
        assert!(analysis.is_solved);
        assert_eq!(analysis.user_steps, 4);
        assert_eq!(analysis.solution.to_string(), "U R U' R'");
    }

    #[test]
    fn bad_solution_token_is_an_input_error() {
        let err = analyze("R U", "U' Q").unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidMoveToken {
                token: "Q".to_string()
            }
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn optimal_count_is_the_yardstick_when_known() {
        let scramble = Algorithm::parse("R U R' U'").unwrap();
        let long_way = "U R U' R' R U R' U' U R U' R'";
        let analysis = CfopSolver::default()
            .analyze(scramble, long_way, Some(4))
            .unwrap();
        assert!(analysis.is_solved);
        assert_eq!(analysis.user_steps, 12);
        assert_eq!(analysis.optimal_steps, Some(4));
        assert_eq!(analysis.efficiency, Some(8));
    }

    #[test]
    fn efficiency_drops_every_three_turns() {
        assert_eq!(efficiency(4, 4), 10);
        assert_eq!(efficiency(3, 4), 10);
        assert_eq!(efficiency(12, 10), 10);
        assert_eq!(efficiency(13, 10), 9);
        assert_eq!(efficiency(20, 10), 7);
        assert_eq!(efficiency(100, 10), 1);
    }

    #[test]
    fn levels_need_both_length_and_efficiency() {
        assert_eq!(SkillLevel::rate(40, 9), SkillLevel::Expert);
        assert_eq!(SkillLevel::rate(41, 10), SkillLevel::Advanced);
        assert_eq!(SkillLevel::rate(40, 8), SkillLevel::Advanced);
        assert_eq!(SkillLevel::rate(60, 6), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::rate(61, 10), SkillLevel::Beginner);
        assert_eq!(SkillLevel::rate(30, 5), SkillLevel::Beginner);
    }
}
