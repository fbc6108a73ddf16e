use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid move token {token:?}")]
    InvalidMoveToken { token: String },

    #[error("{stage} search found no solution within {max_depth} moves")]
    NoSolutionFound { stage: &'static str, max_depth: u8 },

    #[error("no OLL case matches the last-layer orientation")]
    OllRecognition,

    #[error("no PLL case matches the last-layer permutation")]
    PllRecognition,

    #[error("supplied cross {cross:?} does not solve the cross")]
    CrossNotSolved { cross: String },

    #[error("solver inconsistency: {0}")]
    SolverInconsistency(String),
}

impl SolveError {
    /// Errors caused by the caller's input rather than by a solver defect.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SolveError::InvalidMoveToken { .. } | SolveError::CrossNotSolved { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("reference oracle unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_caller_mistakes_are_input_errors() {
        assert!(SolveError::InvalidMoveToken {
            token: "X9".to_string()
        }
        .is_input_error());
        assert!(SolveError::CrossNotSolved {
            cross: "R".to_string()
        }
        .is_input_error());
        assert!(!SolveError::OllRecognition.is_input_error());
        assert!(!SolveError::SolverInconsistency("x".into()).is_input_error());
        assert!(!SolveError::NoSolutionFound {
            stage: "cross",
            max_depth: 8
        }
        .is_input_error());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = SolveError::InvalidMoveToken {
            token: "X9".to_string(),
        };
        assert_eq!(err.to_string(), "invalid move token \"X9\"");
        assert_eq!(
            SolveError::NoSolutionFound {
                stage: "cross",
                max_depth: 8
            }
            .to_string(),
            "cross search found no solution within 8 moves"
        );
        assert_eq!(
            SolveError::CrossNotSolved {
                cross: "R U".to_string()
            }
            .to_string(),
            "supplied cross \"R U\" does not solve the cross"
        );
    }
}
