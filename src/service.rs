//! Request/response wrapper around the solver, independent of transport.

use crate::prelude::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveRequest {
    pub scramble: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub success: bool,
    pub scramble: String,
    pub solution: CfopSolution,
    /// Move count of the oracle's solution, when it produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_reference: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_solution: Option<Algorithm>,
    /// The solution above always comes from the staged solver, never the oracle.
    pub genuine_cfop: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub scramble: Option<String>,
    pub solution: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub scramble: String,
    #[serde(flatten)]
    pub analysis: SolutionAnalysis,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct F2lRequest {
    pub scramble: Option<String>,
    /// Optional cross to start from instead of searching for one.
    pub cross: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct F2lResponse {
    pub success: bool,
    #[serde(flatten)]
    pub solution: FirstTwoLayers,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Internal { message: String, details: String },
}

impl ServiceError {
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::Internal { .. } => 500,
        }
    }

    pub fn response(&self) -> ErrorResponse {
        match self {
            ServiceError::BadRequest(message) => ErrorResponse {
                success: false,
                error: message.clone(),
                details: None,
            },
            ServiceError::Internal { message, details } => ErrorResponse {
                success: false,
                error: message.clone(),
                details: Some(details.clone()),
            },
        }
    }
}

impl From<SolveError> for ServiceError {
    fn from(err: SolveError) -> ServiceError {
        if err.is_input_error() {
            ServiceError::BadRequest(err.to_string())
        } else {
            ServiceError::Internal {
                message: "failed to solve cube".to_string(),
                details: err.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub struct SolveService<O> {
    solver: CfopSolver,
    oracle: Option<O>,
}

impl<O: ReferenceOracle> SolveService<O> {
    pub fn new(solver: CfopSolver, oracle: Option<O>) -> Self {
        SolveService { solver, oracle }
    }

    pub fn handle(&self, request: SolveRequest) -> Result<SolveResponse, ServiceError> {
        let scramble = required(&request.scramble, "scramble")?;
        let solution = self.solver.solve(scramble).map_err(|err| failed(scramble, err))?;
        let optimal = self.optimal(&solution.scramble);

        Ok(SolveResponse {
            success: true,
            scramble: scramble.to_string(),
            optimal_reference: optimal.as_ref().map(Algorithm::len),
            optimal_solution: optimal,
            solution,
            genuine_cfop: true,
        })
    }

    /// Scores a hand-written solution. The scramble takes face turns only,
    /// the solution may use wide turns, slices and rotations.
    pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, ServiceError> {
        let scramble = required(&request.scramble, "scramble")?;
        let solution = required(&request.solution, "solution")?;

        let moves = Algorithm::parse(scramble).map_err(ServiceError::from)?;
        let optimal = self.optimal(&moves).as_ref().map(Algorithm::len);
        let analysis = self
            .solver
            .analyze(moves, solution, optimal)
            .map_err(|err| failed(scramble, err))?;

        Ok(AnalyzeResponse {
            success: true,
            scramble: scramble.to_string(),
            analysis,
        })
    }

    /// Cross and F2L only, from the caller's cross when one is given.
    pub fn solve_f2l(&self, request: F2lRequest) -> Result<F2lResponse, ServiceError> {
        let scramble = required(&request.scramble, "scramble")?;
        let moves = Algorithm::parse(scramble).map_err(ServiceError::from)?;
        let cross = request
            .cross
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Algorithm::parse_notation)
            .transpose()
            .map_err(ServiceError::from)?;

        let solution = self
            .solver
            .solve_first_two_layers(moves, cross)
            .map_err(|err| failed(scramble, err))?;

        Ok(F2lResponse {
            success: true,
            solution,
        })
    }

    fn optimal(&self, scramble: &Algorithm) -> Option<Algorithm> {
        self.oracle.as_ref().and_then(|oracle| {
            oracle
                .optimal_solve(scramble)
                .map_err(|err| log::warn!("{}", err))
                .ok()
        })
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, ServiceError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServiceError::BadRequest(format!("{} is required", name)))
}

fn failed(scramble: &str, err: SolveError) -> ServiceError {
    if !err.is_input_error() {
        log::warn!("solving {:?} failed: {}", scramble, err);
    }
    ServiceError::from(err)
}

impl SolveService<MeetInTheMiddle> {
    /// A service with the bounded meet-in-the-middle oracle when `with_oracle`.
    pub fn from_config(config: SolverConfig, with_oracle: bool) -> Self {
        let oracle = with_oracle.then(|| MeetInTheMiddle::from(&config));
        SolveService::new(CfopSolver::new(config), oracle)
    }
}
