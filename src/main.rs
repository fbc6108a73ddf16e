use cfopcube::prelude::*;
use cfopcube::service::{
    AnalyzeRequest, AnalyzeResponse, F2lRequest, F2lResponse, ServiceError, SolveRequest,
    SolveResponse, SolveService,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use std::io::{Read, Write};
use std::process::ExitCode;

/// Human-style CFOP solutions for a Rubik's cube scramble.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scramble in face-turn notation, e.g. R U R' U'
    scramble: Vec<String>,

    #[arg(long, value_enum, default_value_t = Mode::Solve)]
    mode: Mode,

    /// Solution to score, for --mode analyze
    #[arg(long)]
    solution: Option<String>,

    /// Cross to start from, for --mode f2l
    #[arg(long)]
    cross: Option<String>,

    /// Read the request as JSON from stdin and answer in JSON
    #[arg(long)]
    json: bool,

    /// Also search for an optimal solution to compare against
    #[arg(long)]
    oracle: bool,

    /// Print the scrambled cube as an unfolded net
    #[arg(long)]
    show: bool,

    #[arg(
        long,
        env = "CFOP_CROSS_DEPTH",
        default_value_t = SolverConfig::default().cross_max_depth,
        value_parser = clap::value_parser!(u8).range(1..=20),
    )]
    cross_depth: u8,

    #[arg(
        long,
        env = "CFOP_F2L_SEARCH_DEPTH",
        default_value_t = SolverConfig::default().f2l_search_depth,
        value_parser = clap::value_parser!(u8).range(1..=20),
    )]
    f2l_search_depth: u8,

    #[arg(
        long,
        env = "CFOP_ORACLE_DEPTH",
        default_value_t = SolverConfig::default().oracle_max_depth,
        value_parser = clap::value_parser!(u8).range(1..=20),
    )]
    oracle_depth: u8,

    /// -v for table timings, -vv for per-stage detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Full CFOP solution
    Solve,
    /// Score a hand-written solution against CFOP and the optimum
    Analyze,
    /// Cross and F2L only
    F2l,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            cross_max_depth: self.cross_depth,
            f2l_search_depth: self.f2l_search_depth,
            oracle_max_depth: self.oracle_depth,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).env().init() {
        eprintln!("Could not install logger: {}", e);
    }

    let result = run(
        &cli,
        &mut std::io::stdin(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let input_error = e
                .downcast_ref::<ServiceError>()
                .map_or(false, |e| e.status() == 400)
                || e.downcast_ref::<SolveError>()
                    .map_or(false, SolveError::is_input_error);
            ExitCode::from(if input_error { 2 } else { 1 })
        }
    }
}

/// `out` gets the answer; `aside` gets the net when the answer is JSON.
fn run(
    cli: &Cli,
    input: &mut dyn Read,
    out: &mut dyn Write,
    aside: &mut dyn Write,
) -> anyhow::Result<()> {
    CrossCoord::init_tables();
    init_tables();
    let service = SolveService::from_config(cli.config(), cli.oracle);

    let json = if cli.json {
        let mut json = String::new();
        input
            .read_to_string(&mut json)
            .context("reading request from stdin")?;
        Some(json)
    } else {
        None
    };
    let scramble = Some(cli.scramble.join(" "));

    match cli.mode {
        Mode::Solve => {
            let request = match json {
                Some(json) => parse_request(&json),
                None => Ok(SolveRequest { scramble }),
            };
            respond(cli, request.and_then(|r| service.handle(r)), out, aside)
        }
        Mode::Analyze => {
            let request = match json {
                Some(json) => parse_request(&json),
                None => Ok(AnalyzeRequest {
                    scramble,
                    solution: cli.solution.clone(),
                }),
            };
            respond(cli, request.and_then(|r| service.analyze(r)), out, aside)
        }
        Mode::F2l => {
            let request = match json {
                Some(json) => parse_request(&json),
                None => Ok(F2lRequest {
                    scramble,
                    cross: cli.cross.clone(),
                }),
            };
            respond(cli, request.and_then(|r| service.solve_f2l(r)), out, aside)
        }
    }
}

fn parse_request<T: DeserializeOwned>(json: &str) -> Result<T, ServiceError> {
    serde_json::from_str(json)
        .map_err(|e| ServiceError::BadRequest(format!("malformed request: {}", e)))
}

/// Writes the answer, or the error body in JSON mode. The net is only drawn
/// for a scramble the service accepted.
fn respond<T: Response>(
    cli: &Cli,
    result: Result<T, ServiceError>,
    out: &mut dyn Write,
    aside: &mut dyn Write,
) -> anyhow::Result<()> {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&err.response())?)?;
            }
            return Err(err.into());
        }
    };

    if cli.show {
        let cube = Cube::solved().apply_all(response.scramble());
        if cli.json {
            writeln!(aside, "{}", cube)?;
        } else {
            writeln!(out, "{}", cube)?;
        }
    }

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    } else {
        response.print(out)?;
    }
    Ok(())
}

trait Response: Serialize {
    fn scramble(&self) -> &Algorithm;
    fn print(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

fn print_stage(out: &mut dyn Write, name: &str, stage: &Stage) -> std::io::Result<()> {
    writeln!(out, "{:<5} ({:>2}) {}", name, stage.steps, stage.moves)?;
    writeln!(out, "           {}", stage.description)
}

fn print_slots(out: &mut dyn Write, f2l: &F2lStage) -> std::io::Result<()> {
    for slot in &f2l.slots {
        writeln!(out, "      {} {:<8} {}", slot.slot, slot.case.to_string(), slot.moves)?;
    }
    Ok(())
}

fn print_cfop(out: &mut dyn Write, solution: &CfopSolution) -> std::io::Result<()> {
    writeln!(out, "Scramble: {}", solution.scramble)?;
    writeln!(out, "Orientation: {}", solution.orientation)?;
    writeln!(out)?;

    print_stage(out, "Cross", &solution.cross)?;
    print_stage(out, "F2L", &solution.f2l.stage)?;
    print_slots(out, &solution.f2l)?;
    print_stage(out, "OLL", &solution.oll.stage)?;
    print_stage(out, "PLL", &solution.pll.stage)?;

    writeln!(out)?;
    writeln!(out, "Total: {} moves", solution.total_steps)?;
    writeln!(out, "Solution: {}", solution.full_solution)
}

impl Response for SolveResponse {
    fn scramble(&self) -> &Algorithm {
        &self.solution.scramble
    }

    fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        print_cfop(out, &self.solution)?;
        if let (Some(count), Some(optimal)) = (self.optimal_reference, &self.optimal_solution) {
            writeln!(out, "Optimal: {} moves ({})", count, optimal)?;
        }
        Ok(())
    }
}

impl Response for AnalyzeResponse {
    fn scramble(&self) -> &Algorithm {
        &self.analysis.reference.scramble
    }

    fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let analysis = &self.analysis;
        writeln!(out, "Scramble: {}", self.scramble)?;
        writeln!(out, "Your solution: {} ({} moves)", analysis.solution, analysis.user_steps)?;
        writeln!(out, "Solves: {}", if analysis.is_solved { "yes" } else { "no" })?;
        writeln!(out, "CFOP: {} moves", analysis.cfop_steps)?;
        if let Some(optimal) = analysis.optimal_steps {
            writeln!(out, "Optimal: {} moves", optimal)?;
        }
        if let (Some(efficiency), Some(level)) = (analysis.efficiency, analysis.level) {
            writeln!(out, "Efficiency: {}/10 ({:?})", efficiency, level)?;
        }
        Ok(())
    }
}

impl Response for F2lResponse {
    fn scramble(&self) -> &Algorithm {
        &self.solution.scramble
    }

    fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let solution = &self.solution;
        writeln!(out, "Scramble: {}", solution.scramble)?;
        writeln!(out)?;
        print_stage(out, "Cross", &solution.cross)?;
        print_stage(out, "F2L", &solution.f2l.stage)?;
        print_slots(out, &solution.f2l)?;
        writeln!(out)?;
        writeln!(out, "Total: {} moves", solution.total_steps)
    }
}
