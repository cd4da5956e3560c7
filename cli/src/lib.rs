//! astar-route-cli: front end for astar-route-core.
//!
//! Reads a graph description (vertices with heuristics, weighted edges, start
//! and goal), runs A* and reports the cost and path as text or JSON.

pub mod config;
mod error;
mod input;
mod report;

use std::io::{BufRead, Write};

use astar_route_core::{search, SearchResult};
use tracing::info;

pub use config::{Args, OutputFormat, Settings};
pub use error::CliError;
pub use input::{read_problem, Problem, Tokens, INVALID_VERTEX_MSG};
pub use report::Report;

/// Build the report for a problem that has already been read.
pub fn solve(problem: &Problem) -> Result<Report, CliError> {
    for label in [&problem.start, &problem.goal] {
        if problem.graph.resolve(label).is_none() {
            return Ok(Report::InvalidEndpoint {
                label: label.clone(),
            });
        }
    }

    let run = search(&problem.graph, &problem.start, &problem.goal)?;
    let report = match run.result() {
        SearchResult::Found(cost) => {
            let path = run
                .reconstruct_path(&problem.goal)?
                .into_iter()
                .map(|step| step.label)
                .collect();
            Report::Found {
                cost,
                path,
                nodes_expanded: run.nodes_expanded(),
            }
        }
        SearchResult::NotFound => Report::NotFound {
            nodes_expanded: run.nodes_expanded(),
        },
    };

    info!(
        start = %problem.start,
        goal = %problem.goal,
        expanded = run.nodes_expanded(),
        found = run.result().is_found(),
        "search complete"
    );
    Ok(report)
}

/// Read a problem from `input`, solve it, and write the report to `out`.
/// Prompts (when enabled) go to `prompt`.
pub fn run<R: BufRead, W: Write, P: Write>(
    input: R,
    out: &mut W,
    prompt: &mut P,
    settings: &Settings,
) -> Result<Report, CliError> {
    let mut tokens = Tokens::new(input);
    let problem = read_problem(&mut tokens, prompt, settings)?;
    let report = solve(&problem)?;
    report.write(out, settings.format)?;
    Ok(report)
}
