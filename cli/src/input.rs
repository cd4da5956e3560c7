//! Reader for the whitespace-separated graph description:
//!
//! ```text
//! <vertex count>
//! <label> <heuristic>          (once per vertex)
//! <edge count>
//! <source> <target> <weight>   (once per edge)
//! <start label> <goal label>
//! ```
//!
//! Records may be split across lines arbitrarily.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use astar_route_core::{Graph, GraphError};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::CliError;

pub const INVALID_VERTEX_MSG: &str = "Invalid vertex label. Please try again.";

/// Upper bound on up-front node allocation; the count itself is untrusted.
const MAX_PREALLOC_NODES: usize = 4096;

/// Graph plus the requested endpoints, as read from input.
#[derive(Debug)]
pub struct Problem {
    pub graph: Graph,
    pub start: String,
    pub goal: String,
}

/// Pulls whitespace-separated tokens from a line-oriented reader.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self, expected: &'static str) -> Result<String, CliError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::UnexpectedEof { expected });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn next_number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, CliError> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| CliError::InvalidNumber { expected, token })
    }
}

/// Counts consecutive rejected records against the configured limit.
struct Retries {
    limit: u32,
    used: u32,
}

impl Retries {
    fn bump(&mut self) -> Result<(), CliError> {
        self.used += 1;
        if self.used > self.limit {
            return Err(CliError::TooManyRetries { limit: self.limit });
        }
        Ok(())
    }
}

/// Read a full problem description, writing prompts to `prompt` when enabled.
///
/// A duplicate vertex label or an edge with an unknown endpoint is reported
/// and the record read again, unless `settings.strict` is set.
pub fn read_problem<R: BufRead, P: Write>(
    tokens: &mut Tokens<R>,
    prompt: &mut P,
    settings: &Settings,
) -> Result<Problem, CliError> {
    let say = |prompt: &mut P, msg: &str| -> Result<(), CliError> {
        if settings.prompts {
            write!(prompt, "{}", msg)?;
            prompt.flush()?;
        }
        Ok(())
    };
    let mut retries = Retries {
        limit: settings.max_retries,
        used: 0,
    };

    say(prompt, "Enter the number of vertices: ")?;
    let vertex_count: usize = tokens.next_number("vertex count")?;
    let mut graph = Graph::with_capacity(vertex_count.min(MAX_PREALLOC_NODES));

    let mut i = 0;
    while i < vertex_count {
        say(
            prompt,
            &format!("Enter vertex details (label heuristic) for vertex {}: ", i + 1),
        )?;
        let label = tokens.next_token("vertex label")?;
        let heuristic: f64 = tokens.next_number("vertex heuristic")?;
        if heuristic < 0.0 {
            warn!(%label, heuristic, "negative heuristic; results may be wrong");
        }

        match graph.add_node(label, heuristic) {
            Ok(_) => {
                retries.used = 0;
                i += 1;
            }
            Err(err @ GraphError::DuplicateLabel(_)) if !settings.strict => {
                warn!(error = %err, "rejected vertex record");
                say(prompt, &format!("{}\n", INVALID_VERTEX_MSG))?;
                retries.bump()?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    say(prompt, "Enter the number of edges: ")?;
    let edge_count: usize = tokens.next_number("edge count")?;

    let mut i = 0;
    while i < edge_count {
        say(
            prompt,
            &format!("Enter edge details (source destination cost) for edge {}: ", i + 1),
        )?;
        let from = tokens.next_token("edge source")?;
        let to = tokens.next_token("edge target")?;
        let weight: f64 = tokens.next_number("edge weight")?;
        if weight < 0.0 {
            warn!(%from, %to, weight, "negative edge weight is not supported");
        }

        match graph.add_edge(&from, &to, weight) {
            Ok(()) => {
                retries.used = 0;
                i += 1;
            }
            Err(err @ GraphError::UnknownLabel(_)) if !settings.strict => {
                warn!(error = %err, "rejected edge record");
                say(prompt, &format!("{}\n", INVALID_VERTEX_MSG))?;
                retries.bump()?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    say(prompt, "Enter the start vertex label: ")?;
    let start = tokens.next_token("start label")?;
    say(prompt, "Enter the goal vertex label: ")?;
    let goal = tokens.next_token("goal label")?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        %start,
        %goal,
        "input read"
    );

    Ok(Problem { graph, start, goal })
}
