use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_MAX_RETRIES: u32 = 16;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "astar-route")]
#[command(about = "Read a weighted digraph with heuristics, run A*, print the cheapest path")]
pub struct Args {
    /// Read the graph from this file instead of stdin
    #[arg(short, long, value_name = "PATH", env = "ASTAR_ROUTE_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "ASTAR_ROUTE_FORMAT")]
    pub format: OutputFormat,

    /// Always print input prompts to stderr (default: only when stdin is a terminal)
    #[arg(long, overrides_with = "no_prompts")]
    pub prompts: bool,

    /// Never print input prompts
    #[arg(long)]
    pub no_prompts: bool,

    /// Fail on a duplicate vertex or an edge with an unknown endpoint instead of re-reading it
    #[arg(long, env = "ASTAR_ROUTE_STRICT")]
    pub strict: bool,

    /// Consecutive invalid records tolerated before giving up
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_RETRIES,
        value_parser = clap::value_parser!(u32).range(0..=1024)
    )]
    pub max_retries: u32,

    /// tracing filter directive, e.g. "debug" or "astar_route_core=trace"
    #[arg(long, value_name = "FILTER", env = "ASTAR_ROUTE_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

/// Resolved run settings. Independent of clap so tests can build them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub prompts: bool,
    pub strict: bool,
    pub max_retries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            prompts: false,
            strict: false,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Args {
    /// Resolve flags into settings. Explicit prompt flags win over the
    /// terminal check.
    pub fn settings(&self, stdin_is_terminal: bool) -> Settings {
        let prompts = if self.no_prompts {
            false
        } else if self.prompts {
            true
        } else {
            self.input.is_none() && stdin_is_terminal
        };

        Settings {
            format: self.format,
            prompts,
            strict: self.strict,
            max_retries: self.max_retries,
        }
    }
}
