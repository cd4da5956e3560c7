use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliError;

/// What a run has to tell the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Found {
        cost: f64,
        path: Vec<String>,
        nodes_expanded: usize,
    },
    NotFound {
        nodes_expanded: usize,
    },
    /// Start or goal label is not in the graph.
    InvalidEndpoint {
        label: String,
    },
}

impl Report {
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Text => self.write_text(out)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            Report::Found { cost, path, .. } => {
                // Debug keeps the fractional part: 2.0, not 2
                writeln!(out, "Shortest path cost: {:?}", cost)?;
                writeln!(out, "Path: {}", path.join(" "))
            }
            Report::NotFound { .. } => writeln!(out, "No path found"),
            Report::InvalidEndpoint { .. } => writeln!(out, "Invalid start or goal vertex label"),
        }
    }
}
