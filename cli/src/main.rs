//! astar-route binary: read a graph from stdin or a file, print the A* result.

mod logging;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::Context;
use astar_route_cli::{run, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log)?;

    let settings = args.settings(io::stdin().is_terminal());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut prompt = io::stderr();

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            run(BufReader::new(file), &mut out, &mut prompt, &settings)?;
        }
        None => {
            run(io::stdin().lock(), &mut out, &mut prompt, &settings)?;
        }
    }
    Ok(())
}
