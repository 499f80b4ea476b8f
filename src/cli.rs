// src/cli.rs
use std::error::Error;

use crate::config::options::RunOptions;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// Live run with the built-in boards. Takes no arguments; output files and
/// the debug log land next to the executable.
pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    let opts = RunOptions::beside_executable()?;
    if let Err(e) = crate::log::init(&opts.log_path()) {
        eprintln!("Warning: debug log disabled ({}): {e}", opts.log_path().display());
    }
    runner::run(&opts, &mut ConsoleProgress)
}

/// `err` followed by each of its sources, outermost first.
pub fn error_chain(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(e) = source {
        chain.push(e.to_string());
        source = e.source();
    }
    chain
}
