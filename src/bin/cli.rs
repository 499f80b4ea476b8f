// src/bin/cli.rs
use color_eyre::eyre::{eyre, Report};
use sangnok_scrape::cli;

/// Rebuild the source chain as eyre context so the report shows every cause.
fn report(err: &(dyn std::error::Error + 'static)) -> Report {
    let mut chain = cli::error_chain(err).into_iter().rev();
    let root = chain.next().unwrap_or_default();
    chain.fold(eyre!(root), |report, msg| report.wrap_err(msg))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| report(e.as_ref()))?;
    Ok(())
}
