// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::RunOptions,
    core::net::Fetcher,
    file::save_to_json,
    progress::Progress,
    scrape::crawl_board,
};

/// Records written for one board (or the combined file).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub label: String,
    pub count: usize,
    pub path: PathBuf,
}

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-board files, in board order.
    pub boards: Vec<FileSummary>,
    pub combined: Option<FileSummary>,
}

impl RunSummary {
    pub fn files_written(&self) -> Vec<PathBuf> {
        self.boards
            .iter()
            .chain(self.combined.iter())
            .map(|f| f.path.clone())
            .collect()
    }
}

/// Crawl every board in order, write each board's file, then the combined file.
///
/// The first fetch or write error aborts the run. Files already written for
/// earlier boards stay on disk; later boards and the combined file are not
/// written.
pub fn run(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let fetcher = Fetcher::new(&opts.base_url)?;
    logf!("run: {} board(s) from {} into {}", opts.boards.len(), fetcher.base_url(), opts.out_dir.display());

    let mut summary = RunSummary::default();
    let mut all_records = Vec::new();

    for board in opts.boards {
        let records = crawl_board(&fetcher, board, progress)
            .inspect_err(|e| loge!("[{}] crawl failed: {e}", board.name))?;

        let path = opts.board_path(board);
        save_to_json(&records, &path)
            .inspect_err(|e| loge!("[{}] write failed: {e}", board.name))?;
        progress.saved(board.name, records.len(), &path);

        summary.boards.push(FileSummary {
            label: s!(board.name),
            count: records.len(),
            path,
        });
        all_records.extend(records);
    }

    let combined = opts.combined_path();
    save_to_json(&all_records, &combined)
        .inspect_err(|e| loge!("[combined] write failed: {e}"))?;
    progress.saved("combined", all_records.len(), &combined);
    progress.finish();

    summary.combined = Some(FileSummary {
        label: s!("combined"),
        count: all_records.len(),
        path: combined,
    });
    Ok(summary)
}
