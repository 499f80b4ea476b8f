// src/progress.rs
use std::path::Path;

use crate::config::boards::BoardConfig;
use crate::scrape::PageWarning;

/// Status hooks for a run. The CLI prints; tests record or ignore.
pub trait Progress {
    /// A board is about to be crawled.
    fn begin(&mut self, _board: &BoardConfig) {}

    /// One page was fetched and parsed.
    fn page_done(&mut self, _board: &BoardConfig, _page: u32, _kept: usize) {}

    /// A page produced no records. Never fatal.
    fn page_warning(&mut self, _board: &BoardConfig, _warning: &PageWarning) {}

    /// A JSON file was written. `label` is a board name or `combined`.
    fn saved(&mut self, _label: &str, _count: usize, _path: &Path) {}

    /// Called once after the combined file is written.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summaries to stdout, page warnings to stderr.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn page_warning(&mut self, _board: &BoardConfig, warning: &PageWarning) {
        eprintln!("{warning}");
    }

    fn saved(&mut self, label: &str, count: usize, path: &Path) {
        println!("{}", saved_line(label, count, path));
    }
}

/// Summary line printed after a JSON file is written.
pub fn saved_line(label: &str, count: usize, path: &Path) -> String {
    format!("[{label}] 총 {count}건을 '{}'에 저장했습니다.", path.display())
}
