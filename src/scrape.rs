// src/scrape.rs
use std::{error::Error, fmt};

use crate::{
    config::boards::BoardConfig,
    core::net::Fetcher,
    progress::Progress,
    specs::facilities::{parse_facilities, FacilityRecord},
};

/// Why a page contributed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageWarning {
    /// Data rows were present but none passed the type filter.
    Filtered(u32),
    /// No data rows at all.
    Empty(u32),
}

impl fmt::Display for PageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageWarning::Filtered(p) => write!(f, "경고: {p}페이지에서 조건에 맞는 데이터가 없습니다."),
            PageWarning::Empty(p) => write!(f, "경고: {p}페이지에서 수집된 데이터가 없습니다."),
        }
    }
}

/// Crawl every page of `board` in order and return the kept records.
/// Empty pages only warn; the first fetch error aborts.
pub fn crawl_board(
    fetcher: &Fetcher,
    board: &BoardConfig,
    progress: &mut dyn Progress,
) -> Result<Vec<FacilityRecord>, Box<dyn Error>> {
    progress.begin(board);
    logf!("[{}] crawling pages {:?}", board.name, board.pages);

    let mut results = Vec::new();
    for page in board.pages.clone() {
        let html = fetcher.fetch_page(page, board.params)?;
        let parsed = parse_facilities(&html, board);
        let kept = parsed.records.len();

        if parsed.records.is_empty() {
            let warning = if parsed.has_rows {
                PageWarning::Filtered(page)
            } else {
                PageWarning::Empty(page)
            };
            logw!("[{}] {warning}", board.name);
            progress.page_warning(board, &warning);
        } else {
            results.extend(parsed.records);
        }
        progress.page_done(board, page, kept);
    }

    logf!("[{}] {} record(s) total", board.name, results.len());
    Ok(results)
}
