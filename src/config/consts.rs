// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.ansan.go.kr/sangnokgu/common/bbs/selectPageListBbs.do";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 20;
pub const PAGE_PARAM: &str = "currentPage";

// Scrape
pub const ROW_SELECTOR: &str = "table.p-table.simple tbody tr";
pub const CELL_SELECTOR: &str = "td";
pub const TYPE_KEY: &str = "종별";

// Export
pub const COMBINED_FILENAME: &str = "facilities.json";

// Debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILENAME: &str = "debug.log";
