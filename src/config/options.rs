// src/config/options.rs
use std::{io, path::PathBuf};

use super::boards::{BoardConfig, BOARDS};
use super::consts::{BASE_URL, COMBINED_FILENAME, LOG_FILENAME, STORE_DIR};

/// Everything a run needs beyond the board definitions themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub base_url: String,
    pub boards: &'static [BoardConfig],
    /// Directory receiving the per-board files and the combined file.
    pub out_dir: PathBuf,
}

impl RunOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: s!(BASE_URL),
            boards: BOARDS,
            out_dir: out_dir.into(),
        }
    }

    /// Default run: live endpoint, output next to the running executable.
    pub fn beside_executable() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(dir))
    }

    pub fn board_path(&self, board: &BoardConfig) -> PathBuf {
        self.out_dir.join(board.output)
    }

    pub fn combined_path(&self) -> PathBuf {
        self.out_dir.join(COMBINED_FILENAME)
    }

    /// Debug log for the run, kept beside the outputs.
    pub fn log_path(&self) -> PathBuf {
        self.out_dir.join(STORE_DIR).join(LOG_FILENAME)
    }
}
