// src/specs/mod.rs
//! # Page specs
//!
//! Pure HTML parsing for the bulletin-board listing pages. A spec knows where
//! the data lives in the markup and how to turn table rows into records. It
//! does not fetch, write files or print.
//!
//! ## Conventions
//! - Selectors live in `config::consts`; specs only apply them.
//! - Row shape is driven by the board's field schema, never by header text.
//! - Specs are testable offline against inline HTML fixtures.
//!
//! ## Current specs
//! - `facilities` – the `table.p-table.simple` listing shared by every board.
pub mod facilities;
