// src/config/mod.rs
pub mod boards;
pub mod consts;
pub mod options;
