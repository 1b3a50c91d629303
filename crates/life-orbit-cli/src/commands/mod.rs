//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;
pub mod simulate;
