//! Core pipeline machinery: state, checks, orchestration, reporting.
//!
//! The concrete checks live in [`crate::checks`].

pub mod check;
pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod finding;
pub mod hook;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod report;
pub mod scan;
pub mod state;
#[cfg(test)]
pub(crate) mod testing;
