//! Library half of the `iwyu-tidy` binary.
//!
//! Kept separate from `main.rs` so the pipeline can be driven from tests
//! without spawning a process.

pub mod config;
mod error;
mod run;
mod sinks;

pub use error::TidyError;
pub use run::{ColorChoice, OutputFormat, RunSettings, run};
pub use sinks::{JsonSink, TextSink};
