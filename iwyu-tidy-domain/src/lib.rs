//! Domain logic: turn an analyzer report stream into finalized per-file reports.
//!
//! This crate owns *what* each file needs. It does not own how results are
//! shown; finalized reports leave through the [`ReportSink`] port and the
//! `iwyu-tidy-render` crate formats them.

mod classifier;
mod consolidate;
mod error;
mod filter;
mod ports;

pub use classifier::{
    Classifier, ClassifierOptions, ClassifyStats, process_lines, process_reader, transition,
};
pub use consolidate::{Consolidation, consolidate};
pub use error::ClassifyError;
pub use filter::{Screen, screen_addition};
pub use ports::ReportSink;
