//! Shared data model for the iwyu-tidy workspace.
//!
//! # Design constraints
//! - `FileReport` is the unit of work; it is scoped to one file at a time.
//! - Directive maps keep encounter order so output is stable across runs.
//! - `TidySummary` is serialized to disk/stdout; prefer adding optional fields
//!   over changing semantics.

pub mod directive;
pub mod report;
pub mod summary;

pub use directive::{DirectiveMap, ReportLine, JUSTIFICATION_DELIMITER, REMOVAL_MARKER};
pub use report::{FileReport, Mode, Signal};
pub use summary::{DirectiveEntry, FileChanges, TidySummary, Verdict, VerdictStatus};

/// Schema identifiers.
pub mod schema {
    pub const IWYU_TIDY_SUMMARY_V1: &str = "iwyu_tidy.summary.v1";
}
