use iwyu_tidy_domain::ClassifyError;
use thiserror::Error;

/// Exit code for anything that stopped the run before a verdict.
pub const EXIT_RUNTIME: u8 = 2;

/// Errors that abort a run. Findings are never errors; they only change the
/// verdict.
#[derive(Debug, Error)]
pub enum TidyError {
    #[error("{0}")]
    Classify(#[from] ClassifyError),

    #[error("{0:#}")]
    Runtime(#[from] anyhow::Error),
}

impl TidyError {
    /// Both kinds map to 2 so they never read as "changes needed" (1).
    pub fn exit_code(&self) -> u8 {
        EXIT_RUNTIME
    }

    pub fn is_format_drift(&self) -> bool {
        matches!(self, TidyError::Classify(e) if e.is_format_drift())
    }
}
