use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Strict mode only: a content line arrived outside any section.
    #[error("line {line_no}: unrecognized report line outside any section: {line}")]
    UnrecognizedLine { line_no: u64, line: String },

    #[error("read report: {0}")]
    Io(#[from] std::io::Error),

    #[error("deliver report: {0:#}")]
    Sink(#[from] anyhow::Error),
}

impl ClassifyError {
    /// True when the input itself was at fault rather than the environment.
    pub fn is_format_drift(&self) -> bool {
        matches!(self, ClassifyError::UnrecognizedLine { .. })
    }
}
