//! [`ReportSink`] adapters that render finalized reports.

use std::io::Write;

use anyhow::Context;
use iwyu_tidy_domain::ReportSink;
use iwyu_tidy_render::{Outcome, render_file_text};
use iwyu_tidy_types::{FileChanges, FileReport, TidySummary};

/// Streams each changed file's block to `out` as soon as it is finalized.
pub struct TextSink<W> {
    out: W,
    colors: bool,
    outcome: Outcome,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self {
            out,
            colors,
            outcome: Outcome::default(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn accept(&mut self, report: FileReport) -> anyhow::Result<()> {
        if !self.outcome.record(&report) {
            return Ok(());
        }
        let block = render_file_text(&report, self.colors);
        self.out
            .write_all(block.as_bytes())
            .with_context(|| format!("write changes for {}", report.file))?;
        self.out.flush().context("flush output")?;
        Ok(())
    }
}

/// Collects changed files for a single summary document at end of stream.
#[derive(Debug, Default)]
pub struct JsonSink {
    files: Vec<FileChanges>,
    outcome: Outcome,
}

impl JsonSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn into_summary(self) -> TidySummary {
        TidySummary::new(self.files)
    }
}

impl ReportSink for JsonSink {
    fn accept(&mut self, report: FileReport) -> anyhow::Result<()> {
        if self.outcome.record(&report) {
            self.files.push(FileChanges::from(&report));
        }
        Ok(())
    }
}
