//! Rendering helpers for finalized reports, and the run-level verdict.

use anyhow::Context;
use console::Style;
use iwyu_tidy_types::{DirectiveMap, FileReport, TidySummary, VerdictStatus};

/// Prefix for a rendered justification.
const WHY_PREFIX: &str = "  // ";

/// Render one file's changes as a diff-like block.
///
/// Returns an empty string when the report has nothing to add or remove.
/// Additions come before removals, each in encounter order.
pub fn render_file_text(report: &FileReport, colors: bool) -> String {
    if !report.has_changes() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("\n== {} ==\n", report.file));
    push_entries(&mut out, &report.to_add, '+', Style::new().green(), colors);
    push_entries(&mut out, &report.to_remove, '-', Style::new().red(), colors);
    out
}

fn push_entries(out: &mut String, map: &DirectiveMap, mark: char, style: Style, colors: bool) {
    for (directive, why) in map.iter() {
        let body = format!("{mark}{directive}");
        if colors {
            out.push_str(&style.clone().force_styling(true).apply_to(body).to_string());
        } else {
            out.push_str(&body);
        }
        if !why.is_empty() {
            out.push_str(WHY_PREFIX);
            out.push_str(why);
        }
        out.push('\n');
    }
}

pub fn render_summary_json(summary: &TidySummary) -> anyhow::Result<String> {
    let mut s = serde_json::to_string_pretty(summary).context("serialize summary")?;
    s.push('\n');
    Ok(s)
}

/// Tally of finalized reports; decides the process result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub files_seen: u64,
    pub files_changed: u64,
}

impl Outcome {
    /// Count a finalized report. Returns true if it needs changes.
    pub fn record(&mut self, report: &FileReport) -> bool {
        self.files_seen += 1;
        let changed = report.has_changes();
        if changed {
            self.files_changed += 1;
        }
        changed
    }

    pub fn status(&self) -> VerdictStatus {
        if self.files_changed == 0 {
            VerdictStatus::Pass
        } else {
            VerdictStatus::Fail
        }
    }

    /// 0 when no file needs changes, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.status() {
            VerdictStatus::Pass => 0,
            VerdictStatus::Fail => 1,
        }
    }
}
