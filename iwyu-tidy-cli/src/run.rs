use std::io::{BufRead, Write};

use anyhow::Context;
use iwyu_tidy_domain::{ClassifierOptions, process_reader};
use iwyu_tidy_render::{Outcome, render_summary_json};
use iwyu_tidy_tables::Tables;
use serde::Deserialize;
use tracing::debug;

use crate::error::TidyError;
use crate::sinks::{JsonSink, TextSink};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => console::colors_enabled(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Everything one run needs, already merged from config and flags.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub tables: Tables,
    pub format: OutputFormat,
    pub colors: bool,
    pub strict: bool,
}

/// Classify `reader` to exhaustion, writing rendered output to `out`.
///
/// Text output is streamed per file; JSON output is written once at the end.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    settings: &RunSettings,
) -> Result<Outcome, TidyError> {
    let options = ClassifierOptions {
        strict: settings.strict,
    };

    let outcome = match settings.format {
        OutputFormat::Text => {
            let sink = TextSink::new(&mut out, settings.colors);
            let (sink, _) = process_reader(reader, &settings.tables, options, sink)?;
            sink.outcome()
        }
        OutputFormat::Json => {
            let (sink, _) = process_reader(reader, &settings.tables, options, JsonSink::new())?;
            let outcome = sink.outcome();
            let json = render_summary_json(&sink.into_summary())?;
            out.write_all(json.as_bytes()).context("write summary")?;
            out.flush().context("flush output")?;
            outcome
        }
    };

    debug!(
        files_seen = outcome.files_seen,
        files_changed = outcome.files_changed,
        "run complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INPUT: &str = "\
../a.h should add these lines:
#include <vector>  // for vector
class JSObject;

../a.h should remove these lines:
- #include <map>  // lines 3-3

The full include-list for ../a.h:
#include <string>  // for string
class JSObject;
---

(../b.h has correct #includes/fwd-decls)
---
";

    fn settings() -> RunSettings {
        RunSettings {
            tables: Tables::builtin().expect("builtin tables"),
            format: OutputFormat::Text,
            colors: false,
            strict: false,
        }
    }

    #[test]
    fn text_run_reports_changes_and_fails() {
        let mut out = Vec::new();
        let outcome = run(INPUT.as_bytes(), &mut out, &settings()).expect("run");
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.files_seen, 2);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "\n== a.h ==\n\
             +#include <vector>  // for vector\n\
             +#include <js/TypeDecls.h>\n\
             -#include <map>  // lines 3-3\n"
        );
    }

    #[test]
    fn json_run_writes_one_document() {
        let settings = RunSettings {
            format: OutputFormat::Json,
            ..settings()
        };
        let mut out = Vec::new();
        let outcome = run(INPUT.as_bytes(), &mut out, &settings).expect("run");
        assert_eq!(outcome.exit_code(), 1);

        let summary: iwyu_tidy_types::TidySummary =
            serde_json::from_slice(&out).expect("valid summary");
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.files[0].add.len(), 2);
        assert_eq!(summary.files[0].remove.len(), 1);
    }

    #[test]
    fn clean_run_passes_silently() {
        let mut out = Vec::new();
        let outcome = run(
            "(../b.h has correct #includes/fwd-decls)\n---\n".as_bytes(),
            &mut out,
            &settings(),
        )
        .expect("run");
        assert_eq!(outcome.exit_code(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_runtime_error() {
        let input: &[u8] = b"../a.h should add these lines:\n#include <\xff>\n---\n";
        let mut out = Vec::new();
        let err = run(input, &mut out, &settings()).expect_err("invalid utf-8");
        assert_eq!(err.exit_code(), 2);
        assert!(!err.is_format_drift());
        assert!(err.to_string().starts_with("read report:"), "{err}");
        assert!(out.is_empty());
    }
}
