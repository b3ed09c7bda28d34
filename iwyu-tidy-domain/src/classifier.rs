use std::io::BufRead;

use iwyu_tidy_tables::Tables;
use iwyu_tidy_types::{FileReport, Mode, ReportLine, Signal};
use tracing::{debug, trace};

use crate::consolidate::consolidate;
use crate::error::ClassifyError;
use crate::filter::{Screen, screen_addition};
use crate::ports::ReportSink;

/// Mode that follows `signal`; the current mode does not matter today.
pub fn transition(_current: Mode, signal: Signal) -> Mode {
    match signal {
        Signal::Add => Mode::Adding,
        Signal::Remove => Mode::Removing,
        Signal::FullList => Mode::Listing,
        Signal::Correct | Signal::Boundary => Mode::None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifierOptions {
    /// Fail on content lines that arrive outside any section instead of
    /// dropping them.
    pub strict: bool,
}

/// Per-run counters, logged when the stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub lines_read: u64,
    pub noise: u64,
    pub unrecognized: u64,
    pub false_positives: u64,
    pub files: u64,
}

/// Stateful line classifier. Holds at most one open [`FileReport`].
pub struct Classifier<'t, S> {
    tables: &'t Tables,
    options: ClassifierOptions,
    sink: S,
    open: Option<FileReport>,
    mode: Mode,
    stats: ClassifyStats,
}

impl<'t, S: ReportSink> Classifier<'t, S> {
    pub fn new(tables: &'t Tables, options: ClassifierOptions, sink: S) -> Self {
        Self {
            tables,
            options,
            sink,
            open: None,
            mode: Mode::None,
            stats: ClassifyStats::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Name of the file currently being accumulated.
    pub fn open_file(&self) -> Option<&str> {
        self.open.as_ref().map(|r| r.file.as_str())
    }

    pub fn stats(&self) -> ClassifyStats {
        self.stats
    }

    pub fn feed(&mut self, raw: &str) -> Result<(), ClassifyError> {
        self.stats.lines_read += 1;
        let line_no = self.stats.lines_read;
        let line = raw.trim();
        let tables = self.tables;
        let patterns = &tables.patterns;

        if patterns.is_noise(line) {
            self.stats.noise += 1;
            return Ok(());
        }

        if patterns.is_boundary(line) {
            self.finalize()?;
            self.mode = transition(self.mode, Signal::Boundary);
            return Ok(());
        }

        if let Some(m) = patterns.match_line(line) {
            if self.open_file() != Some(m.file) {
                self.finalize()?;
                debug!(file = m.file, "opening report");
                self.open = Some(FileReport::new(m.file));
            }
            self.mode = transition(self.mode, m.signal);
            trace!(line_no, file = m.file, signal = m.signal.label(), "section header");
            return Ok(());
        }

        self.absorb(line_no, line)
    }

    /// End of stream: finalize whatever is open and hand back the sink.
    pub fn finish(mut self) -> Result<(S, ClassifyStats), ClassifyError> {
        self.finalize()?;
        debug!(
            lines_read = self.stats.lines_read,
            noise = self.stats.noise,
            unrecognized = self.stats.unrecognized,
            false_positives = self.stats.false_positives,
            files = self.stats.files,
            "report stream exhausted"
        );
        Ok((self.sink, self.stats))
    }

    fn absorb(&mut self, line_no: u64, line: &str) -> Result<(), ClassifyError> {
        let mode = self.mode;
        let tables = self.tables;
        if mode == Mode::None || self.open.is_none() {
            return self.unrecognized(line_no, line);
        }
        let Some(report) = self.open.as_mut() else {
            return Ok(());
        };

        match mode {
            Mode::Adding => {
                let entry = ReportLine::parse(line);
                match screen_addition(tables, &report.file, &entry) {
                    Screen::Keep => report.to_add.insert(entry.directive, entry.why),
                    Screen::ForwardDecl => {
                        trace!(line_no, directive = %entry.directive, "covered by umbrella header");
                        report.needs_umbrella_header = true;
                    }
                    Screen::FalsePositive => {
                        debug!(file = %report.file, directive = %entry.directive, "suppressed false positive");
                        self.stats.false_positives += 1;
                    }
                }
            }
            Mode::Removing => {
                let entry = ReportLine::parse(line).without_removal_marker();
                report.to_remove.insert(entry.directive, entry.why);
            }
            Mode::Listing => {
                let entry = ReportLine::parse(line);
                report.full_include_list.insert(entry.directive, entry.why);
            }
            Mode::None => {}
        }
        Ok(())
    }

    fn unrecognized(&mut self, line_no: u64, line: &str) -> Result<(), ClassifyError> {
        if self.options.strict {
            return Err(ClassifyError::UnrecognizedLine {
                line_no,
                line: line.to_string(),
            });
        }
        trace!(line_no, line, "dropping line outside any section");
        self.stats.unrecognized += 1;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), ClassifyError> {
        self.mode = Mode::None;
        let Some(mut report) = self.open.take() else {
            return Ok(());
        };
        let outcome = consolidate(&mut report, &self.tables.umbrella);
        debug!(
            file = %report.file,
            add = report.to_add.len(),
            remove = report.to_remove.len(),
            umbrella = ?outcome,
            "finalizing report"
        );
        self.stats.files += 1;
        self.sink.accept(report)?;
        Ok(())
    }
}

/// Classify every line of `reader` to exhaustion.
pub fn process_reader<R: BufRead, S: ReportSink>(
    reader: R,
    tables: &Tables,
    options: ClassifierOptions,
    sink: S,
) -> Result<(S, ClassifyStats), ClassifyError> {
    let mut classifier = Classifier::new(tables, options, sink);
    for line in reader.lines() {
        classifier.feed(&line?)?;
    }
    classifier.finish()
}

/// Classify an in-memory sequence of lines.
pub fn process_lines<'a, I, S>(
    lines: I,
    tables: &Tables,
    options: ClassifierOptions,
    sink: S,
) -> Result<(S, ClassifyStats), ClassifyError>
where
    I: IntoIterator<Item = &'a str>,
    S: ReportSink,
{
    let mut classifier = Classifier::new(tables, options, sink);
    for line in lines {
        classifier.feed(line)?;
    }
    classifier.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> Vec<FileReport> {
        let tables = Tables::builtin().expect("builtin tables");
        let (reports, _) =
            process_lines(input.lines(), &tables, ClassifierOptions::default(), Vec::new())
                .expect("classify");
        reports
    }

    #[test]
    fn transition_is_driven_by_signal() {
        for current in [Mode::Adding, Mode::Removing, Mode::Listing, Mode::None] {
            assert_eq!(transition(current, Signal::Add), Mode::Adding);
            assert_eq!(transition(current, Signal::Remove), Mode::Removing);
            assert_eq!(transition(current, Signal::FullList), Mode::Listing);
            assert_eq!(transition(current, Signal::Correct), Mode::None);
            assert_eq!(transition(current, Signal::Boundary), Mode::None);
        }
    }

    #[test]
    fn routes_content_by_mode() {
        let reports = run("\
../a.h should add these lines:
#include <vector>  // for vector

../a.h should remove these lines:
- #include <map>  // lines 3-3

The full include-list for ../a.h:
#include <string>  // for string
---
");
        assert_eq!(reports.len(), 1);
        let r = &reports[0];
        assert_eq!(r.file, "a.h");
        assert_eq!(r.to_add.get("#include <vector>"), Some("for vector"));
        assert_eq!(r.to_remove.get("#include <map>"), Some("lines 3-3"));
        assert_eq!(r.full_include_list.get("#include <string>"), Some("for string"));
        assert!(!r.needs_umbrella_header);
    }

    #[test]
    fn header_lines_are_not_content() {
        let reports = run("\
../a.h should add these lines:
../a.h should remove these lines:
---
");
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].has_changes());
    }

    #[test]
    fn new_file_name_finalizes_previous() {
        let reports = run("\
../a.h should add these lines:
#include <vector>
../b.h should add these lines:
#include <list>
");
        let files: Vec<_> = reports.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["a.h", "b.h"]);
        assert!(reports[1].to_add.contains("#include <list>"));
        assert!(!reports[1].to_add.contains("#include <vector>"));
    }

    #[test]
    fn same_file_after_boundary_opens_fresh_report() {
        let reports = run("\
../a.h should add these lines:
#include <vector>
---
../a.h should add these lines:
#include <list>
---
");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].to_add.len(), 1);
        assert_eq!(reports[1].to_add.len(), 1);
        assert!(reports[1].to_add.contains("#include <list>"));
    }

    #[test]
    fn noise_and_stray_content_are_dropped() {
        let tables = Tables::builtin().expect("builtin tables");
        let input = "\
error: unknown argument: '-fno-semantic-interposition'
#include <vector>

(../a.h has correct #includes/fwd-decls)
class JSObject;
---
";
        let (reports, stats) =
            process_lines(input.lines(), &tables, ClassifierOptions::default(), Vec::new())
                .expect("classify");
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].has_changes());
        assert!(!reports[0].needs_umbrella_header);
        assert_eq!(stats.noise, 2);
        assert_eq!(stats.unrecognized, 2);
        assert_eq!(stats.files, 1);
    }

    #[test]
    fn strict_mode_rejects_stray_content() {
        let tables = Tables::builtin().expect("builtin tables");
        let input = "(../a.h has correct #includes/fwd-decls)\nsomething odd\n";
        let err = process_lines(
            input.lines(),
            &tables,
            ClassifierOptions { strict: true },
            Vec::new(),
        )
        .expect_err("strict");
        assert!(err.is_format_drift());
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn forward_decls_flag_instead_of_adding() {
        let reports = run("\
../a.h should add these lines:
class JSObject;
struct JSContext;
---
");
        let r = &reports[0];
        assert!(r.needs_umbrella_header);
        assert!(!r.to_add.contains("class JSObject;"));
        assert!(!r.to_add.contains("struct JSContext;"));
        let adds: Vec<_> = r.to_add.iter().map(|(d, _)| d).collect();
        assert_eq!(adds, vec!["#include <js/TypeDecls.h>"]);
    }

    #[test]
    fn false_positive_is_dropped_only_for_additions() {
        let reports = run("\
../gi/arg.cpp should add these lines:
struct _GVariant;
#include <utility>  // for move
../gi/arg.cpp should remove these lines:
- struct _GVariant;
---
");
        let r = &reports[0];
        assert!(!r.to_add.contains("struct _GVariant;"));
        assert!(r.to_add.contains("#include <utility>"));
        assert!(r.to_remove.contains("struct _GVariant;"));
    }

    #[test]
    fn end_of_stream_finalizes_exactly_once() {
        let tables = Tables::builtin().expect("builtin tables");
        let mut classifier = Classifier::new(&tables, ClassifierOptions::default(), Vec::new());
        classifier.feed("../a.h should add these lines:").expect("feed");
        classifier.feed("#include <vector>").expect("feed");
        assert_eq!(classifier.open_file(), Some("a.h"));
        assert_eq!(classifier.mode(), Mode::Adding);
        let (reports, stats) = classifier.finish().expect("finish");
        assert_eq!(reports.len(), 1);
        assert_eq!(stats.files, 1);
    }

    #[test]
    fn boundary_resets_mode() {
        let tables = Tables::builtin().expect("builtin tables");
        let mut classifier = Classifier::new(&tables, ClassifierOptions::default(), Vec::new());
        classifier.feed("../a.h should add these lines:").expect("feed");
        classifier.feed("---").expect("feed");
        assert_eq!(classifier.mode(), Mode::None);
        assert_eq!(classifier.open_file(), None);
        classifier.feed("#include <vector>").expect("feed");
        let (reports, stats) = classifier.finish().expect("finish");
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].has_changes());
        assert_eq!(stats.unrecognized, 1);
    }

    #[test]
    fn process_reader_matches_process_lines() {
        let tables = Tables::builtin().expect("builtin tables");
        let input = "../a.h should add these lines:\r\n#include <vector>  // for vector\r\n---\r\n";
        let (from_reader, _) = process_reader(
            input.as_bytes(),
            &tables,
            ClassifierOptions::default(),
            Vec::new(),
        )
        .expect("classify");
        assert_eq!(from_reader, run(input));
        assert_eq!(from_reader[0].to_add.get("#include <vector>"), Some("for vector"));
    }

    #[test]
    fn reader_with_invalid_utf8_fails_with_io_error() {
        let tables = Tables::builtin().expect("builtin tables");
        let input: &[u8] = b"../a.h should add these lines:\n\xff\n";
        let err = process_reader(input, &tables, ClassifierOptions::default(), Vec::new())
            .expect_err("invalid utf-8");
        match err {
            ClassifyError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("expected io error, got {other}"),
        }
    }
}
