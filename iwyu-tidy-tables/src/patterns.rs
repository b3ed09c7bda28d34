use iwyu_tidy_types::Signal;
use regex::Regex;

use crate::TablesError;

/// The analyzer runs one directory below the source root.
pub const DEFAULT_PATH_PREFIX: &str = "../";

/// Compiler-argument complaints from the analyzer start with this.
pub const DEFAULT_ERROR_PREFIX: &str = "error:";

/// Closes the sections of the current file.
pub const BOUNDARY_MARKER: &str = "---";

/// A structural line and the file it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub signal: Signal,
    pub file: &'a str,
}

#[derive(Debug, Clone)]
struct Recognizer {
    regex: Regex,
    signal: Signal,
}

/// Ordered recognizers; the first one that matches wins.
#[derive(Debug, Clone)]
pub struct PatternTable {
    recognizers: Vec<Recognizer>,
    error_prefix: String,
}

impl PatternTable {
    /// Fails on a blank `error_prefix`: it would classify every line as noise.
    pub fn new(path_prefix: &str, error_prefix: &str) -> Result<Self, TablesError> {
        if error_prefix.trim().is_empty() {
            return Err(TablesError::BlankSetting {
                setting: "report.error_prefix",
            });
        }
        let p = regex::escape(path_prefix);
        let shapes = [
            (format!(r"^{p}(.*) should add these lines:"), Signal::Add),
            (format!(r"^{p}(.*) should remove these lines:"), Signal::Remove),
            (format!(r"^The full include-list for {p}(.*):"), Signal::FullList),
            (
                format!(r"^\({p}(.*) has correct #includes/fwd-decls\)"),
                Signal::Correct,
            ),
        ];

        let mut recognizers = Vec::with_capacity(shapes.len());
        for (pattern, signal) in shapes {
            let regex = Regex::new(&pattern)
                .map_err(|source| TablesError::InvalidPattern { pattern, source })?;
            recognizers.push(Recognizer { regex, signal });
        }

        Ok(Self {
            recognizers,
            error_prefix: error_prefix.to_string(),
        })
    }

    pub fn builtin() -> Result<Self, TablesError> {
        Self::new(DEFAULT_PATH_PREFIX, DEFAULT_ERROR_PREFIX)
    }

    pub fn match_line<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        self.recognizers.iter().find_map(|r| {
            let caps = r.regex.captures(line)?;
            let file = caps.get(1)?.as_str();
            Some(LineMatch {
                signal: r.signal,
                file,
            })
        })
    }

    pub fn is_noise(&self, line: &str) -> bool {
        line.is_empty() || line.starts_with(&self.error_prefix)
    }

    pub fn is_boundary(&self, line: &str) -> bool {
        line == BOUNDARY_MARKER
    }

    pub fn error_prefix(&self) -> &str {
        &self.error_prefix
    }
}
