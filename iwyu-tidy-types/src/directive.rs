use serde::{Deserialize, Serialize};

/// Separates a directive from the analyzer's free-text rationale.
pub const JUSTIFICATION_DELIMITER: &str = " // ";

/// Prefix the analyzer puts in front of lines it wants removed.
pub const REMOVAL_MARKER: &str = "- ";

/// One content line of a report, split into directive and justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// An include statement or a forward-declared symbol.
    pub directive: String,

    /// Free-text rationale; empty when the line carried none.
    #[serde(default)]
    pub why: String,
}

impl ReportLine {
    /// Split a (already stripped) raw line on the first delimiter.
    ///
    /// The directive half is trimmed; the justification is kept as written.
    pub fn parse(raw: &str) -> Self {
        let (directive, why) = match raw.split_once(JUSTIFICATION_DELIMITER) {
            Some((directive, why)) => (directive, why),
            None => (raw, ""),
        };
        Self {
            directive: directive.trim().to_string(),
            why: why.to_string(),
        }
    }

    /// Drop a redundant leading removal marker from the directive.
    pub fn without_removal_marker(mut self) -> Self {
        if let Some(rest) = self.directive.strip_prefix(REMOVAL_MARKER) {
            self.directive = rest.to_string();
        }
        self
    }
}

/// Directive → justification mapping that iterates in first-insertion order.
///
/// Re-inserting a known directive replaces its justification but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveMap {
    entries: Vec<(String, String)>,
}

impl DirectiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, directive: impl Into<String>, why: impl Into<String>) {
        let directive = directive.into();
        let why = why.into();
        match self.entries.iter_mut().find(|(d, _)| *d == directive) {
            Some(entry) => entry.1 = why,
            None => self.entries.push((directive, why)),
        }
    }

    /// Remove a directive, returning its justification if it was present.
    pub fn remove(&mut self, directive: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(d, _)| d == directive)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.entries.iter().any(|(d, _)| d == directive)
    }

    pub fn get(&self, directive: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| d == directive)
            .map(|(_, why)| why.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(directive, why)| (directive.as_str(), why.as_str()))
    }
}

impl<D: Into<String>, W: Into<String>> FromIterator<(D, W)> for DirectiveMap {
    fn from_iter<I: IntoIterator<Item = (D, W)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (directive, why) in iter {
            map.insert(directive, why);
        }
        map
    }
}
