use iwyu_tidy_tables::Tables;
use iwyu_tidy_types::ReportLine;

/// Verdict on a line about to enter a report's additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Keep,
    /// Provided by the umbrella header; flag the report instead of adding it.
    ForwardDecl,
    /// Listed in the false-positive table for this file.
    FalsePositive,
}

/// Only additions are screened; removals and the full list go in unchanged.
pub fn screen_addition(tables: &Tables, file: &str, line: &ReportLine) -> Screen {
    if tables.umbrella.covers(&line.directive) {
        return Screen::ForwardDecl;
    }
    if tables
        .false_positives
        .contains(file, &line.directive, &line.why)
    {
        return Screen::FalsePositive;
    }
    Screen::Keep
}
