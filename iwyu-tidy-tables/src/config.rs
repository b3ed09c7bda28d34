//! Deserializable overrides for the built-in tables.
//!
//! This is the `[report]`, `[umbrella]` and `[[false_positives]]` part of
//! `iwyu-tidy.toml`; the binary owns discovery and loading.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    pub report: ReportConfig,
    pub umbrella: UmbrellaConfig,
    pub false_positives: Vec<FalsePositiveConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path prefix in front of file names in header lines (default `../`).
    pub path_prefix: Option<String>,

    /// Lines starting with this are dropped as tool noise (default `error:`).
    pub error_prefix: Option<String>,

    /// Reject content lines that arrive outside any section.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UmbrellaConfig {
    /// Replaces the built-in umbrella directive.
    pub header: Option<String>,

    /// Extends the built-in forward declaration set.
    pub forward_decls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FalsePositiveConfig {
    pub file: String,
    pub directive: String,
    #[serde(default)]
    pub why: String,
}
