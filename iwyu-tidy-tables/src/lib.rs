//! Static data that drives iwyu-tidy.
//!
//! Everything here is built once at startup and read-only afterwards:
//! - [`PatternTable`]: ordered recognizers for structural report lines
//! - [`FalsePositiveTable`]: (file, directive, justification) triples to drop
//! - [`UmbrellaHeader`]: the include that stands in for a set of forward declarations
//!
//! [`Tables::builtin`] returns the compiled-in data. [`Tables::with_overrides`]
//! extends it from a deserialized [`TablesConfig`].

mod config;
mod false_positives;
mod patterns;
mod umbrella;

pub use config::{FalsePositiveConfig, ReportConfig, TablesConfig, UmbrellaConfig};
pub use false_positives::{BUILTIN_FALSE_POSITIVES, FalsePositive, FalsePositiveTable};
pub use patterns::{
    BOUNDARY_MARKER, DEFAULT_ERROR_PREFIX, DEFAULT_PATH_PREFIX, LineMatch, PatternTable,
};
pub use umbrella::{BUILTIN_FORWARD_DECLS, BUILTIN_UMBRELLA_HEADER, UmbrellaHeader};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("invalid line pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("`{setting}` must not be blank")]
    BlankSetting { setting: &'static str },
}

/// All read-only tables a classifier run needs.
#[derive(Debug, Clone)]
pub struct Tables {
    pub patterns: PatternTable,
    pub false_positives: FalsePositiveTable,
    pub umbrella: UmbrellaHeader,
}

impl Tables {
    /// The compiled-in tables.
    pub fn builtin() -> Result<Self, TablesError> {
        Ok(Self {
            patterns: PatternTable::builtin()?,
            false_positives: FalsePositiveTable::builtin(),
            umbrella: UmbrellaHeader::builtin(),
        })
    }

    /// Built-ins extended (or, for scalar settings, replaced) by `config`.
    pub fn with_overrides(config: &TablesConfig) -> Result<Self, TablesError> {
        let report = &config.report;
        let patterns = PatternTable::new(
            report.path_prefix.as_deref().unwrap_or(DEFAULT_PATH_PREFIX),
            report.error_prefix.as_deref().unwrap_or(DEFAULT_ERROR_PREFIX),
        )?;

        let mut false_positives = FalsePositiveTable::builtin();
        for fp in &config.false_positives {
            false_positives.push(FalsePositive {
                file: fp.file.clone(),
                directive: fp.directive.clone(),
                why: fp.why.clone(),
            });
        }

        let mut umbrella = UmbrellaHeader::builtin();
        if let Some(header) = &config.umbrella.header {
            umbrella.header = header.clone();
        }
        umbrella.extend(config.umbrella.forward_decls.iter().cloned());

        debug!(
            false_positives = false_positives.len(),
            forward_decls = umbrella.forward_decls().len(),
            umbrella = %umbrella.header,
            "tables built with overrides"
        );

        Ok(Self {
            patterns,
            false_positives,
            umbrella,
        })
    }
}
