use serde::{Deserialize, Serialize};

use crate::report::FileReport;
use crate::schema;

/// Machine-readable result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidySummary {
    /// Schema identifier, "iwyu_tidy.summary.v1".
    pub schema: String,

    #[serde(default)]
    pub files: Vec<FileChanges>,

    pub verdict: Verdict,
}

impl TidySummary {
    pub fn new(files: Vec<FileChanges>) -> Self {
        let files_changed = files.len() as u64;
        let status = if files_changed == 0 {
            VerdictStatus::Pass
        } else {
            VerdictStatus::Fail
        };
        Self {
            schema: schema::IWYU_TIDY_SUMMARY_V1.to_string(),
            files,
            verdict: Verdict {
                status,
                files_changed,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChanges {
    pub file: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<DirectiveEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<DirectiveEntry>,
}

impl From<&FileReport> for FileChanges {
    fn from(report: &FileReport) -> Self {
        let entries = |map: &crate::DirectiveMap| -> Vec<DirectiveEntry> {
            map.iter()
                .map(|(directive, why)| DirectiveEntry {
                    directive: directive.to_string(),
                    why: why.to_string(),
                })
                .collect()
        };
        Self {
            file: report.file.clone(),
            add: entries(&report.to_add),
            remove: entries(&report.to_remove),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveEntry {
    pub directive: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub why: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub files_changed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Pass,
    Fail,
}
