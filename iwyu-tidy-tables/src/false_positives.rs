/// A suggestion the analyzer is known to get wrong for a specific file.
///
/// Matching is exact on all three fields, including an empty justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FalsePositive {
    pub file: String,
    pub directive: String,
    pub why: String,
}

/// Compiled-in (file, directive, justification) triples.
pub static BUILTIN_FALSE_POSITIVES: &[(&str, &str, &str)] = &[
    // Struct bodies already precede their use.
    ("gjs/atoms.h", "class GjsAtoms;", ""),
    ("gjs/atoms.h", "struct GjsSymbolAtom;", ""),
    // Reported for std::vector::emplace_back() / push_back().
    ("gi/function.cpp", "#include <algorithm>", "for max"),
    ("gi/private.cpp", "#include <algorithm>", "for max"),
    ("gjs/importer.cpp", "#include <algorithm>", "for max"),
    ("modules/cairo-context.cpp", "#include <algorithm>", "for max"),
    // Only some analyzer versions.
    ("gi/arg.cpp", "struct _GHashTable;", ""),
    ("gi/arg.cpp", "struct _GVariant;", ""),
];

#[derive(Debug, Clone, Default)]
pub struct FalsePositiveTable {
    entries: Vec<FalsePositive>,
}

impl FalsePositiveTable {
    pub fn builtin() -> Self {
        let entries = BUILTIN_FALSE_POSITIVES
            .iter()
            .map(|(file, directive, why)| FalsePositive {
                file: file.to_string(),
                directive: directive.to_string(),
                why: why.to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, entry: FalsePositive) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    pub fn contains(&self, file: &str, directive: &str, why: &str) -> bool {
        self.entries
            .iter()
            .any(|fp| fp.file == file && fp.directive == directive && fp.why == why)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
