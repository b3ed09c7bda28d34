use crate::directive::DirectiveMap;

/// How the classifier interprets content lines that follow a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Lines are additions the analyzer recommends.
    Adding,
    /// Lines are removals the analyzer recommends.
    Removing,
    /// Lines are the analyzer's full resolved include list.
    Listing,
    /// Content is ignored.
    #[default]
    None,
}

/// What a recognized structural line announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// "<file> should add these lines:"
    Add,
    /// "<file> should remove these lines:"
    Remove,
    /// "The full include-list for <file>:"
    FullList,
    /// "(<file> has correct #includes/fwd-decls)"
    Correct,
    /// The `---` line closing a file's sections.
    Boundary,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::Add => "add",
            Signal::Remove => "remove",
            Signal::FullList => "full-list",
            Signal::Correct => "correct",
            Signal::Boundary => "boundary",
        }
    }
}

/// Accumulated recommendations for a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub to_add: DirectiveMap,
    pub to_remove: DirectiveMap,
    /// Lookup only; never rendered.
    pub full_include_list: DirectiveMap,
    pub needs_umbrella_header: bool,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// True when there is anything to add or remove.
    pub fn has_changes(&self) -> bool {
        !self.to_add.is_empty() || !self.to_remove.is_empty()
    }
}
