use iwyu_tidy_tables::UmbrellaHeader;
use iwyu_tidy_types::FileReport;

/// What [`consolidate`] did to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consolidation {
    /// No umbrella-provided forward declaration was suggested.
    NotNeeded,
    /// The file already includes the umbrella header.
    AlreadyIncluded,
    /// A suggested removal of the umbrella header was dropped.
    CanceledRemoval,
    /// The umbrella header was added to the additions.
    Injected,
    /// The additions already named the umbrella header.
    AlreadyPresent,
}

/// Collapse individually suggested forward declarations into the umbrella
/// header, or cancel a removal of it.
///
/// Afterwards the umbrella directive is in at most one of `to_add` and
/// `to_remove`.
pub fn consolidate(report: &mut FileReport, umbrella: &UmbrellaHeader) -> Consolidation {
    if !report.needs_umbrella_header {
        return Consolidation::NotNeeded;
    }
    let header = umbrella.header.as_str();

    if report.full_include_list.contains(header) {
        return match report.to_remove.remove(header) {
            Some(_) => Consolidation::CanceledRemoval,
            None => Consolidation::AlreadyIncluded,
        };
    }

    if report.to_remove.remove(header).is_some() {
        return Consolidation::CanceledRemoval;
    }
    if report.to_add.contains(header) {
        return Consolidation::AlreadyPresent;
    }
    report.to_add.insert(header, "");
    Consolidation::Injected
}
