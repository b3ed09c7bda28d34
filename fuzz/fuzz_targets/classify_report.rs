#![no_main]

//! Fuzz target for the report classifier.
//!
//! Feeds arbitrary text through the tolerant classifier and renderer; neither
//! may panic, and the umbrella directive must never end up on both sides.

use iwyu_tidy_domain::{ClassifierOptions, process_lines};
use iwyu_tidy_render::render_file_text;
use iwyu_tidy_tables::Tables;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(tables) = Tables::builtin() else {
        return;
    };
    let Ok((reports, _)) =
        process_lines(s.lines(), &tables, ClassifierOptions::default(), Vec::new())
    else {
        return;
    };

    let header = tables.umbrella.header.as_str();
    for report in &reports {
        if report.needs_umbrella_header {
            assert!(!(report.to_add.contains(header) && report.to_remove.contains(header)));
        }
        let _ = render_file_text(report, true);
    }
});
