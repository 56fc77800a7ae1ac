//! Table-of-contents navigation.
//!
//! Community filters open with a numbered table of contents. The
//! divination-card section does not sit at a fixed number, so the TOC
//! entry is the only reliable way to learn which section id to look
//! for.

use std::sync::LazyLock;

use regex::Regex;

use crate::lines;

/// Case-insensitive marker opening the table of contents.
const TOC_MARKER: &str = "table of contents";

/// TOC entry for the divination-card section, e.g. `# [[4200]] Divination Cards`.
static DIVINATION_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#\s*\[\[\s*(\d+)\s*\]\]\s*divination\s+cards")
        .expect("static regex must compile")
});

/// Finds the divination-card section id in the filter's table of
/// contents.
///
/// Lines before the TOC marker are skipped. Inside the TOC, the first
/// entry matching `# [[<digits>]] Divination Cards` returns its digits.
/// Hitting a `Show`/`Hide` block start means the TOC ended without the
/// entry; that and end of input both yield `None`. Absence is a normal
/// outcome, not an error.
pub fn find_divination_section_id(filter_lines: &[&str]) -> Option<String> {
    let mut inside_toc = false;

    for line in filter_lines {
        let trimmed = line.trim();

        if !inside_toc {
            if trimmed.to_ascii_lowercase().contains(TOC_MARKER) {
                inside_toc = true;
            }
            continue;
        }

        if let Some(caps) = DIVINATION_ENTRY.captures(trimmed) {
            return Some(caps[1].to_string());
        }

        if lines::is_block_start(trimmed) {
            // Left the TOC area without finding the entry.
            return None;
        }
    }

    None
}
