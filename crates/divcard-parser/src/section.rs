//! Section body extraction.
//!
//! Once the TOC has named a section id, the matching section header is
//! located elsewhere in the file and the body delimited to the run of
//! lines before the next section header.

use std::sync::LazyLock;

use regex::Regex;

/// Header of any numbered section, e.g. `# [[4300]] Maps`.
static ANY_SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#\s*\[\[\s*\d+\s*\]\]").expect("static regex must compile")
});

/// Delimits the divination-card section body for the given section id.
///
/// The TOC entry and the real section header are textually identical,
/// so the whole file is scanned and the **last** matching line taken as
/// the header; the body is assumed to sit after the TOC. Because the
/// TOC entry itself always matches, a single occurrence means the body
/// section is absent and `None` is returned.
///
/// The returned slice starts after the header and ends before the next
/// `# [[<digits>]]` line (or at end of input). The header line itself
/// is excluded.
pub fn section_body<'a>(filter_lines: &'a [&'a str], section_id: &str) -> Option<&'a [&'a str]> {
    let pattern = format!(
        r"(?i)^#\s*\[\[\s*{}\s*\]\]\s*divination\s+cards",
        regex::escape(section_id)
    );
    // The id is escaped, so this pattern always compiles.
    let header = Regex::new(&pattern).expect("section header regex must compile");

    let matches: Vec<usize> = filter_lines
        .iter()
        .enumerate()
        .filter(|(_, line)| header.is_match(line.trim()))
        .map(|(idx, _)| idx)
        .collect();

    // Fewer than two matches: only the TOC entry exists, no body.
    if matches.len() < 2 {
        return None;
    }
    let header_idx = *matches.last()?;

    let body_start = header_idx + 1;
    let body_end = filter_lines[body_start..]
        .iter()
        .position(|line| ANY_SECTION_HEADER.is_match(line.trim()))
        .map_or(filter_lines.len(), |offset| body_start + offset);

    Some(&filter_lines[body_start..body_end])
}
