//! Top-level parse entry points.
//!
//! Composes the pipeline: TOC navigation, section extraction, tier
//! segmentation, and the rarity-map fold. Parsing is pure and
//! synchronous; the same content always produces the same result, and
//! concurrent calls on different inputs need no synchronization.

use divcard_types::ParseResult;

use crate::types::ParseStats;
use crate::{lines, rarity_map, section, tier, toc};

/// Extracts divination-card rarities from raw loot-filter content.
///
/// Total over all textual input: a missing TOC marker, a missing TOC
/// entry, or a header that never repeats in the body all yield the
/// not-found result rather than an error.
///
/// # Examples
///
/// ```
/// let content = "# TABLE OF CONTENTS\n# [[4200]] Divination Cards\n# [[4200]] Divination Cards\nShow # $type->divination $tier->t1\n    BaseType == \"The Doctor\"\n";
/// let result = divcard_parser::parse_filter(content);
/// assert!(result.has_divination_section);
/// assert_eq!(result.total_cards(), 1);
/// ```
pub fn parse_filter(content: &str) -> ParseResult {
    parse_filter_with_stats(content).0
}

/// Like [`parse_filter`], also returning diagnostic counters.
///
/// The stats describe the tier blocks seen before conflict resolution;
/// for a not-found result they are all zero.
pub fn parse_filter_with_stats(content: &str) -> (ParseResult, ParseStats) {
    let filter_lines = lines::split_lines(content);

    let Some(section_id) = toc::find_divination_section_id(&filter_lines) else {
        return (ParseResult::not_found(), ParseStats::default());
    };
    let Some(body) = section::section_body(&filter_lines, &section_id) else {
        return (ParseResult::not_found(), ParseStats::default());
    };

    let blocks = tier::tier_blocks(body);
    let stats = ParseStats::from_blocks(&blocks);
    let result = ParseResult::found(rarity_map::build_rarity_map(&blocks));
    (result, stats)
}
