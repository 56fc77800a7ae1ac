//! Tier-block state machine.
//!
//! Walks the divination-card section body and segments it into
//! [`TierBlock`]s: one per `Show # $type->divination $tier->...`
//! header, carrying the card names from its `BaseType` line and any
//! quoted continuation lines below it.

use std::sync::LazyLock;

use divcard_types::TierBlock;
use regex::Regex;

use crate::lines;

/// Divination tier block header, e.g. `Show # $type->divination $tier->t1`.
static TIER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^show\b.*\$type->divination\b.*\$tier->(\w+)")
        .expect("static regex must compile")
});

/// Segments a section body into tier blocks, in file order.
///
/// Per trimmed line, in order of precedence: a tier header flushes any
/// open block and opens a new one; a bare `Show`/`Hide` flushes and
/// leaves block context; outside a block everything else is skipped;
/// inside a block, a `BaseType` line starts name collection, a quoted
/// line continues it, and any other non-empty non-comment line ends it.
/// The final block is flushed at end of input.
///
/// Tier names absent from the vocabulary still produce a block (so the
/// caller can count it) but resolve to ignored; a warning is logged so
/// newly introduced community vocabulary shows up somewhere.
pub fn tier_blocks(body: &[&str]) -> Vec<TierBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<TierBlock> = None;
    let mut collecting_base_type = false;

    for line in body {
        let trimmed = line.trim();

        if let Some(caps) = TIER_HEADER.captures(trimmed) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            let block = TierBlock::new(&caps[1]);
            if block.is_unknown_tier() {
                tracing::warn!(
                    "Unrecognized divination tier '{}', its cards are ignored",
                    block.tier_name
                );
            }
            current = Some(block);
            collecting_base_type = false;
            continue;
        }

        if lines::is_block_start(trimmed) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            collecting_base_type = false;
            continue;
        }

        let Some(block) = current.as_mut() else {
            // No block context, skip.
            continue;
        };

        if lines::is_base_type(trimmed) {
            collecting_base_type = true;
            block.card_names.extend(lines::quoted_names(trimmed));
        } else if collecting_base_type && trimmed.starts_with('"') {
            block.card_names.extend(lines::quoted_names(trimmed));
        } else if collecting_base_type && !trimmed.is_empty() && !lines::is_comment(trimmed) {
            collecting_base_type = false;
        }
        // Blank and comment lines leave the state unchanged.
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks
}
