//! Tier block type.
//!
//! This module provides the `TierBlock` struct representing one
//! `Show # $type->divination $tier->...` block of a filter's
//! divination-card section.

use crate::{tiers, TierRarity};

/// One tier block from a filter's divination-card section.
///
/// A block carries the tier it was declared under and the card names
/// listed on its `BaseType` line(s), in file order. Names are not
/// deduplicated here; the same card may repeat if the filter repeats
/// it. Blocks live only for the duration of a single parse call.
///
/// # Examples
///
/// ```
/// use divcard_types::{Rarity, TierBlock, TierRarity};
///
/// let mut block = TierBlock::new("T1");
/// block.card_names.push("The Doctor".to_string());
///
/// assert_eq!(block.tier_name, "t1");
/// assert_eq!(block.rarity, TierRarity::Rated(Rarity::ExtremelyRare));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBlock {
    /// Tier identifier from the block header, lower-cased.
    pub tier_name: String,
    /// Rarity outcome resolved from the tier name. Unknown vocabulary
    /// resolves to `Ignored`.
    pub rarity: TierRarity,
    /// Card names declared under this block, in file order.
    pub card_names: Vec<String>,
}

impl TierBlock {
    /// Creates an empty block for the given tier identifier.
    ///
    /// The identifier is lower-cased and resolved against the tier
    /// vocabulary; unknown identifiers yield an ignored block.
    pub fn new(tier_name: &str) -> Self {
        let tier_name = tier_name.to_ascii_lowercase();
        let rarity = tiers::classify(&tier_name).unwrap_or(TierRarity::Ignored);
        Self {
            tier_name,
            rarity,
            card_names: Vec::new(),
        }
    }

    /// Returns true if this block contributes nothing to a rarity map.
    pub fn is_ignored(&self) -> bool {
        self.rarity.is_ignored()
    }

    /// Returns true if the block's tier identifier is absent from the
    /// tier vocabulary (as opposed to a recognized stack tier).
    pub fn is_unknown_tier(&self) -> bool {
        tiers::classify(&self.tier_name).is_none()
    }
}
