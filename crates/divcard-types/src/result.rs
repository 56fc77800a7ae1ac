//! Parse result type.
//!
//! This module provides the `ParseResult` struct, the final outcome of
//! extracting divination-card rarities from one filter file.

use std::collections::BTreeMap;

use crate::Rarity;

/// Result of parsing one loot filter for divination-card rarities.
///
/// A `BTreeMap` keeps iteration order deterministic, so parsing the
/// same content twice yields identical output byte for byte.
///
/// A located section whose tiers are all ignored is still "found":
/// `has_divination_section` is true while the map stays empty. The
/// reverse implication does hold - a missing section always comes with
/// an empty map.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use divcard_types::{ParseResult, Rarity};
///
/// let mut rarities = BTreeMap::new();
/// rarities.insert("The Doctor".to_string(), Rarity::ExtremelyRare);
/// let result = ParseResult::found(rarities);
///
/// assert!(result.has_divination_section);
/// assert_eq!(result.total_cards(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Final card name to rarity mapping; unique keys, rarities 1..=4 only.
    pub card_rarities: BTreeMap<String, Rarity>,
    /// Whether the filter carried a locatable divination-card section.
    pub has_divination_section: bool,
}

impl ParseResult {
    /// Creates the negative result: no usable divination-card section.
    ///
    /// Used both for structurally absent sections and by the read
    /// boundary when file content could not be obtained at all.
    pub fn not_found() -> Self {
        Self {
            card_rarities: BTreeMap::new(),
            has_divination_section: false,
        }
    }

    /// Creates a positive result from a finished rarity map.
    ///
    /// The map may be empty when the section contained only ignored
    /// tiers.
    pub fn found(card_rarities: BTreeMap<String, Rarity>) -> Self {
        Self {
            card_rarities,
            has_divination_section: true,
        }
    }

    /// Number of cards with a derived rarity.
    ///
    /// Always equal to the size of `card_rarities`.
    pub fn total_cards(&self) -> usize {
        self.card_rarities.len()
    }
}
