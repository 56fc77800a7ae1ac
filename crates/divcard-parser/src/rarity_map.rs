//! Folding tier blocks into the final card rarity map.

use std::collections::BTreeMap;

use divcard_types::{Rarity, TierBlock};

/// Builds the card name to rarity map from an ordered tier-block list.
///
/// Ignored blocks contribute nothing; a card listed only under them
/// gets no entry at all. When a card appears under several rated tiers
/// the rarer (numerically smaller) rarity wins, so the result is
/// independent of block order.
pub fn build_rarity_map(blocks: &[TierBlock]) -> BTreeMap<String, Rarity> {
    let mut map: BTreeMap<String, Rarity> = BTreeMap::new();

    for block in blocks {
        let Some(rarity) = block.rarity.rarity() else {
            continue;
        };
        for name in &block.card_names {
            map.entry(name.clone())
                .and_modify(|existing| *existing = (*existing).min(rarity))
                .or_insert(rarity);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use divcard_types::TierBlock;

    fn block(tier: &str, names: &[&str]) -> TierBlock {
        let mut block = TierBlock::new(tier);
        block.card_names = names.iter().map(|n| n.to_string()).collect();
        block
    }

    #[test]
    fn test_rarer_rarity_wins_conflicts() {
        let map = build_rarity_map(&[block("t5", &["A"]), block("t1", &["A"])]);
        assert_eq!(map.get("A"), Some(&Rarity::ExtremelyRare));

        // Order-independent: same outcome the other way round.
        let map = build_rarity_map(&[block("t1", &["A"]), block("t5", &["A"])]);
        assert_eq!(map.get("A"), Some(&Rarity::ExtremelyRare));
    }

    #[test]
    fn test_tie_leaves_entry_unchanged() {
        let map = build_rarity_map(&[block("t4", &["A"]), block("t5", &["A"])]);
        assert_eq!(map.get("A"), Some(&Rarity::Common));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_ignored_blocks_contribute_nothing() {
        let map = build_rarity_map(&[block("exstack", &["A"]), block("t99", &["B"])]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_ignored_listing_does_not_shadow_rated_one() {
        let map = build_rarity_map(&[block("excustomstack", &["A"]), block("t3", &["A"])]);
        assert_eq!(map.get("A"), Some(&Rarity::Rare));
    }

    #[test]
    fn test_duplicate_names_in_one_block_collapse() {
        let map = build_rarity_map(&[block("t2", &["A", "A"])]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some(&Rarity::Rare));
    }

    #[test]
    fn test_disjoint_blocks_merge() {
        let map = build_rarity_map(&[block("t1", &["A"]), block("t4", &["A", "B"])]);
        assert_eq!(map.get("A"), Some(&Rarity::ExtremelyRare));
        assert_eq!(map.get("B"), Some(&Rarity::Common));
        assert_eq!(map.len(), 2);
    }
}
