//! Community tier vocabulary.
//!
//! This module provides the fixed lookup from the tier identifiers that
//! community loot filters use for divination cards (`t1`, `t4c`,
//! `exstack`, ...) to the internal rarity scale.
//!
//! # Examples
//!
//! ```
//! use divcard_types::{tiers, Rarity, TierRarity};
//!
//! assert_eq!(tiers::classify("t1"), Some(TierRarity::Rated(Rarity::ExtremelyRare)));
//! assert_eq!(tiers::classify("T5"), Some(TierRarity::Rated(Rarity::Common)));
//!
//! // Stack tiers are recognized but excluded from rarity derivation.
//! assert_eq!(tiers::classify("exstack"), Some(TierRarity::Ignored));
//!
//! // Vocabulary the table does not know yields `None`.
//! assert_eq!(tiers::classify("t99"), None);
//! ```

use crate::{Rarity, TierRarity};

// =============================================================================
// Stack Tiers
// =============================================================================

/// Stack tier for currency-like card stacks.
///
/// Stacks carry no per-card rarity information.
pub const EX_STACK: &str = "exstack";

/// Stack tier for user-customized card stacks.
pub const EX_CUSTOM_STACK: &str = "excustomstack";

// =============================================================================
// Rated Tiers
// =============================================================================

/// Top tier - the handful of extremely rare, high-value cards.
pub const T1: &str = "t1";

/// Second tier - rare cards.
pub const T2: &str = "t2";

/// Third tier - still treated as rare by the rarity scale.
pub const T3: &str = "t3";

/// Tier for cards newly added to the game, treated as rare until priced.
pub const T_NEW: &str = "tnew";

/// Fourth tier, currency-adjacent variant - less common cards.
pub const T4C: &str = "t4c";

/// Fifth tier, currency-adjacent variant - common cards.
pub const T5C: &str = "t5c";

/// Fourth tier - common cards.
pub const T4: &str = "t4";

/// Fifth tier - common cards.
pub const T5: &str = "t5";

/// Remainder tier for everything the filter did not price - common.
pub const REST_EX: &str = "restex";

/// Resolves a tier identifier to its rarity outcome.
///
/// Matching is case-insensitive. Returns `None` for identifiers absent
/// from the vocabulary so callers can tell unknown tiers apart from the
/// deliberately ignored stack tiers; both ultimately contribute no
/// cards to a rarity map.
pub fn classify(tier: &str) -> Option<TierRarity> {
    match tier.to_ascii_lowercase().as_str() {
        EX_CUSTOM_STACK | EX_STACK => Some(TierRarity::Ignored),
        T1 => Some(TierRarity::Rated(Rarity::ExtremelyRare)),
        T2 | T3 | T_NEW => Some(TierRarity::Rated(Rarity::Rare)),
        T4C => Some(TierRarity::Rated(Rarity::LessCommon)),
        T5C | T4 | T5 | REST_EX => Some(TierRarity::Rated(Rarity::Common)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rated_tiers() {
        assert_eq!(classify("t1"), Some(TierRarity::Rated(Rarity::ExtremelyRare)));
        assert_eq!(classify("t2"), Some(TierRarity::Rated(Rarity::Rare)));
        assert_eq!(classify("t3"), Some(TierRarity::Rated(Rarity::Rare)));
        assert_eq!(classify("tnew"), Some(TierRarity::Rated(Rarity::Rare)));
        assert_eq!(classify("t4c"), Some(TierRarity::Rated(Rarity::LessCommon)));
        assert_eq!(classify("t5c"), Some(TierRarity::Rated(Rarity::Common)));
        assert_eq!(classify("t4"), Some(TierRarity::Rated(Rarity::Common)));
        assert_eq!(classify("t5"), Some(TierRarity::Rated(Rarity::Common)));
        assert_eq!(classify("restex"), Some(TierRarity::Rated(Rarity::Common)));
    }

    #[test]
    fn test_classify_stack_tiers() {
        assert_eq!(classify("exstack"), Some(TierRarity::Ignored));
        assert_eq!(classify("excustomstack"), Some(TierRarity::Ignored));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("T1"), classify("t1"));
        assert_eq!(classify("ExStack"), Some(TierRarity::Ignored));
        assert_eq!(classify("RESTEX"), Some(TierRarity::Rated(Rarity::Common)));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("t99"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("divination"), None);
    }
}
