//! # divcard-types
//!
//! Type definitions for divination-card rarity data derived from
//! Path of Exile loot filters.
//!
//! A loot filter groups divination cards into community tiers
//! (`t1`, `t4c`, `exstack`, ...). This crate models the coarse rarity
//! scale those tiers map onto, the tier blocks a filter declares, and
//! the final parse result.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use divcard_types::{Rarity, TierRarity, tiers};
//!
//! // Tier vocabulary maps onto the 1..=4 rarity scale.
//! assert_eq!(tiers::classify("t1"), Some(TierRarity::Rated(Rarity::ExtremelyRare)));
//! assert_eq!(tiers::classify("exstack"), Some(TierRarity::Ignored));
//!
//! // Smaller value means rarer; conflict resolution is `min`.
//! assert_eq!(Rarity::ExtremelyRare.value(), 1);
//! assert!(Rarity::ExtremelyRare < Rarity::Common);
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! divcard-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod block;
mod rarity;
mod result;
pub mod tiers;

// Re-export all public types at crate root
pub use block::TierBlock;
pub use rarity::{Rarity, TierRarity};
pub use result::ParseResult;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        // Verify all types are accessible from crate root
        let _rarity = Rarity::Common;
        let _tier_rarity = TierRarity::Ignored;
        let _block = TierBlock::new("t1");
        let _result = ParseResult::not_found();
    }

    #[test]
    fn test_tier_table_accessible() {
        assert_eq!(tiers::classify("t4c"), Some(TierRarity::Rated(Rarity::LessCommon)));
        assert_eq!(tiers::classify("nonsense"), None);
    }
}
