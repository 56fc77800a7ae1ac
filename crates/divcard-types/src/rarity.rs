//! Rarity enumeration types.
//!
//! This module provides the app-internal coarse rarity scale and the
//! rarity-or-ignore outcome a tier block resolves to.

/// Coarse divination-card rarity derived from a filter tier.
///
/// The numeric scale runs from 1 (extremely rare) to 4 (common).
/// `Ord` puts rarer variants first, so resolving a conflict between
/// two rarities for the same card is `min`.
///
/// # Examples
///
/// ```
/// use divcard_types::Rarity;
///
/// let rarity = Rarity::from_value(2);
/// assert_eq!(rarity, Some(Rarity::Rare));
/// assert_eq!(Rarity::Rare.min(Rarity::Common), Rarity::Rare);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    /// Extremely rare card (tier value 1).
    ExtremelyRare,
    /// Rare card (tier value 2).
    Rare,
    /// Less common card (tier value 3).
    LessCommon,
    /// Common card (tier value 4).
    Common,
}

impl Rarity {
    /// Creates a Rarity from its numeric value (1..=4).
    ///
    /// Returns `None` if the value is outside the rarity scale.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ExtremelyRare),
            2 => Some(Self::Rare),
            3 => Some(Self::LessCommon),
            4 => Some(Self::Common),
            _ => None,
        }
    }

    /// Returns the numeric value (1..=4) for this rarity.
    pub fn value(self) -> u8 {
        match self {
            Self::ExtremelyRare => 1,
            Self::Rare => 2,
            Self::LessCommon => 3,
            Self::Common => 4,
        }
    }
}

/// Outcome of resolving a tier name against the tier vocabulary.
///
/// Stack tiers (`exstack`, `excustomstack`) are recognized but carry
/// no rarity information; cards under them contribute nothing to the
/// final map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TierRarity {
    /// The tier maps onto the rarity scale.
    Rated(Rarity),
    /// The tier is deliberately excluded from rarity derivation.
    Ignored,
}

impl TierRarity {
    /// Returns the rarity if this tier is rated.
    pub fn rarity(self) -> Option<Rarity> {
        match self {
            Self::Rated(rarity) => Some(rarity),
            Self::Ignored => None,
        }
    }

    /// Returns true if this tier contributes nothing to the rarity map.
    pub fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }
}
