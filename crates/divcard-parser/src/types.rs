//! Parser-specific types for loot-filter processing.

use divcard_types::TierBlock;
use thiserror::Error;

/// Errors that can occur at the filter read boundary.
///
/// The parse pipeline itself is total: any textual input produces a
/// [`ParseResult`](divcard_types::ParseResult), never an error. These
/// variants only describe failures to obtain the text in the first
/// place.
#[derive(Error, Debug)]
pub enum FilterError {
    /// I/O error reading a filter file.
    #[error("IO error reading filter file: {0}")]
    Io(#[from] std::io::Error),

    /// Filter file not found.
    #[error("Filter file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },
}

/// Result type for filter read operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Diagnostic counters from parsing one filter.
///
/// Derived from the ordered tier-block list before it is folded into
/// the final rarity map; never affects the parse outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Tier blocks found in the divination-card section.
    pub tier_blocks: usize,
    /// Blocks whose tier is ignored (stack tiers and unknown vocabulary).
    pub ignored_blocks: usize,
    /// Raw card names extracted, before deduplication and conflict
    /// resolution.
    pub names_extracted: usize,
}

impl ParseStats {
    /// Derives counters from an ordered tier-block list.
    pub fn from_blocks(blocks: &[TierBlock]) -> Self {
        Self {
            tier_blocks: blocks.len(),
            ignored_blocks: blocks.iter().filter(|b| b.is_ignored()).count(),
            names_extracted: blocks.iter().map(|b| b.card_names.len()).sum(),
        }
    }
}
