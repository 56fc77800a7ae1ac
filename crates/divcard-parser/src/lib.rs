//! # divcard-parser
//!
//! Extracts divination-card rarity tiers from Path of Exile loot
//! filters.
//!
//! Community filters group divination cards into tiers
//! (`$tier->t1` ... `$tier->restex`) inside a numbered "Divination
//! Cards" section. This crate locates that section via the filter's
//! table of contents, walks its tier blocks, and derives a coarse
//! per-card rarity (1 = extremely rare ... 4 = common) that can serve
//! as an alternative to market-price-derived rarities.
//!
//! The pipeline is total: any textual input yields a
//! [`ParseResult`](divcard_types::ParseResult), never an error.
//! Filter discovery, persistence, and UI orchestration are outside
//! this crate; only [`read_filter`]/[`parse_filter_file`] touch the
//! file system, and only for a single explicitly named path.
//!
//! ```
//! let content = std::fs::read_to_string("my.filter").unwrap_or_default();
//! let result = divcard_parser::parse_filter(&content);
//! if result.has_divination_section {
//!     for (card, rarity) in &result.card_rarities {
//!         println!("{card}: {}", rarity.value());
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod batch;
mod lines;
mod parser;
mod rarity_map;
mod read;
mod section;
mod tier;
mod toc;
mod types;

pub use batch::parse_many;
pub use parser::{parse_filter, parse_filter_with_stats};
pub use read::{parse_filter_file, read_filter};
pub use types::{FilterError, FilterResult, ParseStats};

// Re-export divcard-types for convenience
pub use divcard_types;
