//! Batch parsing helper.
//!
//! The pipeline is pure and reads only immutable lookup tables, so
//! parsing many filters in parallel needs no synchronization.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use divcard_types::ParseResult;

use crate::parser::parse_filter;

/// Parses many filter contents, one result per input, in input order.
///
/// With the `parallel` feature (default) the inputs are parsed on the
/// rayon thread pool; without it this is a plain sequential map.
pub fn parse_many<S: AsRef<str> + Sync>(contents: &[S]) -> Vec<ParseResult> {
    #[cfg(feature = "parallel")]
    {
        contents
            .par_iter()
            .map(|content| parse_filter(content.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        contents
            .iter()
            .map(|content| parse_filter(content.as_ref()))
            .collect()
    }
}
