//! Filter file read boundary.
//!
//! The pipeline itself only sees strings; this module is the one place
//! that touches the file system. Callers that want the failure cause
//! use [`read_filter`]; callers that want the parser's uniform
//! failure-free contract use [`parse_filter_file`], which degrades any
//! read failure to the not-found result.

use std::fs;
use std::path::Path;

use divcard_types::ParseResult;

use crate::parser::parse_filter;
use crate::types::{FilterError, FilterResult};

/// Reads a filter file to a string.
///
/// # Errors
/// Returns an error if the path does not exist or the file cannot be
/// read.
pub fn read_filter<P: AsRef<Path>>(path: P) -> FilterResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FilterError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(fs::read_to_string(path)?)
}

/// Reads and parses a filter file, degrading read failures.
///
/// A file that cannot be read is logged and reported as carrying no
/// divination-card data, the same shape a structurally absent section
/// produces, so callers see one uniform contract.
pub fn parse_filter_file<P: AsRef<Path>>(path: P) -> ParseResult {
    match read_filter(path.as_ref()) {
        Ok(content) => parse_filter(&content),
        Err(e) => {
            tracing::warn!(
                "Could not read filter file {}: {}",
                path.as_ref().display(),
                e
            );
            ParseResult::not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FILTER: &str = "\
# TABLE OF CONTENTS
# [[1]] Divination Cards
# [[1]] Divination Cards
Show # $type->divination $tier->t1
BaseType == \"The Doctor\"
";

    #[test]
    fn test_read_filter_missing_path() {
        let err = read_filter("definitely/not/here.filter").unwrap_err();
        assert!(matches!(err, FilterError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_filter_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strict.filter");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(FILTER.as_bytes()).unwrap();

        let result = parse_filter_file(&path);
        assert!(result.has_divination_section);
        assert_eq!(result.total_cards(), 1);
    }

    #[test]
    fn test_parse_filter_file_degrades_to_not_found() {
        let result = parse_filter_file("definitely/not/here.filter");
        assert!(!result.has_divination_section);
        assert_eq!(result.total_cards(), 0);
    }
}
