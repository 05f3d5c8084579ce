//! Reference-string input.
//!
//! Turning user text into page identifiers happens here, before anything
//! reaches the simulator. The simulator never sees a malformed token.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, PageId, Result};

/// Split a reference string into page identifiers.
///
/// Semicolons count as commas. If the text contains a comma it is split on
/// commas, otherwise on whitespace. Tokens are trimmed and empty tokens
/// skipped, so `"1, 2,,3"` and `"1 2  3"` both give three pages.
///
/// # Errors
/// - `Error::InvalidToken` for the first token that is not an integer
///
/// # Example
/// ```
/// use pagesim::{parse_references, PageId};
///
/// let refs = parse_references("7; 0, 1").unwrap();
/// assert_eq!(refs, vec![PageId::new(7), PageId::new(0), PageId::new(1)]);
/// ```
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    let normalized = text.trim().replace(';', ",");

    let tokens: Vec<&str> = if normalized.contains(',') {
        normalized.split(',').map(str::trim).collect()
    } else {
        normalized.split_whitespace().collect()
    };

    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<PageId>()
                .map_err(|_| Error::InvalidToken(token.to_string()))
        })
        .collect()
}

/// Read and parse a reference string from a file.
///
/// The whole file is one reference string; newlines act as whitespace
/// unless the file uses commas or semicolons.
pub fn load_references<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let refs = parse_references(&text)?;

    debug!(path = %path.display(), references = refs.len(), "loaded reference string");
    Ok(refs)
}

/// Enforce the boundary rules on a parsed reference string.
///
/// # Errors
/// - `Error::EmptyReferences` if `refs` is empty
/// - `Error::TooManyReferences` if `refs` is longer than `max`
pub fn check_references<P>(refs: &[P], max: usize) -> Result<()> {
    if refs.is_empty() {
        return Err(Error::EmptyReferences);
    }
    if refs.len() > max {
        return Err(Error::TooManyReferences {
            len: refs.len(),
            max,
        });
    }
    Ok(())
}
