//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a page in a reference string.
///
/// The simulation engine only ever compares pages for equality, so any
/// `Clone + PartialEq` type works as a page. `PageId` is the concrete type
/// the reference-string parser and the CLI produce.
///
/// Using `i64` because reference strings are typed by hand and a stray
/// negative number is still a valid, distinct page.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }

    /// Little-endian bytes, used when fingerprinting traces.
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad/align flags from the caller apply to the bare number.
        fmt::Display::fmt(&self.0, f)
    }
}
