//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation core only ever returns [`Error::InvalidCapacity`] (and
/// [`Error::NoVictim`] on an internal invariant breach). The remaining
/// variants belong to the input boundary: tokenizing, length limits and
/// reading reference files.
#[derive(Debug, Error)]
pub enum Error {
    /// The frame pool must hold at least one frame.
    #[error("Invalid capacity {0}: the frame pool needs at least one frame")]
    InvalidCapacity(usize),

    /// A policy name did not match FIFO, LRU or Optimal.
    #[error("Unknown policy: {0} (expected FIFO, LRU or Optimal)")]
    UnknownPolicy(String),

    /// A reference-string token is not an integer page number.
    #[error("Invalid number: {0}")]
    InvalidToken(String),

    /// The reference string contained no pages.
    #[error("Empty reference string")]
    EmptyReferences,

    /// The reference string is longer than the caller allows.
    #[error("Reference string has {len} pages, limit is {max}")]
    TooManyReferences { len: usize, max: usize },

    /// The pool is full but the replacer produced no victim.
    ///
    /// This indicates a bug in a replacer, not bad input.
    #[error("No victim frame available in a full pool")]
    NoVictim,

    /// I/O error while reading a reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
