//! pagesim - step-by-step page replacement simulation.
//!
//! Runs a reference string through a fixed pool of frames under FIFO, LRU
//! or Optimal (Belady) eviction and records every step: which page was
//! referenced, what the frames hold afterwards, hit or miss, and which page
//! (if any) was evicted.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  input (parse_references)  →  SimConfig / simulate()     │
//! ├───────────────────────────────────────────────────────────┤
//! │  policy/                                                 │
//! │   Policy { Fifo | Lru | Optimal }  → shared driver        │
//! │   replacer: FifoReplacer | LruReplacer | OptimalReplacer │
//! ├───────────────────────────────────────────────────────────┤
//! │  pool/                                                   │
//! │   FramePool  →  Step snapshots  →  Trace  →  Metrics      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`pool`] - Frame pool, step/trace model, metrics
//! - [`policy`] - Eviction policies and the simulation driver
//! - [`input`] - Reference-string tokenizing and validation
//! - [`report`] - Plain-text tables
//!
//! # Quick Start
//! ```
//! use pagesim::{parse_references, simulate, Policy};
//!
//! let refs = parse_references("1,2,3,4,1,2,5,1,2,3,4,5").unwrap();
//! let trace = simulate(&refs, 3, Policy::Fifo).unwrap();
//!
//! assert_eq!(trace.len(), refs.len());
//! assert_eq!(trace.metrics().hits, 3);
//! ```

pub mod common;
pub mod error;
pub mod input;
pub mod policy;
pub mod pool;
pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, DEFAULT_MAX_REFERENCES, DEFAULT_POLICY};
pub use common::{Error, FrameId, PageId, Result, SimConfig};

pub use input::{check_references, load_references, parse_references};
pub use policy::{compare, simulate, Policy};
pub use pool::{FramePool, Metrics, Step, Trace, TraceCursor};
