//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration defaults and [`SimConfig`]
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
mod frame_id;
mod page_id;

pub use crate::error::{Error, Result};
pub use config::SimConfig;
pub use frame_id::FrameId;
pub use page_id::PageId;
