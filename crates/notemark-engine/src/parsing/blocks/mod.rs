//! # Block Parsing
//!
//! Turns classified lines into the ordered [`Block`] sequence.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockNode`, `ListKind`
//! - **`builder`**: `BlockBuilder`, the single forward pass holding fence and
//!   table accumulators and both counter machines
//! - **`table`**: resolution of a table run into normalized rows
//! - **`anchors`**: heading slugs and the per-document uniqueness registry
//!
//! ## Key Invariants
//!
//! - Block order follows source line order; only code and table runs span
//!   more than one line
//! - Line ranges are contiguous and cover the whole input
//! - Fenced code is a raw zone: no classification or inline parsing inside

pub mod anchors;
pub mod builder;
pub mod table;
pub mod types;

pub use anchors::{AnchorRegistry, slugify};
pub use builder::BlockBuilder;
pub use types::{Block, BlockNode, ListKind};
