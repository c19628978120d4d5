//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: a stable text outline of the block model for `insta`
//!   snapshots, plus a serializable per-block shape list
//! - **`invariants`**: runtime checks for parser correctness (contiguous line
//!   coverage, unique anchors, rectangular tables, unbroken ordered runs)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Shape, outline, shapes, spans_text};
