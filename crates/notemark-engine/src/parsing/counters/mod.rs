//! # Counter Engine
//!
//! Two independent numbering machines threaded forward through the document
//! by the block builder. Both are pure: `advance` consumes the current state
//! and returns the label together with the next state.
//!
//! - **`ordered`**: per-indent-level ordered list counters
//! - **`headings`**: chapter counters for `h2`..`h6`
//! - **`numbering`**: per-level display formats (arabic, circled, roman, letter)

pub mod headings;
pub mod numbering;
pub mod ordered;

pub use headings::HeadingCounters;
pub use numbering::NumberFormat;
pub use ordered::{OrderedItem, OrderedLabel, OrderedListCounters};
