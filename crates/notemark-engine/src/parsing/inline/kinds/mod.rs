//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` ` `` raw zones, scanned around by every other pass
//! - **`Link`**: `[label](target)`, `#` prefix marks internal anchors
//! - **`Delimiter`**: `~~`, `**`, `*`, `_` emphasis pairs
//!
//! The parser uses these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Delimiter;
pub use link::Link;
