//! # Inline Parsing
//!
//! Turns the text of one line into styled [`Span`]s.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Bold, Italic, Strikethrough, Code, Link)
//! - **`kinds`**: inline types with owned delimiters (CodeSpan, Link, Delimiter)
//! - **`cursor`**: byte `Cursor` used by the link scanner
//! - **`parser`**: `parse_inline()` and its passes
//!
//! ## Raw Zone Precedence
//!
//! Backtick regions are raw: `` `**x**` `` is one code span, never bold.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Span, plain_text};
