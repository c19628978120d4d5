//! # Block Kinds
//!
//! Each construct owns its delimiters. The classifier asks these types
//! whether a line has their shape; it never hardcodes `#`, `> ` or `|`.
//!
//! - **`CodeFence`**: ```` ``` ```` delimiter and info string
//! - **`TableRow`**: `|` rows, cell splitting, separator detection
//! - **`AtxHeading`**: `#` markers, levels 1-6
//! - **`ListMarker`**: bullet, checklist and ordered markers
//! - **`BlockQuote`**: `> ` prefix
//! - **`ThematicBreak`**: `---`, `***`, `___`
//! - **`ImageRef`**: `![alt](target)` references

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list_marker;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::AtxHeading;
pub use image::ImageRef;
pub use list_marker::{ListMarker, OrderedMarker};
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
