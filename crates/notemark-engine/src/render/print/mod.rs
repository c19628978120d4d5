//! # Print Rendering
//!
//! Projects the block sequence into fixed-width fragments, stacks them into
//! pages and serializes the pages as PDF.
//!
//! - **`measure`**: faces, colours, text width estimation
//! - **`layout`**: styled runs, wrapping, draw ops, fragments
//! - **`headings`** / **`table`** / **`blocks`**: per-block layout
//! - **`paginate`**: fragments onto pages, optional page numbers
//! - **`fonts`**: which PDF font each character is written with
//! - **`pdf`**: pages to PDF bytes

pub mod blocks;
pub mod fonts;
pub mod headings;
pub mod layout;
pub mod measure;
pub mod paginate;
pub mod pdf;
pub mod table;

use crate::{io::images::ImageStore, parsing::lines::lines_with_spans};

use super::DocumentSnapshot;
use blocks::BlockLayout;
use layout::PrintFragment;
use measure::Rgb;
use paginate::{Page, paginate};

/// Page geometry and typography for printing, in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintSettings {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Body text size; headings scale from it.
    pub font_size: f32,
    /// Upper bound for one table column.
    pub max_column_width: f32,
    pub page_numbers: bool,
    pub link_color: Rgb,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 24.0,
            font_size: 11.0,
            max_column_width: 220.0,
            page_numbers: false,
            // #1a4f8b
            link_color: Rgb(26.0 / 255.0, 79.0 / 255.0, 139.0 / 255.0),
        }
    }
}

impl PrintSettings {
    pub fn content_width(&self) -> f32 {
        (self.page_width - 2.0 * self.margin).max(1.0)
    }
}

/// A paginated document ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl PrintDocument {
    pub fn to_pdf(&self) -> Vec<u8> {
        pdf::write_pdf(self)
    }
}

/// Stateless projection of a snapshot into pages.
#[derive(Debug, Clone, Copy)]
pub struct PrintRenderer {
    settings: PrintSettings,
}

impl PrintRenderer {
    pub fn new(settings: PrintSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PrintSettings {
        &self.settings
    }

    pub fn render(&self, snapshot: &DocumentSnapshot, images: &dyn ImageStore) -> PrintDocument {
        let layout = BlockLayout {
            settings: &self.settings,
            images,
        };
        let fragments: Vec<PrintFragment> = match snapshot {
            DocumentSnapshot::Markdown(doc) => {
                doc.blocks.iter().map(|b| layout.layout(&b.block)).collect()
            }
            DocumentSnapshot::Raw(text) => lines_with_spans(text)
                .map(|lr| layout.raw_line(lr.text))
                .collect(),
        };
        let pages = paginate(fragments, &self.settings);
        log::debug!("print layout produced {} pages", pages.len());
        PrintDocument {
            page_width: self.settings.page_width,
            page_height: self.settings.page_height,
            pages,
        }
    }
}
