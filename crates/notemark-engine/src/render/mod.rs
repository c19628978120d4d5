//! # Rendering
//!
//! One parse produces a [`DocumentSnapshot`]; both projections read that same
//! snapshot, so their numbering and styling cannot drift apart.

pub mod interactive;
pub mod print;
pub mod worker;

use std::sync::Arc;

use crate::{
    error::EngineError,
    io::images::ImageStore,
    options::EngineOptions,
    parsing::{ParseOptions, ParsedDoc, parse_document},
};

use interactive::{InteractiveRenderer, InteractiveView};
use print::{PrintDocument, PrintRenderer, PrintSettings};

/// The shared input of both renderers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSnapshot {
    Markdown(Arc<ParsedDoc>),
    /// Markdown disabled: the text is shown as is.
    Raw(Arc<str>),
}

impl DocumentSnapshot {
    /// Checks the size ceiling and parses, unless markdown is off.
    pub fn prepare(text: &str, opts: &EngineOptions) -> Result<Self, EngineError> {
        let chars = text.chars().count();
        if chars > opts.max_document_chars {
            log::warn!(
                "rejecting document of {chars} characters (limit {})",
                opts.max_document_chars
            );
            return Err(EngineError::DocumentTooLarge {
                chars,
                limit: opts.max_document_chars,
            });
        }
        if !opts.flags.markdown_enabled {
            return Ok(DocumentSnapshot::Raw(Arc::from(text)));
        }
        let parse = ParseOptions {
            chapter_numbering: opts.flags.chapter_numbering_enabled,
        };
        Ok(DocumentSnapshot::Markdown(Arc::new(parse_document(
            text, &parse,
        ))))
    }
}

/// Both projections of one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub interactive: InteractiveView,
    pub print: PrintDocument,
}

/// Parses once and runs both renderers over the result.
pub fn render(
    text: &str,
    opts: &EngineOptions,
    settings: PrintSettings,
    images: &dyn ImageStore,
) -> Result<Rendered, EngineError> {
    let snapshot = DocumentSnapshot::prepare(text, opts)?;
    Ok(Rendered {
        interactive: InteractiveRenderer.render(&snapshot, images),
        print: PrintRenderer::new(settings).render(&snapshot, images),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::images::NoImages, options::RenderFlags};

    #[test]
    fn rejects_documents_over_the_ceiling() {
        let opts = EngineOptions {
            max_document_chars: 3,
            ..EngineOptions::default()
        };
        assert_eq!(
            DocumentSnapshot::prepare("abcd", &opts),
            Err(EngineError::DocumentTooLarge { chars: 4, limit: 3 })
        );
        // counted in characters, not bytes
        assert!(DocumentSnapshot::prepare("ééé", &opts).is_ok());
    }

    #[test]
    fn markdown_disabled_bypasses_parsing() {
        let opts = EngineOptions {
            flags: RenderFlags {
                markdown_enabled: false,
                chapter_numbering_enabled: true,
            },
            ..EngineOptions::default()
        };
        let r = render("# Title", &opts, PrintSettings::default(), &NoImages).unwrap();
        assert_eq!(r.interactive, InteractiveView::Raw("# Title".into()));
        assert_eq!(r.print.pages.len(), 1);
    }
}
