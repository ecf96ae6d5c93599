//! The serialization collaborator's reference sink.
//!
//! The persisted format itself is a collaborator concern; this module
//! defines the interface the document hands its finished layout to and a
//! JSON sink that reproduces every rectangle and style exactly as
//! computed. Numbering has already run by the time a document reaches
//! this point.

use crate::canvas::CanvasSize;
use crate::document::{Chrome, Document};
use crate::error::DeckError;
use crate::info::Info;
use crate::primitive::Primitive;
use chrono::Local;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct DocumentFile<'a> {
    generator: String,
    created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<&'a Info>,
    chrome: &'a Chrome,
    canvas: CanvasSize,
    slides: Vec<SlideRecord<'a>>,
}

#[derive(Serialize)]
struct SlideRecord<'a> {
    title: &'a str,
    primitives: &'a [Primitive],
}

/// Write the finished document to the writer as pretty-printed JSON
pub fn write_document<W: Write>(document: &Document, w: W) -> Result<(), DeckError> {
    let slides = document
        .slide_order
        .iter()
        .map(|id| {
            document
                .slides
                .get(*id)
                .map(|slide| SlideRecord {
                    title: &slide.title,
                    primitives: &slide.primitives,
                })
                .ok_or(DeckError::SlideMissing)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let file = DocumentFile {
        generator: concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION")).to_string(),
        created: Local::now().to_rfc3339(),
        info: document.info.as_ref(),
        chrome: &document.chrome,
        canvas: document.canvas,
        slides,
    };

    serde_json::to_writer_pretty(w, &file)?;
    Ok(())
}
