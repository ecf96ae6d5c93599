use crate::canvas::{CanvasSize, WIDESCREEN};
use crate::error::DeckError;
use crate::info::Info;
use crate::rect::Rect;
use crate::slide::Slide;
use crate::style::TextStyle;
use crate::template::SlideTemplate;
use crate::units::{In, Pt};
use id_arena::{Arena, Id};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Chrome parameters stamped identically on every slide: free-form
/// strings for the header and footer, plus the running page indicator
/// added at write time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chrome {
    pub reference_number: String,
    pub classification: String,
    pub code_version: String,
    pub job_id: String,
}

/// A document is the main object that stores all the slides of a briefing
/// pack, then hands the finished layout to the serialization collaborator
/// with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub canvas: CanvasSize,
    pub chrome: Chrome,
    pub slides: Arena<Slide>,
    pub slide_order: Vec<Id<Slide>>,
}

impl Document {
    /// Create an empty document on the default widescreen canvas
    pub fn new(chrome: Chrome) -> Document {
        Document::with_canvas(chrome, WIDESCREEN)
    }

    /// Create an empty document on an explicit canvas. The canvas is
    /// fixed for the lifetime of the document.
    pub fn with_canvas(chrome: Chrome, canvas: CanvasSize) -> Document {
        Document {
            info: None,
            canvas,
            chrome,
            slides: Arena::new(),
            slide_order: Vec::new(),
        }
    }

    /// Sets information about the document. If not provided, no info
    /// block will be written to the output
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Compose a slide from the given template, apply the document chrome
    /// to it, and append it to the presentation. Returns the id of the
    /// new slide, valid as long as slides are not removed or reordered.
    ///
    /// The chrome pass is append-only: it adds header/footer primitives
    /// after the template's content but never repositions anything the
    /// template placed.
    pub fn add_slide(&mut self, template: &dyn SlideTemplate) -> Result<Id<Slide>, DeckError> {
        let mut slide = template.compose(self.canvas)?;
        self.apply_chrome(&mut slide);
        let id = self.slides.alloc(slide);
        self.slide_order.push(id);
        Ok(id)
    }

    /// Get the 0-based index of a slide given its id. Changing the slide
    /// order after this call _will_ invalidate the returned index
    pub fn index_of_slide(&self, slide: Id<Slide>) -> Option<usize> {
        self.slide_order.iter().position(|id| *id == slide)
    }

    /// Get the slide id at the given index. Returns [None] if
    /// `slide_index >= self.slide_order.len()`.
    pub fn id_of_slide_index(&self, slide_index: usize) -> Option<Id<Slide>> {
        self.slide_order.get(slide_index).copied()
    }

    /// Stamp the uniform header and footer onto a slide: reference number
    /// top-left, bold centered classification top and bottom, a dividing
    /// line under the header, code version and job id bottom-left, and
    /// the slide title in large type above the line
    fn apply_chrome(&self, slide: &mut Slide) {
        let (width, height) = self.canvas;
        let small = TextStyle::size(Pt(7.0));
        let classified = TextStyle::size(Pt(7.0)).bold().centered();
        let centre_x = (width - In(1.5)) / 2.0;

        slide.add_text_box(
            Rect::new(In(0.1), In(0.0), In(1.0), In(1.0)),
            format!("Reference Number: {}", self.chrome.reference_number),
            small,
        );
        slide.add_text_box(
            Rect::new(centre_x, In(0.0), In(1.5), In(0.3)),
            &self.chrome.classification,
            classified,
        );
        slide.add_line(In(0.2), width - In(0.2), In(0.7));

        let bottom_y = height - In(0.2);
        slide.add_text_box(
            Rect::new(In(0.1), bottom_y, In(1.0), In(1.0)),
            format!("Code version: {}", self.chrome.code_version),
            small,
        );
        slide.add_text_box(
            Rect::new(In(1.0), bottom_y, In(1.0), In(1.0)),
            format!("Job ID: {}", self.chrome.job_id),
            small,
        );
        slide.add_text_box(
            Rect::new(centre_x, bottom_y, In(1.5), In(0.3)),
            &self.chrome.classification,
            classified,
        );

        let title = slide.title.clone();
        slide.add_text_box(
            Rect::new(In(0.11), In(0.36), In(1.0), In(0.4)),
            title,
            TextStyle::size(Pt(18.0)),
        );
    }

    /// Add the running "i/N" page indicator to the bottom-right corner of
    /// every slide. Numbering needs the final slide count, so it runs
    /// exactly once, immediately before serialization.
    fn number_slides(&mut self) -> Result<(), DeckError> {
        let (width, height) = self.canvas;
        let total = self.slide_order.len();

        for (index, id) in self.slide_order.iter().enumerate() {
            let slide = self.slides.get_mut(*id).ok_or(DeckError::SlideMissing)?;
            slide.add_text_box(
                Rect::new(width - In(0.35), height - In(0.2), In(3.0), In(0.2)),
                format!("{}/{}", index + 1, total),
                TextStyle::size(Pt(7.0)),
            );
        }
        Ok(())
    }

    /// Number the slides and write the entire document to the writer.
    /// Serialization is a terminal, one-shot operation; the output
    /// reproduces every rectangle and style exactly as computed.
    pub fn write<W: Write>(mut self, w: W) -> Result<(), DeckError> {
        self.number_slides()?;
        crate::serialize::write_document(&self, w)
    }
}
