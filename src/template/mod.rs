//! Slide recipes: fixed sequences of chained placement calls.
//!
//! A template owns the *content* of one slide (dataset handles, bullet
//! text, image paths) and composes it in a single pass when the document
//! asks for it. Templates contain no layout logic of their own beyond
//! threading a [Cursor](crate::layout::Cursor) through the placement
//! operations; the document applies chrome afterwards.

mod summary;
mod tabular;
mod title;

pub use summary::*;
pub use tabular::*;
pub use title::*;

use crate::canvas::CanvasSize;
use crate::error::DeckError;
use crate::slide::Slide;

/// A recipe for composing one slide of a briefing pack
pub trait SlideTemplate {
    /// The title the chrome pass stamps onto the slide
    fn title(&self) -> &str;

    /// Compose the slide's content on the given canvas in one
    /// uninterrupted pass. External resources (images) are read within
    /// this call and a failure aborts the whole document.
    fn compose(&self, canvas: CanvasSize) -> Result<Slide, DeckError>;
}
