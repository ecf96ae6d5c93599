//! The chained-placement discipline used by slide templates.
//!
//! There is no layout manager. A template places primitives one at a
//! time, and the origin of each placement is computed from the *realized*
//! rectangle of the previous one plus a fixed margin. Realized geometry
//! matters because table heights and info-box bodies are data-dependent:
//! they are derived from row counts or estimated text heights after the
//! fact, so the requested rectangle is not reliable.
//!
//! The chain has no failure recovery. If an estimate is wrong, every
//! later primitive on the slide inherits the drift; there is no re-layout
//! pass.
//!
//! # Example
//!
//! ```
//! use deck_gen::layout::Cursor;
//! use deck_gen::{In, Pt, Rect, Slide, TextStyle};
//! use deck_gen::canvas::STANDARD;
//!
//! let mut slide = Slide::new("example", STANDARD);
//! let first = slide.add_text_box(
//!     Rect::new(In(0.5), In(1.0), In(4.0), In(0.5)),
//!     "heading",
//!     TextStyle::size(Pt(12.0)).bold(),
//! );
//!
//! let cursor = Cursor::at(first);
//! let second = slide.add_text_box(
//!     Rect::new(In(0.5), cursor.below(In(0.05)), In(4.0), In(0.3)),
//!     "body",
//!     TextStyle::size(Pt(9.0)),
//! );
//! assert_eq!(second.top, In(1.55));
//! ```

mod cursor;

pub use cursor::*;

use crate::units::In;

/// The default spacing between a primitive's trailing edge and the next
/// primitive's leading edge
pub const CHAIN_MARGIN: In = In(0.05);
