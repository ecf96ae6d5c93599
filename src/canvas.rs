//! Fixed canvas sizes for slide decks.
//!
//! A canvas is the drawing surface of one slide, given as (width, height)
//! in inches. It is fixed for the lifetime of a document; every slide in
//! a deck shares the same canvas.

use crate::units::In;

/// Canvas dimensions as (width, height) in inches.
pub type CanvasSize = (In, In);

/// 16:9 widescreen canvas, the default for new documents
pub const WIDESCREEN: CanvasSize = (In(40.0 / 3.0), In(7.5));

/// 4:3 standard canvas
pub const STANDARD: CanvasSize = (In(10.0), In(7.5));
