mod bullets;
pub use bullets::*;

/// Fixed canvas sizes for common slide proportions
pub mod canvas;

mod colour;
pub use colour::*;

mod dataset;
pub use dataset::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod info;
pub use info::*;

/// The chained-placement discipline used to position primitives on slides
pub mod layout;

mod metrics;
pub use metrics::*;

mod primitive;
pub use primitive::*;

mod rect;
pub use rect::*;

mod serialize;
pub use serialize::*;

mod slide;
pub use slide::*;

mod style;
pub use style::*;

mod table;
pub use table::*;

/// Slide recipes that drive the layout chain with supplied content
pub mod template;

mod units;
pub use units::*;
