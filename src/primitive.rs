use crate::colour::Colour;
use crate::rect::Rect;
use crate::style::TextStyle;
use crate::table::Table;
use crate::units::{In, Pt};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A placed visual element. Every variant carries its full geometry and
/// style so the serialization collaborator can reproduce the layout
/// bit-exactly, and every variant exposes a realized bounding box for
/// chained placement to hang off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    TextBox {
        rect: Rect,
        text: String,
        style: TextStyle,
        fill: Option<Colour>,
    },
    BulletList {
        rect: Rect,
        points: Vec<String>,
        font_size: Pt,
        fill: Option<Colour>,
    },
    Line {
        start_x: In,
        end_x: In,
        y: In,
        colour: Colour,
        thickness: In,
    },
    Image {
        rect: Rect,
        path: PathBuf,
    },
    Table(Table),
}

impl Primitive {
    /// The realized bounding box of the primitive as placed. A line
    /// occupies no vertical space beyond its own y-coordinate, so its
    /// realized height is zero.
    pub fn rect(&self) -> Rect {
        match self {
            Primitive::TextBox { rect, .. }
            | Primitive::BulletList { rect, .. }
            | Primitive::Image { rect, .. } => *rect,
            Primitive::Line {
                start_x, end_x, y, ..
            } => Rect::new(*start_x, *y, *end_x - *start_x, In(0.0)),
            Primitive::Table(table) => table.rect,
        }
    }
}
