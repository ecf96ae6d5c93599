use crate::rect::Rect;
use crate::units::In;
use log::debug;

/// A pure positional accumulator for chained placement.
///
/// A cursor wraps the realized rectangle of the most recently placed
/// primitive. Templates thread it through their composition pass instead
/// of reading position fields back out of shared slide state: place,
/// advance, place again.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    rect: Rect,
}

impl Cursor {
    /// Start a chain from a realized rectangle
    pub fn at(rect: Rect) -> Cursor {
        Cursor { rect }
    }

    /// The rectangle the cursor currently sits on
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The top coordinate for a primitive placed `margin` below the
    /// current rectangle's bottom edge
    pub fn below(&self, margin: In) -> In {
        self.rect.bottom() + margin
    }

    /// The left coordinate for a primitive placed `margin` right of the
    /// current rectangle's right edge
    pub fn beside(&self, margin: In) -> In {
        self.rect.right() + margin
    }

    /// Move the cursor onto a newly realized rectangle, consuming the old
    /// position
    pub fn advance(self, realized: Rect) -> Cursor {
        debug!(
            "chain advanced from bottom {} to bottom {}",
            self.rect.bottom(),
            realized.bottom()
        );
        Cursor { rect: realized }
    }
}
