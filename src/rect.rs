use crate::canvas::CanvasSize;
use crate::units::In;
use serde::{Deserialize, Serialize};

/// A rectangle on the slide canvas, specified by its top-left corner and
/// its size. The vertical axis grows downward: `top` is the distance from
/// the top edge of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: In,
    pub top: In,
    pub width: In,
    pub height: In,
}

impl Rect {
    pub fn new(left: In, top: In, width: In, height: In) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// The y-coordinate of the bottom edge. Chained placement hangs the
    /// next primitive off this edge.
    pub fn bottom(&self) -> In {
        self.top + self.height
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> In {
        self.left + self.width
    }

    /// Whether the rectangle lies entirely on the given canvas. This is a
    /// soft invariant: placement never rejects an off-canvas rectangle, it
    /// only logs it, so this check is also usable as a test property.
    pub fn contained_in(&self, canvas: CanvasSize) -> bool {
        self.left >= In(0.0)
            && self.top >= In(0.0)
            && self.width >= In(0.0)
            && self.height >= In(0.0)
            && self.right() <= canvas.0
            && self.bottom() <= canvas.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_derive_from_origin_and_size() {
        let r = Rect::new(In(1.0), In(2.0), In(3.0), In(0.5));
        assert_eq!(r.right(), In(4.0));
        assert_eq!(r.bottom(), In(2.5));
    }

    #[test]
    fn containment_is_inclusive_of_the_canvas_edge() {
        let canvas = (In(10.0), In(7.5));
        assert!(Rect::new(In(0.0), In(0.0), In(10.0), In(7.5)).contained_in(canvas));
        assert!(!Rect::new(In(9.0), In(0.0), In(1.5), In(1.0)).contained_in(canvas));
        assert!(!Rect::new(In(-0.1), In(0.0), In(1.0), In(1.0)).contained_in(canvas));
    }
}
