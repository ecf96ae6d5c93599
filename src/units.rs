use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// How many typographic points fit in one inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// A distance in canvas inches. All slide geometry (positions, widths,
/// heights) is expressed in this unit.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Default,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{_0}in")]
pub struct In(pub f32);

/// A font size in typographic points (72 points per inch)
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Default,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl In {
    /// Convert a distance in inches to typographic points
    pub fn to_pt(self) -> Pt {
        Pt(self.0 * POINTS_PER_INCH)
    }
}

impl Pt {
    /// Convert a size in points to canvas inches
    pub fn to_in(self) -> In {
        In(self.0 / POINTS_PER_INCH)
    }
}

impl Mul<f32> for In {
    type Output = In;
    fn mul(self, rhs: f32) -> In {
        In(self.0 * rhs)
    }
}

impl Div<f32> for In {
    type Output = In;
    fn div(self, rhs: f32) -> In {
        In(self.0 / rhs)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_inches_and_points() {
        assert_eq!(In(1.0).to_pt(), Pt(72.0));
        assert_eq!(Pt(36.0).to_in(), In(0.5));
    }

    #[test]
    fn arithmetic_behaves_like_plain_floats() {
        assert_eq!(In(1.0) + In(0.5), In(1.5));
        assert_eq!(In(2.0) - In(0.5), In(1.5));
        assert_eq!(In(2.0) * 3.0, In(6.0));
        assert_eq!(In(3.0) / 2.0, In(1.5));
    }
}
