//! Length units used throughout the crate.
//!
//! PDF works in points (1/72 inch), so everything is eventually expressed as [`Pt`].
//! Label sheets are usually specified by the manufacturer in millimetres, hence [`Mm`].

use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub, Sum};
use std::ops::Mul;

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// A length in PDF points
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, MulAssign, Sum, From,
    Into, Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// Neither infinite nor NaN
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl From<In> for Pt {
    fn from(inches: In) -> Pt {
        Pt(inches.0 * POINTS_PER_INCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_inch_is_72_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn point_arithmetic() {
        assert_eq!(Pt(2.0) + Pt(3.0), Pt(5.0));
        assert_eq!(Pt(2.0) * 3.0, Pt(6.0));
        assert_eq!(Pt(1.0).max(Pt(-1.0)), Pt(1.0));
        assert_eq!(format!("{}", Pt(1.5)), "1.5pt");
    }
}
