use crate::units::*;

/// A rectangle, specified by two opposite corners.
///
/// Rectangles handed to a [`LabelCanvas`](crate::LabelCanvas) are in sheet coordinates:
/// `(x1, y1)` is the top-left corner and `y` grows towards the bottom of the sheet.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (top) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (bottom) corner.
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle from its top-left corner and its size
    pub fn from_origin_size(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// A rectangle is empty when it has no area
    pub fn is_empty(&self) -> bool {
        self.width() <= Pt(0.0) || self.height() <= Pt(0.0)
    }

    /// Flip the rectangle into PDF user space, whose origin is the bottom-left of a
    /// page that is `page_height` tall
    pub fn to_pdf(&self, page_height: Pt) -> pdf_writer::Rect {
        pdf_writer::Rect {
            x1: self.x1.into(),
            y1: (page_height - self.y2).into(),
            x2: self.x2.into(),
            y2: (page_height - self.y1).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_emptiness() {
        let rect = Rect::from_origin_size(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0));
        assert_eq!(rect.width(), Pt(30.0));
        assert_eq!(rect.height(), Pt(40.0));
        assert!(!rect.is_empty());
        assert!(Rect::default().is_empty());
    }

    #[test]
    fn flips_into_pdf_space() {
        let rect = Rect::from_origin_size(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0));
        let pdf = rect.to_pdf(Pt(100.0));
        assert_eq!(pdf.x1, 10.0);
        assert_eq!(pdf.x2, 40.0);
        assert_eq!(pdf.y1, 40.0);
        assert_eq!(pdf.y2, 80.0);
    }
}
