use pdf_writer::Content;

/// A colour, expressed in RGB, CMYK or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    pub(crate) fn set_fill(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_fill_gray(g),
        };
    }

    pub(crate) fn set_stroke(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.75 };
}
