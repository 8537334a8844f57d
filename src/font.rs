use crate::units::Pt;

/// The standard PDF fonts that every viewer ships, so nothing has to be embedded.
///
/// Text drawn with these fonts is encoded as WinAnsi (Windows-1252), which covers
/// the Latin scripts addresses are usually written in.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltinFont {
    #[default]
    Helvetica,
    HelveticaBold,
    TimesRoman,
    Courier,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 4] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::TimesRoman,
        BuiltinFont::Courier,
    ];

    /// The PostScript name of the font, as written into the `BaseFont` entry
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::Courier => "Courier",
        }
    }

    /// The name the font is registered under in each page's resource dictionary
    pub(crate) fn resource_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F0",
            BuiltinFont::HelveticaBold => "F1",
            BuiltinFont::TimesRoman => "F2",
            BuiltinFont::Courier => "F3",
        }
    }

    /// Ascender height per 1000 units/em, from the Adobe font metrics
    fn ascender_1000(&self) -> f32 {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaBold => 718.0,
            BuiltinFont::TimesRoman => 683.0,
            BuiltinFont::Courier => 629.0,
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (self.ascender_1000() / 1000.0)
    }

    /// Distance between two consecutive baselines for the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        size * 1.2
    }
}

/// Map a single Unicode char to its WinAnsi byte, if it has one.
fn char_to_winansi(c: char) -> Option<u8> {
    let byte = match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Convert a UTF-8 string to WinAnsi bytes for a PDF string operand. Characters
/// that WinAnsi can't represent are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    let mut dropped = 0usize;
    let bytes: Vec<u8> = s
        .chars()
        .filter_map(|c| {
            let byte = char_to_winansi(c);
            if byte.is_none() {
                dropped += 1;
            }
            byte
        })
        .collect();
    if dropped > 0 {
        log::warn!("Dropped {dropped} character(s) without a WinAnsi encoding from {s:?}");
    }
    bytes
}
