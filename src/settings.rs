//! Label sheet templates.
//!
//! A [`LabelSettings`] describes one sheet layout: how many labels sit on a page,
//! how far apart they are and where the text starts inside each label. The
//! templates that ship with the crate are selected through [`DocumentType`].

use crate::colour::{colours, Colour};
use crate::font::BuiltinFont;
use crate::pagesize::{self, PageSize};
use crate::units::{Mm, Pt};
use crate::LabelError;
use std::fmt;
use std::str::FromStr;

/// Geometry and text settings for one label sheet template
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSettings {
    /// The size of each sheet
    pub page_size: PageSize,
    pub columns_per_page: usize,
    pub rows_per_page: usize,
    /// Width of a single label
    pub label_width: Pt,
    /// Height of a single label
    pub label_height: Pt,
    /// Horizontal distance between the left edges of neighbouring labels
    pub label_position_x: Pt,
    /// Vertical distance between the top edges of neighbouring labels
    pub label_position_y: Pt,
    /// Distance from the left edge of the sheet to the first column
    pub label_margin_left: Pt,
    /// Distance from the top edge of the sheet to the first row
    pub label_margin_top: Pt,
    /// Distance from the left edge of a label to its text
    pub label_padding_left: Pt,
    /// Distance from the top edge of a label to its text
    pub label_padding_top: Pt,
    /// Longest row of text printed on a label, in characters
    pub max_characters_per_row: usize,
    pub font: BuiltinFont,
    pub font_size: Pt,
    /// Outline every label, handy when checking alignment against a real sheet
    pub draw_label_borders: bool,
    pub border_colour: Colour,
}

impl LabelSettings {
    /// A4 sheet with 2 columns and 8 rows of 105 x 37 mm labels
    pub fn a4_2_columns_8_rows() -> LabelSettings {
        LabelSettings {
            page_size: pagesize::A4,
            columns_per_page: 2,
            rows_per_page: 8,
            label_width: Mm(105.0).into(),
            label_height: Mm(37.0).into(),
            label_position_x: Mm(105.0).into(),
            label_position_y: Mm(37.0).into(),
            label_margin_left: Mm(0.0).into(),
            label_margin_top: Mm(0.5).into(),
            label_padding_left: Mm(8.0).into(),
            label_padding_top: Mm(6.0).into(),
            max_characters_per_row: 40,
            font: BuiltinFont::Helvetica,
            font_size: Pt(10.0),
            draw_label_borders: false,
            border_colour: colours::LIGHT_GREY,
        }
    }

    /// A4 sheet with 3 columns and 8 rows of 70 x 37 mm labels
    pub fn a4_3_columns_8_rows() -> LabelSettings {
        LabelSettings {
            page_size: pagesize::A4,
            columns_per_page: 3,
            rows_per_page: 8,
            label_width: Mm(70.0).into(),
            label_height: Mm(37.0).into(),
            label_position_x: Mm(70.0).into(),
            label_position_y: Mm(37.0).into(),
            label_margin_left: Mm(0.0).into(),
            label_margin_top: Mm(0.5).into(),
            label_padding_left: Mm(6.0).into(),
            label_padding_top: Mm(6.0).into(),
            max_characters_per_row: 28,
            font: BuiltinFont::Helvetica,
            font_size: Pt(9.0),
            draw_label_borders: false,
            border_colour: colours::LIGHT_GREY,
        }
    }

    /// How many labels fit on one page
    pub fn labels_per_page(&self) -> usize {
        self.columns_per_page.saturating_mul(self.rows_per_page)
    }

    /// Set the font used for the label text, modifying `self`
    pub fn font(&mut self, font: BuiltinFont, size: Pt) -> &mut Self {
        self.font = font;
        self.font_size = size;
        self
    }

    /// Set the per-row character limit, modifying `self`
    pub fn max_characters_per_row(&mut self, max: usize) -> &mut Self {
        self.max_characters_per_row = max;
        self
    }

    /// Outline every label in the given colour, modifying `self`
    pub fn label_borders(&mut self, colour: Colour) -> &mut Self {
        self.draw_label_borders = true;
        self.border_colour = colour;
        self
    }

    /// Check the settings can describe a label sheet at all
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.columns_per_page == 0 {
            return Err(LabelError::Configuration(
                "columns per page must be at least 1".into(),
            ));
        }
        if self.rows_per_page == 0 {
            return Err(LabelError::Configuration(
                "rows per page must be at least 1".into(),
            ));
        }
        if self.max_characters_per_row == 0 {
            return Err(LabelError::Configuration(
                "max characters per row must be at least 1".into(),
            ));
        }
        if self.columns_per_page.checked_mul(self.rows_per_page).is_none() {
            return Err(LabelError::Configuration(format!(
                "{} x {} labels per page is too many",
                self.columns_per_page, self.rows_per_page
            )));
        }
        if !(self.font_size.is_finite() && self.font_size > Pt(0.0)) {
            return Err(LabelError::Configuration(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        let (width, height) = self.page_size;
        if !(width.is_finite() && height.is_finite() && width > Pt(0.0) && height > Pt(0.0)) {
            return Err(LabelError::Configuration(format!(
                "page size must be positive, got {width} x {height}"
            )));
        }
        for (name, length) in [
            ("label width", self.label_width),
            ("label height", self.label_height),
            ("horizontal label pitch", self.label_position_x),
            ("vertical label pitch", self.label_position_y),
            ("left margin", self.label_margin_left),
            ("top margin", self.label_margin_top),
            ("left padding", self.label_padding_left),
            ("top padding", self.label_padding_top),
        ] {
            // NaN fails both comparisons
            if !(length.is_finite() && length >= Pt(0.0)) {
                return Err(LabelError::Configuration(format!(
                    "{name} must be a non-negative length, got {length}"
                )));
            }
        }
        Ok(())
    }
}

/// Selects the label sheet template a document is laid out with
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentType {
    /// See [`LabelSettings::a4_2_columns_8_rows`]
    A4Columns2Rows8,
    /// See [`LabelSettings::a4_3_columns_8_rows`]
    A4Columns3Rows8,
    /// A caller-supplied template
    Custom(LabelSettings),
}

impl DocumentType {
    /// Resolve the settings for this document type, validating custom templates
    pub fn settings(&self) -> Result<LabelSettings, LabelError> {
        let settings = match self {
            DocumentType::A4Columns2Rows8 => LabelSettings::a4_2_columns_8_rows(),
            DocumentType::A4Columns3Rows8 => LabelSettings::a4_3_columns_8_rows(),
            DocumentType::Custom(settings) => settings.clone(),
        };
        settings.validate()?;
        log::debug!(
            "Resolved {}: {}x{} labels per page",
            self,
            settings.columns_per_page,
            settings.rows_per_page
        );
        Ok(settings)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::A4Columns2Rows8 => f.write_str("A4_2Columns8Rows"),
            DocumentType::A4Columns3Rows8 => f.write_str("A4_3Columns8Rows"),
            DocumentType::Custom(_) => f.write_str("Custom"),
        }
    }
}

impl FromStr for DocumentType {
    type Err = LabelError;

    /// Accepts the template names (`A4_2Columns8Rows`) and their short forms (`a4-2x8`),
    /// ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4_2columns8rows" | "a4-2x8" => Ok(DocumentType::A4Columns2Rows8),
            "a4_3columns8rows" | "a4-3x8" => Ok(DocumentType::A4Columns3Rows8),
            _ => Err(LabelError::Configuration(format!(
                "unknown document type {s:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PageOrientation, LETTER};
    use crate::units::In;

    #[test]
    fn settings_are_generated_for_each_document_type() {
        let settings = DocumentType::A4Columns2Rows8.settings().unwrap();
        assert_eq!(settings, LabelSettings::a4_2_columns_8_rows());
        assert_eq!(settings.labels_per_page(), 16);

        let settings = DocumentType::A4Columns3Rows8.settings().unwrap();
        assert_eq!(settings, LabelSettings::a4_3_columns_8_rows());
        assert_eq!(settings.labels_per_page(), 24);
    }

    #[test]
    fn templates_fit_on_their_sheet() {
        for settings in [
            LabelSettings::a4_2_columns_8_rows(),
            LabelSettings::a4_3_columns_8_rows(),
        ] {
            let right = settings.label_margin_left
                + settings.label_position_x * (settings.columns_per_page - 1) as f32
                + settings.label_width;
            let bottom = settings.label_margin_top
                + settings.label_position_y * (settings.rows_per_page - 1) as f32
                + settings.label_height;
            assert!(right.0 <= settings.page_size.0 .0 + 0.01);
            assert!(bottom.0 <= settings.page_size.1 .0 + 0.01);
        }
    }

    #[test]
    fn document_types_parse_from_names() {
        assert_eq!(
            "A4_2Columns8Rows".parse::<DocumentType>().unwrap(),
            DocumentType::A4Columns2Rows8
        );
        assert_eq!(
            "a4-3x8".parse::<DocumentType>().unwrap(),
            DocumentType::A4Columns3Rows8
        );
        for ty in [DocumentType::A4Columns2Rows8, DocumentType::A4Columns3Rows8] {
            assert_eq!(ty.to_string().parse::<DocumentType>().unwrap(), ty);
        }
    }

    #[test]
    fn unknown_document_type_is_a_configuration_error() {
        let err = "Letter_4Columns20Rows".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, LabelError::Configuration(_)));
    }

    #[test]
    fn zero_columns_or_rows_fail_validation() {
        let mut settings = LabelSettings::a4_2_columns_8_rows();
        settings.columns_per_page = 0;
        let err = DocumentType::Custom(settings).settings().unwrap_err();
        assert!(matches!(err, LabelError::Configuration(_)));

        let mut settings = LabelSettings::a4_2_columns_8_rows();
        settings.rows_per_page = 0;
        assert!(settings.validate().is_err());

        let mut settings = LabelSettings::a4_2_columns_8_rows();
        settings.max_characters_per_row(0);
        assert!(settings.validate().is_err());

        let mut settings = LabelSettings::a4_2_columns_8_rows();
        settings.font(BuiltinFont::Courier, Pt(0.0));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn negative_or_non_finite_lengths_fail_validation() {
        let mut settings = LabelSettings::a4_2_columns_8_rows();
        settings.label_position_y = Pt(-10.0);
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, LabelError::Configuration(_)));

        let mut settings = LabelSettings::a4_3_columns_8_rows();
        settings.label_padding_left = Pt(f32::INFINITY);
        assert!(settings.validate().is_err());

        let mut settings = LabelSettings::a4_3_columns_8_rows();
        settings.font(BuiltinFont::Helvetica, Pt(f32::NAN));
        assert!(settings.validate().is_err());

        let mut settings = LabelSettings::a4_3_columns_8_rows();
        settings.page_size = (Pt(f32::NAN), Pt(800.0));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn oversized_grids_fail_validation() {
        let mut settings = LabelSettings::a4_2_columns_8_rows();
        settings.columns_per_page = usize::MAX;
        assert!(matches!(
            settings.validate(),
            Err(LabelError::Configuration(_))
        ));
        assert_eq!(settings.labels_per_page(), usize::MAX);
    }

    #[test]
    fn letter_templates_can_be_given_in_inches() {
        let mut settings = LabelSettings::a4_3_columns_8_rows();
        settings.page_size = LETTER;
        settings.columns_per_page = 3;
        settings.rows_per_page = 10;
        settings.label_width = In(2.625).into();
        settings.label_height = In(1.0).into();
        settings.label_position_x = In(2.75).into();
        settings.label_position_y = In(1.0).into();
        settings.label_margin_left = In(0.1875).into();
        settings.label_margin_top = In(0.5).into();
        assert_eq!(settings.labels_per_page(), 30);
        assert!(DocumentType::Custom(settings.clone()).settings().is_ok());

        let right = settings.label_margin_left
            + settings.label_position_x * 2.0
            + settings.label_width;
        assert!(right.0 <= LETTER.0 .0);

        settings.page_size = LETTER.landscape();
        assert!(settings.page_size.0 > settings.page_size.1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn setters_chain() {
        let mut settings = LabelSettings::a4_3_columns_8_rows();
        settings
            .font(BuiltinFont::TimesRoman, Pt(11.0))
            .max_characters_per_row(20)
            .label_borders(colours::BLACK);
        assert_eq!(settings.font, BuiltinFont::TimesRoman);
        assert_eq!(settings.font_size, Pt(11.0));
        assert_eq!(settings.max_characters_per_row, 20);
        assert!(settings.draw_label_borders);
        assert!(DocumentType::Custom(settings).settings().is_ok());
    }
}
