//! Grid arithmetic for placing labels on a sheet.
//!
//! Columns and rows are 1-based. Offsets are measured from the top-left corner
//! of the sheet. None of these functions detect page overflow: once a page holds
//! [`LabelSettings::labels_per_page`] labels the caller starts a new page and
//! counts from zero again.

use crate::rect::Rect;
use crate::settings::LabelSettings;
use crate::units::Pt;

/// The 1-based column and row a label lands in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridPosition {
    pub column: usize,
    pub row: usize,
}

impl GridPosition {
    /// Position of the label preceded by `label_index_in_page` labels on its page.
    ///
    /// Panics if `columns_per_page` is zero; [`LabelSettings::validate`] rules that out.
    pub fn for_index(label_index_in_page: usize, columns_per_page: usize) -> GridPosition {
        GridPosition {
            column: current_column(label_index_in_page, columns_per_page),
            row: current_row(label_index_in_page, columns_per_page),
        }
    }

    /// Where the label's text starts, as (left, top)
    pub fn content_position(&self, settings: &LabelSettings) -> (Pt, Pt) {
        (
            content_position_left(self.column, settings),
            content_position_top(self.row, settings),
        )
    }
}

pub fn current_column(label_index_in_page: usize, columns_per_page: usize) -> usize {
    label_index_in_page % columns_per_page + 1
}

pub fn current_row(label_index_in_page: usize, columns_per_page: usize) -> usize {
    label_index_in_page / columns_per_page + 1
}

pub fn content_position_left(current_column: usize, settings: &LabelSettings) -> Pt {
    settings.label_padding_left
        + settings.label_margin_left
        + settings.label_position_x * current_column.saturating_sub(1) as f32
}

pub fn content_position_top(current_row: usize, settings: &LabelSettings) -> Pt {
    settings.label_padding_top
        + settings.label_margin_top
        + settings.label_position_y * current_row.saturating_sub(1) as f32
}

/// Top-left corner of the label cell itself, ignoring padding
pub fn label_origin(position: GridPosition, settings: &LabelSettings) -> (Pt, Pt) {
    (
        settings.label_margin_left
            + settings.label_position_x * position.column.saturating_sub(1) as f32,
        settings.label_margin_top
            + settings.label_position_y * position.row.saturating_sub(1) as f32,
    )
}

/// The area inside a label that is left for text once padding is taken off both sides
pub fn content_size(settings: &LabelSettings) -> (Pt, Pt) {
    (
        (settings.label_width - settings.label_padding_left * 2.0).max(Pt(0.0)),
        (settings.label_height - settings.label_padding_top * 2.0).max(Pt(0.0)),
    )
}

/// The outline of the label cell at `position`
pub fn label_rectangle(position: GridPosition, settings: &LabelSettings) -> Rect {
    let (x, y) = label_origin(position, settings);
    Rect::from_origin_size(x, y, settings.label_width, settings.label_height)
}
