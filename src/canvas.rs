use crate::colour::Colour;
use crate::document::Document;
use crate::page::{Page, RectOutline, TextBlock, TextStyle};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use crate::LabelError;
use id_arena::Id;

/// Width of the line used for label outlines
pub const OUTLINE_WIDTH: Pt = Pt(0.5);

/// The drawing operations label placement needs from a PDF backend.
///
/// Coordinates are measured from the top-left corner of the page, `y` growing
/// downward. [`Document`] is the implementation that produces PDF output; tests
/// drive the placement logic with a recording implementation instead.
pub trait LabelCanvas {
    /// Handle to a page created by [`LabelCanvas::add_page`]
    type PageHandle: Copy;

    /// Append a blank page to the end of the canvas
    fn add_page(&mut self, size: PageSize) -> Self::PageHandle;

    /// Draw a block of text whose first line's top-left corner is at `(x, y)`
    fn draw_text(
        &mut self,
        page: Self::PageHandle,
        x: Pt,
        y: Pt,
        text: &str,
        style: TextStyle,
    ) -> Result<(), LabelError>;

    /// Stroke the outline of `rect`
    fn draw_rect(
        &mut self,
        page: Self::PageHandle,
        rect: Rect,
        colour: Colour,
    ) -> Result<(), LabelError>;
}

impl LabelCanvas for Document {
    type PageHandle = Id<Page>;

    fn add_page(&mut self, size: PageSize) -> Id<Page> {
        Document::add_page(self, size)
    }

    fn draw_text(
        &mut self,
        page: Id<Page>,
        x: Pt,
        y: Pt,
        text: &str,
        style: TextStyle,
    ) -> Result<(), LabelError> {
        self.page_mut(page)?.add_text(TextBlock {
            text: text.to_string(),
            style,
            origin: (x, y),
        });
        Ok(())
    }

    fn draw_rect(&mut self, page: Id<Page>, rect: Rect, colour: Colour) -> Result<(), LabelError> {
        self.page_mut(page)?.add_rect(RectOutline {
            rect,
            colour,
            line_width: OUTLINE_WIDTH,
        });
        Ok(())
    }
}
