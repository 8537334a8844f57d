use crate::colour::Colour;
use crate::font::{to_winansi_bytes, BuiltinFont};
use crate::format::LINE_TERMINATOR;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Str};
use std::collections::BTreeSet;

/// Font, size and colour of a block of text
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub size: Pt,
    pub colour: Colour,
}

/// A block of text, one or more lines separated by [`LINE_TERMINATOR`] or `\n`,
/// whose top-left corner sits at `origin`
#[derive(Clone, PartialEq, Debug)]
pub struct TextBlock {
    pub text: String,
    pub style: TextStyle,
    pub origin: (Pt, Pt),
}

/// A stroked rectangle outline
#[derive(Clone, PartialEq, Debug)]
pub struct RectOutline {
    pub rect: Rect,
    pub colour: Colour,
    pub line_width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(TextBlock),
    Rect(RectOutline),
}

/// One sheet of the document. Contents are positioned from the top-left corner of
/// the sheet and only converted to PDF's bottom-left origin when the page is written.
#[derive(Debug, Clone)]
pub struct Page {
    /// The size of the page
    pub size: PageSize,
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            size,
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    pub fn add_text(&mut self, block: TextBlock) {
        self.contents.push(PageContents::Text(block));
    }

    pub fn add_rect(&mut self, outline: RectOutline) {
        self.contents.push(PageContents::Rect(outline));
    }

    /// The text blocks on the page, in drawing order
    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(block) => Some(block),
            PageContents::Rect(_) => None,
        })
    }

    /// Every font drawn with on this page
    pub(crate) fn fonts(&self) -> BTreeSet<BuiltinFont> {
        self.text_blocks().map(|block| block.style.font).collect()
    }

    /// Render the page contents into a PDF content stream
    pub(crate) fn render(&self) -> Vec<u8> {
        let mut content = Content::new();
        let height = self.height();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(block) => {
                    let TextStyle { font, size, colour } = block.style;
                    let line_height = font.line_height(size);
                    let (x, top) = block.origin;
                    let baseline = height - top - font.ascent(size);

                    content.save_state();
                    colour.set_fill(&mut content);
                    content.begin_text();
                    content.set_font(Name(font.resource_name().as_bytes()), size.into());
                    content.next_line(x.into(), baseline.into());
                    for (i, line) in lines(&block.text).enumerate() {
                        if i > 0 {
                            content.next_line(0.0, -f32::from(line_height));
                        }
                        content.show(Str(&to_winansi_bytes(line)));
                    }
                    content.end_text();
                    content.restore_state();
                }
                PageContents::Rect(outline) => {
                    let rect = outline.rect.to_pdf(height);
                    content.save_state();
                    outline.colour.set_stroke(&mut content);
                    content.set_line_width(outline.line_width.into());
                    content.rect(rect.x1, rect.y1, rect.x2 - rect.x1, rect.y2 - rect.y1);
                    content.stroke();
                    content.restore_state();
                }
            }
        }

        content.finish().to_vec()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        compress: bool,
        writer: &mut Pdf,
    ) {
        let id = refs.gen(RefType::Page(page_index));
        let page_tree = refs.gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let font_refs: Vec<_> = self
            .fonts()
            .into_iter()
            .map(|font| (font, refs.gen(RefType::Font(font))))
            .collect();

        let mut page = writer.page(id);
        page.media_box(pdf_writer::Rect::new(
            0.0,
            0.0,
            self.width().into(),
            self.height().into(),
        ));
        page.parent(page_tree);
        page.contents(content_id);
        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font, font_ref) in font_refs.iter() {
            resource_fonts.pair(Name(font.resource_name().as_bytes()), *font_ref);
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let rendered = self.render();
        if compress {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
                rendered.as_slice(),
                miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
            );
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, rendered.as_slice());
        }
    }
}

/// Split a text block into its lines, accepting both CR+LF and bare LF
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.strip_suffix(LINE_TERMINATOR)
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
