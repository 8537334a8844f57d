use crate::{
    font::BuiltinFont,
    info::Info,
    page::Page,
    pagesize::PageSize,
    refs::{ObjectReferences, RefType},
    LabelError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Name, Pdf};
use std::{collections::BTreeSet, io::Write};

/// A document is the main object that stores all the pages of the label sheets,
/// then renders them out with a call to [Document::write] or [Document::to_bytes]
#[derive(Debug)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    /// Deflate page content streams when writing
    pub compress: bool,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            compress: true,
        }
    }
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Turn content stream compression on or off. Uncompressed output is larger but
    /// readable in a text editor.
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Add an empty page of the given size to the end of the document, returning its id.
    pub fn add_page(&mut self, size: PageSize) -> Id<Page> {
        let id = self.pages.alloc(Page::new(size));
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get a page by its id
    pub fn page(&self, id: Id<Page>) -> Result<&Page, LabelError> {
        self.pages.get(id).ok_or(LabelError::PageMissing)
    }

    pub(crate) fn page_mut(&mut self, id: Id<Page>) -> Result<&mut Page, LabelError> {
        self.pages.get_mut(id).ok_or(LabelError::PageMissing)
    }

    /// Iterate over the pages in document order
    pub fn iter_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|p| *p == page)
    }

    /// Write the entire document to the writer. The document is rendered in memory
    /// first and then written out in one go.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), LabelError> {
        w.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Render the document into the bytes of a PDF file
    pub fn to_bytes(&self) -> Result<Vec<u8>, LabelError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<_> = (0..self.page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let mut fonts: BTreeSet<BuiltinFont> = BTreeSet::new();
        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self.page(*id)?;
            fonts.extend(page.fonts());
            page.write(&mut refs, page_index, self.compress, &mut writer);
        }

        for font in fonts {
            writer
                .type1_font(refs.gen(RefType::Font(font)))
                .base_font(Name(font.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::page::{TextBlock, TextStyle};
    use crate::pagesize::A4;
    use crate::units::Pt;

    fn count(haystack: &[u8], needle: &str) -> usize {
        String::from_utf8_lossy(haystack).matches(needle).count()
    }

    #[test]
    fn empty_document_has_no_pages() {
        let doc = Document::default();
        assert_eq!(doc.page_count(), 0);
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, "/Count 0"), 1);
    }

    #[test]
    fn pages_keep_their_order_and_size() {
        let mut doc = Document::default();
        let first = doc.add_page(A4);
        let second = doc.add_page(A4);
        assert_eq!(doc.index_of_page(first), Some(0));
        assert_eq!(doc.index_of_page(second), Some(1));
        assert_eq!(doc.page(first).unwrap().size, A4);
        assert_eq!(doc.iter_pages().count(), 2);
    }

    #[test]
    fn writes_fonts_and_text_uncompressed() {
        let mut doc = Document::default();
        doc.set_compression(false);
        let mut info = Info::new();
        info.title("Address labels").author("Tolvan Tolvansson");
        doc.set_info(info);

        let id = doc.add_page(A4);
        doc.page_mut(id).unwrap().add_text(TextBlock {
            text: "Bertil Cederqvist\r\n".into(),
            style: TextStyle {
                font: BuiltinFont::TimesRoman,
                size: Pt(12.0),
                colour: colours::BLACK,
            },
            origin: (Pt(10.0), Pt(10.0)),
        });

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).unwrap();
        assert_eq!(count(&out, "/Count 1"), 1);
        assert_eq!(count(&out, "/BaseFont /Times-Roman"), 1);
        assert_eq!(count(&out, "/WinAnsiEncoding"), 1);
        assert_eq!(count(&out, "(Bertil Cederqvist) Tj"), 1);
        assert_eq!(count(&out, "(Address labels)"), 1);
    }

    fn first_stream(bytes: &[u8]) -> &[u8] {
        let find = |needle: &[u8], from: usize| {
            bytes[from..]
                .windows(needle.len())
                .position(|w| w == needle)
                .map(|i| i + from)
                .unwrap()
        };
        let start = find(b"stream\n", 0) + b"stream\n".len();
        let end = find(b"\nendstream", start);
        &bytes[start..end]
    }

    #[test]
    fn compressed_streams_inflate_back_to_content() {
        let mut doc = Document::default();
        let id = doc.add_page(A4);
        doc.page_mut(id).unwrap().add_text(TextBlock {
            text: "Bertil Cederqvist".into(),
            style: TextStyle {
                font: BuiltinFont::Helvetica,
                size: Pt(12.0),
                colour: colours::BLACK,
            },
            origin: (Pt(10.0), Pt(10.0)),
        });
        let bytes = doc.to_bytes().unwrap();
        assert_eq!(count(&bytes, "/FlateDecode"), 1);

        let inflated =
            miniz_oxide::inflate::decompress_to_vec_zlib(first_stream(&bytes)).unwrap();
        assert_eq!(count(&inflated, "(Bertil Cederqvist) Tj"), 1);
        assert_eq!(count(&inflated, "/F0 12 Tf"), 1);
    }

    #[test]
    fn foreign_page_ids_are_rejected() {
        let mut other = Document::default();
        other.add_page(A4);
        let foreign = other.add_page(A4);

        let doc = Document::default();
        assert!(matches!(doc.page(foreign), Err(LabelError::PageMissing)));
    }
}
