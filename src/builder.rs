//! Places addresses on label sheets, one label per address, starting a new page
//! whenever the current one is full.

use crate::address::Address;
use crate::canvas::LabelCanvas;
use crate::colour::colours;
use crate::document::Document;
use crate::format::format_label_text;
use crate::grid::{label_rectangle, GridPosition};
use crate::info::Info;
use crate::page::TextStyle;
use crate::settings::{DocumentType, LabelSettings};
use crate::LabelError;
use std::time::Instant;

/// Lays addresses out on the sheets of one template
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    settings: LabelSettings,
    info: Option<Info>,
}

impl DocumentBuilder {
    /// Resolve the settings for `document_type`. Invalid templates fail here,
    /// before any page exists.
    pub fn new(document_type: &DocumentType) -> Result<DocumentBuilder, LabelError> {
        Ok(DocumentBuilder {
            settings: document_type.settings()?,
            info: None,
        })
    }

    /// Attach metadata to documents produced by [`DocumentBuilder::build`]
    pub fn with_info(mut self, info: Info) -> DocumentBuilder {
        self.info = Some(info);
        self
    }

    pub fn settings(&self) -> &LabelSettings {
        &self.settings
    }

    /// Place every address on `canvas` in order, returning the number of pages added.
    ///
    /// Pages are only created for labels that need them, so no addresses means no pages.
    pub fn place<C: LabelCanvas>(
        &self,
        canvas: &mut C,
        addresses: &[Address],
    ) -> Result<usize, LabelError> {
        let settings = &self.settings;
        let capacity = settings.labels_per_page();
        let style = TextStyle {
            font: settings.font,
            size: settings.font_size,
            colour: colours::BLACK,
        };

        let mut page_count = 0;
        let mut current_page: Option<C::PageHandle> = None;
        let mut label_index_in_page = 0;

        for address in addresses {
            let page = match current_page {
                Some(page) if label_index_in_page < capacity => page,
                _ => {
                    let page = canvas.add_page(settings.page_size);
                    page_count += 1;
                    label_index_in_page = 0;
                    current_page = Some(page);
                    log::debug!("Started page {page_count}");
                    page
                }
            };

            let position = GridPosition::for_index(label_index_in_page, settings.columns_per_page);
            let (left, top) = position.content_position(settings);
            let text = format_label_text(address.lines.as_slice(), settings.max_characters_per_row);

            canvas.draw_text(page, left, top, &text, style)?;
            if settings.draw_label_borders {
                canvas.draw_rect(
                    page,
                    label_rectangle(position, settings),
                    settings.border_colour,
                )?;
            }

            label_index_in_page += 1;
        }

        Ok(page_count)
    }

    /// Lay the addresses out into a new [`Document`]
    pub fn build(&self, addresses: &[Address]) -> Result<Document, LabelError> {
        let t0 = Instant::now();

        let mut info = self.info.clone().unwrap_or_default();
        info.describe_labels(addresses.len(), self.settings.labels_per_page());
        let mut document = Document::default();
        document.set_info(info);
        let pages = self.place(&mut document, addresses)?;

        log::info!(
            "Placed {} labels on {} page(s) in {:.1}ms",
            addresses.len(),
            pages,
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(document)
    }
}

/// Lay `addresses` out with the template selected by `document_type`
pub fn create_document(
    addresses: &[Address],
    document_type: &DocumentType,
) -> Result<Document, LabelError> {
    DocumentBuilder::new(document_type)?.build(addresses)
}
