//! Lays out postal addresses onto printable PDF label sheets.
//!
//! ```
//! use label_sheets::{create_document, Address, DocumentType};
//!
//! let addresses = vec![
//!     Address::from(["Anita Andersson", "Betavägen 2", "12345 Saltö", "Sverige"]),
//!     Address::from(["Bertil Cederqvist", "Djurövägen 2", "12345 Djurö", "Sverige"]),
//! ];
//! let document = create_document(&addresses, &DocumentType::A4Columns2Rows8)?;
//! assert_eq!(document.page_count(), 1);
//! let pdf = document.to_bytes()?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), label_sheets::LabelError>(())
//! ```

mod address;
pub use address::*;

mod builder;
pub use builder::*;

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod format;
pub use format::*;

/// Grid arithmetic mapping label indices to positions on the sheet
pub mod grid;

mod info;
pub use info::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod settings;
pub use settings::*;

mod units;
pub use units::*;

/// Re-export PDF-writer, the crate the documents are serialized with
pub use pdf_writer;
