use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("invalid label configuration: {0}")]
    /// The document type is unknown or its settings can't describe a label sheet
    Configuration(String),

    #[error("page does not belong to this document")]
    /// A page handle was used with a document that didn't create it
    PageMissing,

    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),
}
