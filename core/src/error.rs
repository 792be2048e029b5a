use thiserror::Error;

/// bibleqr error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown book name: '{0}'")]
    UnknownBook(String),

    #[error("Unknown version: '{0}'")]
    UnknownTranslation(String),

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("Invalid versions catalog: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
