//! bibleqr Core - Bible passage deep links rendered as QR codes
//!
//! This library resolves a human-readable Bible reference (book name,
//! chapter, verse range, translation) into a bible.com deep link and
//! renders that link as a scannable QR code image.

pub mod catalog;
pub mod constants;
pub mod qr;
pub mod reference;

mod error;

pub use error::{Error, Result};

/// Configuration for deep link construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host of the provider, without a trailing slash
    pub base_url: String,
    /// Locale path segment, e.g. `en-GB`
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            locale: constants::DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    /// Default config with a different locale segment
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }
}

// Re-export key types for convenience
pub use qr::{ImageFormat, QrEmitter};
pub use reference::{
    build_deep_link_uri, resolve_book_code, resolve_translation_code, DeepLinkBuilder,
    ReferenceRequest, TranslationId,
};
