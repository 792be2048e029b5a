//! Reference resolution: book and translation lookups plus deep link formatting

mod books;
mod translations;
mod uri;

pub use books::{resolve_book_code, BOOKS};
pub use translations::{resolve_translation_code, sorted_translations, TranslationId, TRANSLATIONS};
pub use uri::{build_deep_link_uri, DeepLinkBuilder, ReferenceRequest};
