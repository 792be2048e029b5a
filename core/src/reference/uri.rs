//! Deep link construction

use tracing::debug;

use super::{resolve_book_code, resolve_translation_code};
use crate::{Config, Result};

/// A single passage lookup: book, chapter, optional verse range and translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceRequest {
    pub book: String,
    pub chapter: u32,
    pub verse_start: Option<u32>,
    pub verse_end: Option<u32>,
    /// Abbreviation such as `NIV`, or a raw numeric identifier
    pub translation: Option<String>,
}

impl ReferenceRequest {
    /// Request for a whole chapter in the default translation
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            ..Self::default()
        }
    }

    pub fn verses(mut self, start: Option<u32>, end: Option<u32>) -> Self {
        self.verse_start = start;
        self.verse_end = end;
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Verse start to use in the link.
    ///
    /// A reference that only names an end verse starts at that verse.
    fn effective_start(&self) -> Option<u32> {
        self.verse_start.or(self.verse_end)
    }
}

/// Builds bible.com deep links against a [`Config`]
#[derive(Debug, Clone, Default)]
pub struct DeepLinkBuilder {
    config: Config,
}

impl DeepLinkBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Format the deep link for `request`.
    ///
    /// Shape: `{base}/{locale}/bible/{translation}/{BOOK}.{chapter}[.{start}][-{end}]`.
    /// Chapter and verse numbers are not checked against the book.
    pub fn build(&self, request: &ReferenceRequest) -> Result<String> {
        let book_code = resolve_book_code(&request.book)?;
        let translation_id = resolve_translation_code(request.translation.as_deref())?;

        let mut uri = format!(
            "{}/{}/bible/{}/{}.{}",
            self.config.base_url, self.config.locale, translation_id, book_code, request.chapter
        );
        if let Some(start) = request.effective_start() {
            uri.push_str(&format!(".{}", start));
        }
        if let Some(end) = request.verse_end {
            uri.push_str(&format!("-{}", end));
        }

        debug!(%uri, "Built deep link");
        Ok(uri)
    }
}

/// Build a deep link with the default provider and locale
pub fn build_deep_link_uri(request: &ReferenceRequest) -> Result<String> {
    DeepLinkBuilder::default().build(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_single_verse() {
        let request = ReferenceRequest::new("John", 3).verses(Some(16), None);
        assert_eq!(
            build_deep_link_uri(&request).unwrap(),
            "https://www.bible.com/en-GB/bible/1/JHN.3.16"
        );
    }

    #[test]
    fn test_end_without_start() {
        let request = ReferenceRequest::new("John", 3).verses(None, Some(17));
        assert_eq!(
            build_deep_link_uri(&request).unwrap(),
            "https://www.bible.com/en-GB/bible/1/JHN.3.17-17"
        );
    }

    #[test]
    fn test_range_with_translation() {
        let request = ReferenceRequest::new("Psalms", 23)
            .verses(Some(1), Some(6))
            .translation("NIV");
        assert_eq!(
            build_deep_link_uri(&request).unwrap(),
            "https://www.bible.com/en-GB/bible/111/PSA.23.1-6"
        );
    }

    #[test]
    fn test_whole_chapter() {
        let request = ReferenceRequest::new("1 Corinthians", 13);
        assert_eq!(
            build_deep_link_uri(&request).unwrap(),
            "https://www.bible.com/en-GB/bible/1/1CO.13"
        );
    }

    #[test]
    fn test_raw_translation_id() {
        let request = ReferenceRequest::new("Genesis", 1)
            .verses(Some(1), None)
            .translation("3034");
        assert_eq!(
            build_deep_link_uri(&request).unwrap(),
            "https://www.bible.com/en-GB/bible/3034/GEN.1.1"
        );
    }

    #[test]
    fn test_out_of_range_verses_are_accepted() {
        let request = ReferenceRequest::new("Jude", 9).verses(Some(400), Some(2));
        assert_eq!(
            build_deep_link_uri(&request).unwrap(),
            "https://www.bible.com/en-GB/bible/1/JUD.9.400-2"
        );
    }

    #[test]
    fn test_errors_propagate() {
        let bad_book = ReferenceRequest::new("Hezekiah", 1);
        assert!(matches!(build_deep_link_uri(&bad_book), Err(Error::UnknownBook(_))));

        let bad_translation = ReferenceRequest::new("John", 1).translation("XXX");
        assert!(matches!(
            build_deep_link_uri(&bad_translation),
            Err(Error::UnknownTranslation(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        let request = ReferenceRequest::new("Romans", 8)
            .verses(Some(28), Some(39))
            .translation("ESV");
        let first = build_deep_link_uri(&request).unwrap();
        let second = build_deep_link_uri(&request).unwrap();
        assert_eq!(first, second);
        let rebuilt = ReferenceRequest::new("Romans", 8)
            .verses(Some(28), Some(39))
            .translation("ESV");
        assert_eq!(request, rebuilt);
    }

    #[test]
    fn test_custom_locale() {
        let builder = DeepLinkBuilder::new(Config::with_locale("en-US"));
        let request = ReferenceRequest::new("John", 3).verses(Some(16), None);
        assert_eq!(
            builder.build(&request).unwrap(),
            "https://www.bible.com/en-US/bible/1/JHN.3.16"
        );
    }
}
