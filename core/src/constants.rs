//! Centralized constants
//!
//! Provider URLs and encoder defaults live here so the resolver, the
//! emitter and the CLI agree on them.

/// Base URL of the Bible provider
pub const DEFAULT_BASE_URL: &str = "https://www.bible.com";

/// Locale path segment used in deep links
pub const DEFAULT_LOCALE: &str = "en-GB";

/// Translation used when none is requested
pub const DEFAULT_TRANSLATION: &str = "KJV";

/// Provider identifier of the default translation (KJV)
pub const DEFAULT_TRANSLATION_ID: u32 = 1;

/// Upscale factor applied to each QR module
pub const DEFAULT_SCALE: u32 = 5;

/// Default output image path
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Provider endpoint listing English translations, used by the catalog tool
pub const VERSIONS_URL: &str = "https://www.bible.com/json/bible/versions/eng";
