//! Translation abbreviations and provider identifiers

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::debug;

use crate::constants::DEFAULT_TRANSLATION_ID;
use crate::{Error, Result};

/// English translations published by bible.com, keyed by local abbreviation.
///
/// Refresh with the `bibleqr-versions` tool.
pub static TRANSLATIONS: &[(&str, u32)] = &[
    ("AMP", 1588),
    ("AMPC", 8),
    ("ASV", 12),
    ("BOOKS", 31),
    ("BSB", 3034),
    ("CEB", 37),
    ("CEV", 392),
    ("CEVDCI", 303),
    ("CEVUK", 294),
    ("CJB", 1275),
    ("CPDV", 42),
    ("CSB", 1713),
    ("DARBY", 478),
    ("DRC1752", 55),
    ("EASY", 2079),
    ("ERV", 406),
    ("ESV", 59),
    ("FBV", 1932),
    ("GNBDC", 416),
    ("GNBDK", 431),
    ("GNBUK", 296),
    ("GNT", 68),
    ("GNTD", 69),
    ("GNV", 2163),
    ("GW", 70),
    ("GWC", 1047),
    ("HCSB", 72),
    ("ICB", 1359),
    ("JUB", 1077),
    ("KJV", 1),
    ("KJVAAE", 546),
    ("KJVAE", 547),
    ("LEB", 90),
    ("MEV", 1171),
    ("MP1650", 1365),
    ("MP1781", 3051),
    ("MSG", 97),
    ("NABRE", 463),
    ("NASB1995", 100),
    ("NASB2020", 2692),
    ("NCV", 105),
    ("NET", 107),
    ("NIRV", 110),
    ("NIV", 111),
    ("NIVUK", 113),
    ("NKJV", 114),
    ("NLT", 116),
    ("NMV", 2135),
    ("NRSV", 2016),
    ("NRSV-CI", 2015),
    ("OJB", 130),
    ("PEV", 2530),
    ("RAD", 2753),
    ("RSV", 2020),
    ("RSV-CI", 2017),
    ("RV1885", 477),
    ("RV1895", 1922),
    ("TEG", 3010),
    ("TLV", 314),
    ("TPT", 1849),
    ("TS2009", 316),
    ("WBMS", 2407),
    ("WEB", 206),
    ("WEBBE", 1204),
    ("WMB", 1209),
    ("WMBBE", 1207),
    ("YLT98", 821),
];

static TRANSLATION_INDEX: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| TRANSLATIONS.iter().copied().collect());

/// Provider identifier of a translation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TranslationId {
    /// Identifier found in the translation table
    Known(u32),
    /// All-digit input passed through without checking the table
    Raw(String),
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationId::Known(id) => write!(f, "{}", id),
            TranslationId::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Resolve a translation abbreviation to its provider identifier.
///
/// - `None` resolves to KJV (identifier 1).
/// - A string of ASCII digits is returned unchanged as [`TranslationId::Raw`],
///   so callers can pass identifiers the table does not list.
/// - Anything else is looked up case-sensitively.
pub fn resolve_translation_code(abbreviation: Option<&str>) -> Result<TranslationId> {
    let Some(abbreviation) = abbreviation else {
        return Ok(TranslationId::Known(DEFAULT_TRANSLATION_ID));
    };

    if is_numeric(abbreviation) {
        debug!(translation = abbreviation, "Passing numeric translation through");
        return Ok(TranslationId::Raw(abbreviation.to_string()));
    }

    let id = TRANSLATION_INDEX
        .get(abbreviation)
        .copied()
        .ok_or_else(|| Error::UnknownTranslation(abbreviation.to_string()))?;
    debug!(translation = abbreviation, id, "Resolved translation");
    Ok(TranslationId::Known(id))
}

/// Translation table sorted by abbreviation, for listing
pub fn sorted_translations() -> Vec<(&'static str, u32)> {
    let mut entries = TRANSLATIONS.to_vec();
    entries.sort_unstable_by_key(|(abbreviation, _)| *abbreviation);
    entries
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_kjv() {
        assert_eq!(
            resolve_translation_code(None).unwrap(),
            TranslationId::Known(1)
        );
        assert_eq!(
            resolve_translation_code(Some("KJV")).unwrap(),
            TranslationId::Known(1)
        );
    }

    #[test]
    fn test_known_translations() {
        assert_eq!(
            resolve_translation_code(Some("NIV")).unwrap(),
            TranslationId::Known(111)
        );
        assert_eq!(
            resolve_translation_code(Some("ESV")).unwrap(),
            TranslationId::Known(59)
        );
        assert_eq!(
            resolve_translation_code(Some("NRSV-CI")).unwrap(),
            TranslationId::Known(2015)
        );
    }

    #[test]
    fn test_numeric_passthrough() {
        let id = resolve_translation_code(Some("42")).unwrap();
        assert_eq!(id, TranslationId::Raw("42".to_string()));
        assert_eq!(id.to_string(), "42");

        // Leading zeros survive untouched
        assert_eq!(resolve_translation_code(Some("007")).unwrap().to_string(), "007");
    }

    #[test]
    fn test_unknown_translation() {
        let err = resolve_translation_code(Some("XXX")).unwrap_err();
        assert!(matches!(err, Error::UnknownTranslation(ref v) if v == "XXX"));
        assert_eq!(err.to_string(), "Unknown version: 'XXX'");

        assert!(resolve_translation_code(Some("kjv")).is_err());
        assert!(resolve_translation_code(Some("")).is_err());
        assert!(resolve_translation_code(Some("-1")).is_err());
    }

    #[test]
    fn test_table_is_consistent() {
        assert_eq!(TRANSLATIONS.len(), 67);
        let abbreviations: HashSet<_> = TRANSLATIONS.iter().map(|(a, _)| a).collect();
        let ids: HashSet<_> = TRANSLATIONS.iter().map(|(_, id)| id).collect();
        assert_eq!(abbreviations.len(), TRANSLATIONS.len());
        assert_eq!(ids.len(), TRANSLATIONS.len());
    }

    #[test]
    fn test_sorted_translations() {
        let sorted = sorted_translations();
        assert_eq!(sorted.len(), TRANSLATIONS.len());
        assert!(sorted.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
