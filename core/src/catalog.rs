//! Translation catalog conversion
//!
//! bible.com publishes its English translations as JSON at
//! [`VERSIONS_URL`](crate::constants::VERSIONS_URL). The endpoint sits
//! behind bot protection, so the body is fetched by hand and fed to
//! [`parse_catalog`]; [`render_table`] turns the result into entries for
//! the translation table.

use std::io::Read;

use serde::Deserialize;

use crate::{Error, Result};

/// One translation from the provider's listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub local_abbreviation: String,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    items: Vec<CatalogEntry>,
}

/// Parse the versions JSON body, keeping source order.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>> {
    let catalog: Catalog =
        serde_json::from_str(json.trim()).map_err(|e| Error::Catalog(e.to_string()))?;
    Ok(catalog.items)
}

/// Read and parse a versions JSON body from `reader`.
pub fn read_catalog<R: Read>(mut reader: R) -> Result<Vec<CatalogEntry>> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_catalog(&json)
}

/// Render entries as `("ABBR", id),` lines.
pub fn render_table(entries: &[CatalogEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("    ({:?}, {}),\n", entry.local_abbreviation, entry.id))
        .collect()
}
