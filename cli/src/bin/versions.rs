//! bibleqr-versions - refresh the translation table from bible.com's listing.
//!
//! The listing is behind bot protection, so open the URL in a browser,
//! copy the JSON and pipe it in:
//!
//! ```text
//! bibleqr-versions < versions.json
//! ```

use bibleqr_core::catalog::{read_catalog, render_table};
use bibleqr_core::constants::VERSIONS_URL;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bibleqr=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    eprintln!("Paste content of: {}", VERSIONS_URL);
    let entries = read_catalog(std::io::stdin().lock())?;
    tracing::info!(count = entries.len(), "Parsed versions catalog");

    println!("pub static TRANSLATIONS: &[(&str, u32)] = &[");
    print!("{}", render_table(&entries));
    println!("];");

    Ok(())
}
