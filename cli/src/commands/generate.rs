//! QR generation for a single reference.

use anyhow::Context;
use bibleqr_core::{Config, DeepLinkBuilder, QrEmitter, ReferenceRequest};
use tracing::debug;

use crate::ui::print_qr_code;
use crate::Cli;

/// Resolve the reference, write the QR image and report the link.
pub fn generate(cli: Cli) -> anyhow::Result<()> {
    let book = cli.book.context("a book name is required")?;
    let request = ReferenceRequest::new(book, cli.chapter)
        .verses(Some(cli.start_verse), cli.end_verse)
        .translation(cli.version);
    debug!(?request, "Generating QR code");

    let builder = DeepLinkBuilder::new(Config::with_locale(cli.locale));
    let uri = builder.build(&request)?;
    println!("{}", uri);

    QrEmitter::new().encode(&uri, &cli.output, cli.zoom)?;
    println!("Saved {}", cli.output.display());

    if cli.terminal {
        print_qr_code(&uri);
    }

    Ok(())
}
