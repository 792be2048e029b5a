//! bibleqr CLI - QR codes that open a Bible app at a passage.

mod commands;
mod ui;

use std::path::PathBuf;

use bibleqr_core::constants::{DEFAULT_LOCALE, DEFAULT_OUTPUT, DEFAULT_SCALE, DEFAULT_TRANSLATION};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bibleqr")]
#[command(
    about = "Generates a QR code that opens a bible app to a specific location",
    long_about = None
)]
pub struct Cli {
    /// Desired book (e.g. "Genesis")
    #[arg(required_unless_present_any = ["list_books", "list_versions"])]
    pub book: Option<String>,

    /// Output filename (.png, or .svg for vector output)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Desired chapter
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub chapter: u32,

    /// Starting verse
    #[arg(
        short = 's',
        long = "start_verse",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub start_verse: u32,

    /// Ending verse
    #[arg(short = 'e', long = "end_verse", value_parser = clap::value_parser!(u32).range(1..))]
    pub end_verse: Option<u32>,

    /// Bible version abbreviation (e.g. "KJV") or numeric version id
    #[arg(short = 'v', long = "version", default_value = DEFAULT_TRANSLATION)]
    pub version: String,

    /// Scale factor to apply to the QR code
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SCALE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub zoom: u32,

    /// Locale segment of the bible.com link
    #[arg(long, default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Also draw the QR code in the terminal
    #[arg(long)]
    pub terminal: bool,

    /// List supported book names and exit
    #[arg(long)]
    pub list_books: bool,

    /// List supported version abbreviations and exit
    #[arg(long)]
    pub list_versions: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "bibleqr=debug" } else { "bibleqr=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if cli.list_books || cli.list_versions {
        commands::list_tables(cli.list_books, cli.list_versions);
        return Ok(());
    }

    commands::generate(cli)
}
