//! Table listings.

use bibleqr_core::reference::{sorted_translations, BOOKS};

/// Print the supported book names and/or version abbreviations.
pub fn list_tables(books: bool, versions: bool) {
    if books {
        for (name, code) in BOOKS {
            println!("{:<16} {}", name, code);
        }
    }
    if books && versions {
        println!();
    }
    if versions {
        for (abbreviation, id) in sorted_translations() {
            println!("{:<10} {}", abbreviation, id);
        }
    }
}
