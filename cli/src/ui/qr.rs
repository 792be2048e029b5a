//! QR code display.

use bibleqr_core::qr::render_terminal;

/// Print a QR code to the terminal.
///
/// Failure to draw is reported but not fatal; the image file has
/// already been written by the time this runs.
pub fn print_qr_code(data: &str) {
    match render_terminal(data) {
        Ok(text) => {
            println!();
            print!("{}", text);
        }
        Err(e) => eprintln!("Failed to generate QR code: {}", e),
    }
}
