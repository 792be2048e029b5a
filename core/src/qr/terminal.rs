//! Terminal rendering

use qrcode::{Color, QrCode};

use super::QrEmitter;
use crate::Result;

/// Modules of blank border printed around the symbol
const QUIET_ZONE: usize = 2;

/// Render `content` as a QR code drawn with Unicode block characters.
///
/// Each character covers two vertically stacked modules, so the
/// output is roughly square in a typical terminal font. The symbol is
/// the one [`QrEmitter::encode`] writes to disk.
pub fn render_terminal(content: &str) -> Result<String> {
    let code = QrEmitter::new().symbol(content)?;
    Ok(render_code(&code))
}

fn render_code(code: &QrCode) -> String {
    let colors = code.to_colors();
    let width = code.width();
    let padded = width + 2 * QUIET_ZONE;

    let dark = |x: usize, y: usize| -> bool {
        if x < QUIET_ZONE || y < QUIET_ZONE {
            return false;
        }
        let (x, y) = (x - QUIET_ZONE, y - QUIET_ZONE);
        x < width && y < width && colors[y * width + x] == Color::Dark
    };

    let mut out = String::new();
    for y in (0..padded).step_by(2) {
        for x in 0..padded {
            // ▀ = top dark, ▄ = bottom dark, █ = both
            let ch = match (dark(x, y), dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let code = QrCode::new(b"https://www.bible.com/en-GB/bible/1/GEN.1.1").unwrap();
        let padded = code.width() + 2 * QUIET_ZONE;

        let text = render_code(&code);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), padded.div_ceil(2));
        assert!(lines.iter().all(|l| l.chars().count() == padded));
        // First row is quiet zone
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_matches_saved_symbol() {
        let uri = "https://www.bible.com/en-GB/bible/111/PSA.23.1-6";
        let saved = QrEmitter::new().symbol(uri).unwrap();

        assert_eq!(render_terminal(uri).unwrap(), render_code(&saved));
        assert_eq!(saved.error_correction_level(), qrcode::EcLevel::H);
    }

    #[test]
    fn test_render_terminal_rejects_oversized() {
        assert!(render_terminal(&"x".repeat(8000)).is_err());
    }
}
