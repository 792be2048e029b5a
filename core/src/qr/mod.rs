//! QR code rendering for deep links
//!
//! Symbol construction is delegated to the `qrcode` crate; this module
//! only turns the module grid into image files or terminal text.

mod emitter;
mod terminal;

pub use emitter::{ImageFormat, QrEmitter};
pub use terminal::render_terminal;
