//! UI utilities for terminal output.

mod qr;

pub use qr::print_qr_code;
