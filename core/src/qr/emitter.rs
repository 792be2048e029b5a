//! Image file output

use std::io::Write;
use std::path::Path;

use image::{GrayImage, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{Error, Result};

/// Modules of light border the renderer adds around the symbol
const QUIET_ZONE: u32 = 4;

/// Largest image, in pixels, the emitter will allocate
const MAX_IMAGE_PIXELS: u64 = 64 * 1024 * 1024;

/// Output file format, picked from the path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.svg` (any case) selects SVG; everything else is written as PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// Writes content as a QR code image
#[derive(Debug, Clone, Copy)]
pub struct QrEmitter {
    ec_level: EcLevel,
    quiet_zone: bool,
}

impl Default for QrEmitter {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::H,
            quiet_zone: true,
        }
    }
}

impl QrEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ec_level(mut self, ec_level: EcLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    pub fn with_quiet_zone(mut self, quiet_zone: bool) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Build the QR symbol for `content`.
    ///
    /// Fails when the content does not fit the largest symbol at the
    /// configured error-correction level.
    pub fn symbol(&self, content: &str) -> Result<QrCode> {
        QrCode::with_error_correction_level(content.as_bytes(), self.ec_level).map_err(|e| {
            Error::Encoding(format!(
                "cannot encode {} bytes at level {:?}: {}",
                content.len(),
                self.ec_level,
                e
            ))
        })
    }

    /// Render `content` as an image at `output`, `scale` pixels per module.
    ///
    /// The file is written to a temporary sibling and renamed into place,
    /// so a failed call leaves no partial file behind.
    pub fn encode(&self, content: &str, output: &Path, scale: u32) -> Result<()> {
        let scale = scale.max(1);
        let code = self.symbol(content)?;
        let format = ImageFormat::from_path(output);
        let side = self.image_side(&code, scale)?;
        debug!(
            path = %output.display(),
            ?format,
            modules = code.width(),
            scale,
            side,
            "Encoding QR code"
        );

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_error(output, e))?;

        match format {
            ImageFormat::Png => {
                self.to_image(&code, scale)?
                    .write_to(&mut tmp, image::ImageFormat::Png)
                    .map_err(|e| write_error(output, e))?;
            }
            ImageFormat::Svg => {
                let document = code
                    .render::<svg::Color>()
                    .quiet_zone(self.quiet_zone)
                    .module_dimensions(scale, scale)
                    .build();
                tmp.write_all(document.as_bytes())
                    .map_err(|e| write_error(output, e))?;
            }
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(|e| write_error(output, e))?;
        }

        tmp.persist(output).map_err(|e| write_error(output, e.error))?;
        info!(path = %output.display(), "Saved QR code");
        Ok(())
    }

    /// Greyscale raster of `code`, dark modules black on white.
    ///
    /// Fails instead of allocating when the scaled image would exceed
    /// the pixel limit.
    pub fn to_image(&self, code: &QrCode, scale: u32) -> Result<GrayImage> {
        let scale = scale.max(1);
        self.image_side(code, scale)?;
        Ok(code
            .render::<Luma<u8>>()
            .quiet_zone(self.quiet_zone)
            .module_dimensions(scale, scale)
            .build())
    }

    /// Side length in pixels of the rendered image.
    fn image_side(&self, code: &QrCode, scale: u32) -> Result<u32> {
        let border = if self.quiet_zone { QUIET_ZONE } else { 0 };
        let side = u32::try_from(code.width())
            .ok()
            .and_then(|modules| modules.checked_add(2 * border))
            .and_then(|modules| modules.checked_mul(scale.max(1)))
            .filter(|side| u64::from(*side) * u64::from(*side) <= MAX_IMAGE_PIXELS)
            .ok_or_else(|| {
                Error::Encoding(format!(
                    "image too large: {} modules at scale {} exceeds {} pixels",
                    code.width(),
                    scale,
                    MAX_IMAGE_PIXELS
                ))
            })?;
        Ok(side)
    }
}

fn write_error(output: &Path, e: impl std::fmt::Display) -> Error {
    Error::Encoding(format!("failed to write {}: {}", output.display(), e))
}
