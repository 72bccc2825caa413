//! Encoding capability.
//!
//! [`Encoder`] is the seam between the workflow and the QR library. The
//! production implementation, [`QrCodeEncoder`], picks the smallest symbol
//! version that fits the data at the requested level and rasterizes the
//! result with a white quiet zone.
//!
//! Data is split into numeric, alphanumeric and byte segments only. The
//! `qrcode` crate's own optimizer also emits Kanji segments for byte pairs
//! that happen to be valid Shift JIS, which readers decode as Shift JIS and
//! not as the UTF-8 text that was typed.

use image::{GrayImage, Luma};
use qrcode::bits::Bits;
use qrcode::optimize::{Optimizer, Parser, Segment};
use qrcode::types::{EcLevel, Mode, QrError, Version};
use qrcode::{Color, QrCode};

use crate::error::EncodeError;
use crate::params::EncodeParams;

/// Pixel value of dark modules.
pub const DARK: Luma<u8> = Luma([0]);

/// Pixel value of light modules and the quiet zone.
pub const LIGHT: Luma<u8> = Luma([255]);

/// Turns text into a rasterized QR symbol.
pub trait Encoder {
    /// Encode `data` with the given parameters.
    fn encode(&self, data: &str, params: &EncodeParams) -> Result<GrayImage, EncodeError>;
}

/// [`Encoder`] backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeEncoder;

impl Encoder for QrCodeEncoder {
    fn encode(&self, data: &str, params: &EncodeParams) -> Result<GrayImage, EncodeError> {
        let code = encode_symbol(data.as_bytes(), params.level.into())?;
        tracing::debug!(
            version = ?code.version(),
            width = code.width(),
            "encoded QR symbol"
        );
        rasterize(&code, params)
    }
}

/// Highest normal symbol version.
const MAX_VERSION: i16 = 40;

/// Encode `data` into the smallest normal symbol that holds it at `level`.
///
/// # Errors
///
/// [`QrError::DataTooLong`] when even version 40 is too small.
pub fn encode_symbol(data: &[u8], level: EcLevel) -> Result<QrCode, QrError> {
    for number in 1..=MAX_VERSION {
        let version = Version::Normal(number);
        match build_bits(data, version, level) {
            Ok(bits) => return QrCode::with_bits(bits, level),
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(QrError::DataTooLong)
}

/// Segments for `data` at `version`, never using Kanji mode.
pub fn segments(data: &[u8], version: Version) -> Vec<Segment> {
    let parsed = Parser::new(data).map(|segment| match segment.mode {
        Mode::Kanji => Segment {
            mode: Mode::Byte,
            ..segment
        },
        _ => segment,
    });
    Optimizer::new(parsed, version).collect()
}

fn build_bits(data: &[u8], version: Version, level: EcLevel) -> Result<Bits, QrError> {
    let mut bits = Bits::new(version);
    for segment in segments(data, version) {
        let chunk = &data[segment.begin..segment.end];
        match segment.mode {
            Mode::Numeric => bits.push_numeric_data(chunk)?,
            Mode::Alphanumeric => bits.push_alphanumeric_data(chunk)?,
            Mode::Byte | Mode::Kanji => bits.push_byte_data(chunk)?,
        }
    }
    bits.push_terminator(level)?;
    Ok(bits)
}

/// Render a symbol with `params.border` light modules on every side, each
/// module `params.module_size` pixels square.
pub fn rasterize(code: &QrCode, params: &EncodeParams) -> Result<GrayImage, EncodeError> {
    if params.module_size == 0 {
        return Err(EncodeError::Raster(
            "module size must be at least one pixel".to_string(),
        ));
    }

    let modules = code.to_colors();
    let width = code.width() as u32;
    let side = width
        .checked_add(params.border.saturating_mul(2))
        .and_then(|w| w.checked_mul(params.module_size))
        .ok_or_else(|| EncodeError::Raster("image dimensions overflow".to_string()))?;

    let border = params.border;
    let module_size = params.module_size;
    Ok(GrayImage::from_fn(side, side, |x, y| {
        let mx = x / module_size;
        let my = y / module_size;
        if mx < border || my < border || mx >= border + width || my >= border + width {
            return LIGHT;
        }
        let index = ((my - border) * width + (mx - border)) as usize;
        match modules[index] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    }))
}
