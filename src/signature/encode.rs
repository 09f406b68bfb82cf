use std::io::Cursor;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

use crate::foundation::core::Resolution;
use crate::foundation::error::{ClaimError, ClaimResult};

/// Prefix of every exported signature.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A committed signature raster, encoded as a PNG data URI.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignatureImage {
    /// `data:image/png;base64,...`
    pub data_uri: String,
    /// Raster width in pixels at the time of export.
    pub width: u32,
    /// Raster height in pixels at the time of export.
    pub height: u32,
}

impl SignatureImage {
    pub fn as_str(&self) -> &str {
        &self.data_uri
    }

    /// Decoded PNG bytes.
    pub fn png_bytes(&self) -> ClaimResult<Vec<u8>> {
        let b64 = self
            .data_uri
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .ok_or_else(|| ClaimError::encode("signature is not a PNG data URI"))?;
        B64.decode(b64.as_bytes())
            .map_err(|e| ClaimError::encode(format!("signature base64 decode failed: {e}")))
    }

    /// Decode back into straight RGBA8.
    pub fn to_rgba8(&self) -> ClaimResult<image::RgbaImage> {
        decode_data_uri(&self.data_uri)
    }
}

/// Encode a premultiplied RGBA8 raster as a PNG data URI.
///
/// PNG stores straight alpha, so pixels are un-premultiplied first.
#[tracing::instrument(skip(premul_rgba8))]
pub fn encode_png_data_uri(premul_rgba8: &[u8], res: Resolution) -> ClaimResult<SignatureImage> {
    if premul_rgba8.len() != res.byte_len() {
        return Err(ClaimError::encode(format!(
            "raster size mismatch: {} bytes for {}x{}",
            premul_rgba8.len(),
            res.width,
            res.height
        )));
    }

    let mut straight = premul_rgba8.to_vec();
    unpremultiply_rgba8_in_place(&mut straight);
    let img = image::RgbaImage::from_raw(res.width, res.height, straight)
        .ok_or_else(|| ClaimError::encode("raster buffer too small"))?;

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .context("encode signature png")?;

    let mut data_uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len() * 4 / 3 + 4);
    data_uri.push_str(PNG_DATA_URI_PREFIX);
    B64.encode_string(&png, &mut data_uri);

    Ok(SignatureImage {
        data_uri,
        width: res.width,
        height: res.height,
    })
}

/// Decode a `data:image/png;base64,...` URI into straight RGBA8.
pub fn decode_data_uri(data_uri: &str) -> ClaimResult<image::RgbaImage> {
    let b64 = data_uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or_else(|| ClaimError::encode("expected a data:image/png;base64 URI"))?;
    let bytes = B64
        .decode(b64.as_bytes())
        .map_err(|e| ClaimError::encode(format!("signature base64 decode failed: {e}")))?;
    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .context("decode signature png")?;
    Ok(img.to_rgba8())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signature/encode.rs"]
mod tests;
