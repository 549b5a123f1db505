use std::path::{Path, PathBuf};

use crate::foundation::error::{BubbleError, BubbleResult};

/// JPEG fallback quality for converted images.
pub const JPEG_QUALITY: u8 = 82;

/// Output pair produced by one image conversion.
#[derive(Clone, Debug)]
#[allow(missing_docs)]
pub struct ConvertedImage {
    pub webp: PathBuf,
    pub jpg: PathBuf,
}

/// Decode `input` with the `image` crate and write both web variants next to
/// it: `<stem>.webp` and a `<stem>.jpg` fallback.
///
/// Used for the best-effort/unknown class; HEIC/HEIF goes through ffmpeg
/// instead since the `image` crate has no HEIF decoder.
pub fn convert_image(input: &Path, out_base: &Path) -> BubbleResult<ConvertedImage> {
    let img = image::open(input).map_err(|e| {
        BubbleError::media(format!("failed to decode '{}': {e}", input.display()))
    })?;

    let webp = out_base.with_extension("webp");
    let jpg = out_base.with_extension("jpg");

    let webp_file = std::fs::File::create(&webp).map_err(|e| {
        BubbleError::media(format!("failed to create '{}': {e}", webp.display()))
    })?;
    let encoder = image::codecs::webp::WebPEncoder::new_lossless(std::io::BufWriter::new(webp_file));
    img.to_rgba8().write_with_encoder(encoder).map_err(|e| {
        BubbleError::media(format!("webp encode failed for '{}': {e}", input.display()))
    })?;

    let jpg_file = std::fs::File::create(&jpg).map_err(|e| {
        BubbleError::media(format!("failed to create '{}': {e}", jpg.display()))
    })?;
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
        std::io::BufWriter::new(jpg_file),
        JPEG_QUALITY,
    );
    img.to_rgb8().write_with_encoder(encoder).map_err(|e| {
        BubbleError::media(format!("jpeg encode failed for '{}': {e}", input.display()))
    })?;

    Ok(ConvertedImage { webp, jpg })
}

#[cfg(test)]
#[path = "../../tests/unit/convert/encode.rs"]
mod tests;
