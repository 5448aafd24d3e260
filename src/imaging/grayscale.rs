//! Photograph preprocessing and edge detection.
//!
//! Image bytes (PNG/JPEG/BMP/GIF) are decoded, resized, converted to a single
//! luma channel and normalized to [0, 1] so the result can be fed through the
//! same correlation code as the tic-tac-toe board.

use crate::error::Result;
use crate::kernels;
use crate::math::matrix::Matrix;
use crate::ops::correlate::correlate2d;
use crate::pipeline::run::FeatureMap;

/// Decodes image bytes, resizes to exactly `width × height` (bilinear),
/// converts to grayscale and normalizes pixels to [0, 1].
///
/// Returns a `height × width` matrix.
pub fn image_bytes_to_grayscale(bytes: &[u8], width: u32, height: u32) -> Result<Matrix> {
    let img = image::load_from_memory(bytes)?;
    let resized = img.resize_exact(width, height, image::imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let data = rgb
        .rows()
        .map(|row| row.map(|p| luma_601(p.0) / 255.0).collect())
        .collect();
    Ok(Matrix::from_data(data))
}

/// ITU-R 601-2 luma, rounded to a whole 8-bit level.
fn luma_601([r, g, b]: [u8; 3]) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64).round()
}

/// Vertical and horizontal Sobel responses of a grayscale image.
pub fn sobel_edges(img: &Matrix) -> Result<Vec<FeatureMap>> {
    kernels::sobel_kernels()
        .into_iter()
        .map(|(name, kernel)| Ok(FeatureMap::new(name, correlate2d(img, &kernel)?)))
        .collect()
}
