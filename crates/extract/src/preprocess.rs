use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("could not read image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("could not encode cleaned image: {0}")]
    Encode(String),
}

/// Longest edge handed to the recognition engine. Phone photos are routinely
/// larger and only slow recognition down.
const MAX_EDGE: u32 = 2600;

/// Decode photographed or scanned price-sheet bytes and return normalized
/// PNG bytes: capped dimensions, grayscale, full-range contrast.
pub fn clean_for_ocr(data: &[u8]) -> Result<Vec<u8>, PreprocessError> {
    let img = image::load_from_memory(data)?;
    let gray = stretch_contrast(shrink(img).to_luma8());

    let mut out = Vec::new();
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| PreprocessError::Encode(e.to_string()))?;
    Ok(out)
}

fn shrink(img: DynamicImage) -> DynamicImage {
    if img.width().max(img.height()) > MAX_EDGE {
        img.resize(MAX_EDGE, MAX_EDGE, image::imageops::FilterType::Lanczos3)
    } else {
        img
    }
}

/// Remap pixel values so the darkest becomes 0 and the brightest 255.
/// Uniform images are returned untouched.
fn stretch_contrast(gray: GrayImage) -> GrayImage {
    let (lo, hi) = gray
        .pixels()
        .fold((255u8, 0u8), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));

    if hi <= lo {
        return gray;
    }

    let range = (hi - lo) as u32;
    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        let v = (gray.get_pixel(x, y)[0] - lo) as u32 * 255 / range;
        Luma([v as u8])
    })
}
