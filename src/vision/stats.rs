//! Image decoding and per-channel statistics.

use image::RgbImage;
use thiserror::Error;

// ---------------------------------------------------------------------------
// VisionError
// ---------------------------------------------------------------------------

/// Errors raised while turning uploaded bytes into channel statistics.
#[derive(Debug, Clone, Error)]
pub enum VisionError {
    /// The bytes are not an image format the decoder understands.
    #[error("could not decode image: {0}")]
    Decode(String),

    /// The image has no pixels, so a channel mean is undefined.
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

impl From<image::ImageError> for VisionError {
    fn from(e: image::ImageError) -> Self {
        VisionError::Decode(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode an uploaded photo into 8-bit RGB.
///
/// The format is sniffed from the leading bytes.  Alpha is discarded and
/// grayscale is expanded so every photo ends up with exactly three channels.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, VisionError> {
    let img = image::load_from_memory(bytes)?;
    log::debug!(
        "vision: decoded {}x{} image ({:?})",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgb8())
}

// ---------------------------------------------------------------------------
// ChannelMeans
// ---------------------------------------------------------------------------

/// Arithmetic mean of each color channel over every pixel of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMeans {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelMeans {
    /// Build directly from three channel means.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Compute the channel means of `image`.
    ///
    /// Returns [`VisionError::EmptyImage`] for a zero-width or zero-height
    /// image instead of dividing by zero.
    pub fn of(image: &RgbImage) -> Result<Self, VisionError> {
        let (width, height) = image.dimensions();
        let count = u64::from(width) * u64::from(height);
        if count == 0 {
            return Err(VisionError::EmptyImage { width, height });
        }

        // u8 sums fit in u64 for any image the decoder can hold.
        let mut sums = [0u64; 3];
        for px in image.pixels() {
            sums[0] += u64::from(px[0]);
            sums[1] += u64::from(px[1]);
            sums[2] += u64::from(px[2]);
        }

        let n = count as f64;
        Ok(Self {
            red: sums[0] as f64 / n,
            green: sums[1] as f64 / n,
            blue: sums[2] as f64 / n,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
        buf.into_inner()
    }

    #[test]
    fn means_of_solid_image_equal_the_color() {
        let img = RgbImage::from_pixel(3, 5, Rgb([10, 20, 30]));
        let means = ChannelMeans::of(&img).unwrap();
        assert_eq!(means, ChannelMeans::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn means_average_over_all_pixels() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 100, 255]));
        img.put_pixel(1, 0, Rgb([255, 0, 1]));

        let means = ChannelMeans::of(&img).unwrap();
        assert!((means.red - 127.5).abs() < 1e-9);
        assert!((means.green - 50.0).abs() < 1e-9);
        assert!((means.blue - 128.0).abs() < 1e-9);
    }

    #[test]
    fn zero_size_image_is_rejected() {
        let img = RgbImage::new(0, 0);
        let err = ChannelMeans::of(&img).unwrap_err();
        assert!(matches!(err, VisionError::EmptyImage { width: 0, height: 0 }));
    }

    #[test]
    fn zero_height_image_is_rejected() {
        let img = RgbImage::new(7, 0);
        assert!(matches!(
            ChannelMeans::of(&img),
            Err(VisionError::EmptyImage { width: 7, height: 0 })
        ));
    }

    #[test]
    fn decode_png_bytes() {
        let bytes = encode_png(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            4,
            2,
            Rgb([1, 2, 3]),
        )));
        let img = decode_rgb(&bytes).unwrap();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(3, 1), &Rgb([1, 2, 3]));
    }

    #[test]
    fn decode_drops_alpha() {
        let bytes = encode_png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2,
            2,
            Rgba([50, 60, 70, 0]),
        )));
        let img = decode_rgb(&bytes).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([50, 60, 70]));
    }

    #[test]
    fn decode_garbage_is_an_error() {
        let err = decode_rgb(b"definitely not a photo").unwrap_err();
        assert!(matches!(err, VisionError::Decode(_)));
    }
}
