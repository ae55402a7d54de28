//! Resize processor - produces JPEG variants at fixed target widths.
//!
//! Width is set exactly to the target; height scales proportionally. CPU
//! work runs on the blocking thread pool so the async runtime is not held
//! up while two variants are generated concurrently.

use std::io::Cursor;
use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use image::imageops::FilterType;
use image::{GenericImageView, ImageOutputFormat};
use tracing::debug;

/// JPEG encoding quality for generated thumbnails.
pub const JPEG_QUALITY: u8 = 80;

/// Resize processor for a fixed JPEG quality.
#[derive(Debug)]
pub struct ThumbnailProcessor {
    quality: u8,
}

impl Default for ThumbnailProcessor {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

impl ThumbnailProcessor {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    /// Generates a JPEG resize at exactly `target_width` (blocking).
    ///
    /// Call `generate_async` from async code.
    pub fn generate(&self, original_data: &[u8], target_width: u32) -> anyhow::Result<Bytes> {
        let img = image::load_from_memory(original_data).context("failed to decode image")?;

        let (orig_w, orig_h) = img.dimensions();
        let target_height = scaled_height(orig_w, orig_h, target_width);
        debug!(
            original_width = orig_w,
            original_height = orig_h,
            target_width,
            target_height,
            "resizing image"
        );

        let resized = img.resize_exact(target_width, target_height, FilterType::Triangle);

        let mut buf = Vec::new();
        resized
            .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(self.quality))
            .context("failed to encode JPEG")?;

        Ok(Bytes::from(buf))
    }

    /// Generates a resize on the blocking thread pool.
    pub async fn generate_async(
        self: Arc<Self>,
        original_data: Bytes,
        target_width: u32,
    ) -> anyhow::Result<Bytes> {
        let processor = self.clone();

        tokio::task::spawn_blocking(move || processor.generate(&original_data, target_width))
            .await
            .context("resize task panicked")?
    }
}

/// Height that keeps the aspect ratio at the given target width, rounded,
/// never below one pixel.
fn scaled_height(orig_w: u32, orig_h: u32, target_width: u32) -> u32 {
    if orig_w == 0 {
        return 1;
    }
    let ratio = target_width as f32 / orig_w as f32;
    (((orig_h as f32) * ratio).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn sample_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 40, 200]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(90))
            .unwrap();
        buf
    }

    #[test]
    fn scaled_height_keeps_aspect_ratio() {
        assert_eq!(scaled_height(800, 600, 200), 150);
        assert_eq!(scaled_height(800, 600, 400), 300);
        assert_eq!(scaled_height(1000, 333, 200), 67);
    }

    #[test]
    fn scaled_height_never_hits_zero() {
        assert_eq!(scaled_height(4000, 1, 200), 1);
        assert_eq!(scaled_height(0, 100, 200), 1);
    }

    #[test]
    fn resize_sets_width_exactly() {
        let processor = ThumbnailProcessor::default();
        let data = sample_jpeg(800, 600);

        let out = processor.generate(&data, 200).unwrap();
        let thumb = image::load_from_memory(&out).unwrap();
        assert_eq!(thumb.dimensions(), (200, 150));
    }

    #[test]
    fn smaller_originals_are_upscaled_to_target() {
        let processor = ThumbnailProcessor::default();
        let data = sample_jpeg(100, 50);

        let out = processor.generate(&data, 400).unwrap();
        let thumb = image::load_from_memory(&out).unwrap();
        assert_eq!(thumb.dimensions(), (400, 200));
    }

    #[test]
    fn output_is_jpeg() {
        let processor = ThumbnailProcessor::default();
        let out = processor.generate(&sample_jpeg(400, 400), 200).unwrap();
        assert_eq!(&out[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn garbage_input_is_rejected() {
        let processor = ThumbnailProcessor::default();
        assert!(processor.generate(b"not an image", 200).is_err());
    }

    #[tokio::test]
    async fn async_generation_matches_blocking() {
        let processor = Arc::new(ThumbnailProcessor::default());
        let data = Bytes::from(sample_jpeg(800, 600));

        let out = processor.generate_async(data, 200).await.unwrap();
        let thumb = image::load_from_memory(&out).unwrap();
        assert_eq!(thumb.dimensions(), (200, 150));
    }
}
