//! # Logo Overlay
//!
//! Pastes a logo in the middle of a rendered code. The logo is shrunk to
//! fit a square of `ratio × min(width, height)` pixels, keeping its aspect
//! ratio, and is never enlarged.
//!
//! ```text
//! ┌───────────────┐
//! │ ▀▀ ▄ ▀▄▀ ▀▀   │
//! │ ▄▀ ┌───┐ ▀▄   │   offset = ((W - w) / 2, (H - h) / 2)
//! │ ▀▄ │ L │ ▄▀   │
//! │ ▄▀ └───┘ ▀▄   │
//! │ ▀▀ ▀▄▀ ▄ ▀▀   │
//! └───────────────┘
//! ```
//!
//! Overlaying covers modules, so callers pick a high error-correction level
//! when a logo is requested.

use std::path::Path;

use image::{DynamicImage, RgbaImage, imageops, imageops::FilterType};

use crate::QrsmithError;

/// Overlay the logo at `logo_path` onto a copy of `base`.
///
/// Fails with [`QrsmithError::NotFound`] if the logo does not exist.
pub fn overlay_logo(
    base: &RgbaImage,
    logo_path: &Path,
    ratio: f32,
) -> Result<RgbaImage, QrsmithError> {
    if !logo_path.exists() {
        return Err(QrsmithError::not_found("Logo", logo_path));
    }
    let logo = image::open(logo_path)?;
    Ok(overlay_logo_image(base, &logo, ratio))
}

/// Overlay an already-decoded logo onto a copy of `base`.
pub fn overlay_logo_image(base: &RgbaImage, logo: &DynamicImage, ratio: f32) -> RgbaImage {
    let mut canvas = base.clone();
    let (width, height) = canvas.dimensions();

    let max_side = (width.min(height) as f32 * ratio) as u32;
    if max_side == 0 {
        return canvas;
    }

    let logo = fit_within(logo, max_side);
    let x = ((width - logo.width()) / 2) as i64;
    let y = ((height - logo.height()) / 2) as i64;

    if logo.color().has_alpha() {
        imageops::overlay(&mut canvas, &logo.to_rgba8(), x, y);
    } else {
        imageops::replace(&mut canvas, &logo.to_rgba8(), x, y);
    }

    canvas
}

/// Shrink to fit a `max_side` square, keeping aspect ratio.
fn fit_within(logo: &DynamicImage, max_side: u32) -> DynamicImage {
    if logo.width() <= max_side && logo.height() <= max_side {
        logo.clone()
    } else {
        logo.resize(max_side, max_side, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn white(side: u32) -> RgbaImage {
        RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_missing_logo_is_not_found() {
        let err = overlay_logo(&white(100), Path::new("/nonexistent/logo.png"), 0.2).unwrap_err();
        assert!(matches!(err, QrsmithError::NotFound { kind: "Logo", .. }));
        assert!(err.to_string().contains("/nonexistent/logo.png"));
    }

    #[test]
    fn test_centered_and_resized() {
        let base = white(290);
        let logo = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 100, Rgb([255, 0, 0])));
        let out = overlay_logo_image(&base, &logo, 0.2);

        assert_eq!(out.dimensions(), base.dimensions());
        // 290 * 0.2 = 58 → logo 58x29, offset (116, 130)
        let center = out.get_pixel(145, 145);
        assert!(center[0] >= 250 && center[1] <= 5 && center[2] <= 5);
        assert_eq!(*out.get_pixel(145, 120), Rgba([255, 255, 255, 255]));
        assert_eq!(*out.get_pixel(100, 145), Rgba([255, 255, 255, 255]));
        // base image untouched
        assert_eq!(*base.get_pixel(145, 145), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_small_logo_not_enlarged() {
        let base = white(200);
        let logo = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 255])));
        let out = overlay_logo_image(&base, &logo, 0.2);
        assert_eq!(*out.get_pixel(98, 98), Rgba([0, 0, 255, 255]));
        assert_eq!(*out.get_pixel(97, 98), Rgba([255, 255, 255, 255]));
        assert_eq!(*out.get_pixel(102, 98), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_transparent_logo_keeps_background() {
        let base = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 0])));
        let out = overlay_logo_image(&base, &logo, 0.5);
        assert_eq!(*out.get_pixel(50, 50), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_opaque_logo_replaces() {
        let base = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let logo = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([0, 255, 0])));
        let out = overlay_logo_image(&base, &logo, 0.5);
        assert_eq!(*out.get_pixel(50, 50), Rgba([0, 255, 0, 255]));
        assert_eq!(out.dimensions(), (100, 100));
    }
}
