//! # Output Writing
//!
//! Maps the `format` option to a container and writes the result file.
//!
//! | `format` | Container | Notes |
//! |----------|-----------|-------|
//! | `png` (default) | PNG | RGBA kept as is |
//! | `jpg` / `jpeg` | JPEG | Flattened onto white first |
//! | `svg` | SVG | Generator only, re-encoded as vector paths |
//! | anything else | by extension | Whatever the `image` crate recognizes |

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops};
use qrcode::render::svg;

use crate::QrsmithError;
use crate::symbol::{EcLevel, encode_fit};

/// Pixels per module in SVG output.
const SVG_MODULE_SIZE: u32 = 10;

/// Output container selected by the `format` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Svg,
    Raster(ImageFormat),
}

impl OutputFormat {
    /// Parse a `format` option value (case-insensitive). `None` means PNG.
    pub fn parse(format: Option<&str>) -> Result<Self, QrsmithError> {
        let Some(format) = format else {
            return Ok(OutputFormat::Png);
        };
        match format.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "svg" => Ok(OutputFormat::Svg),
            other => ImageFormat::from_extension(other)
                .map(OutputFormat::Raster)
                .ok_or_else(|| QrsmithError::UnsupportedFormat(format.to_string())),
        }
    }

    fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Jpeg => Some(ImageFormat::Jpeg),
            OutputFormat::Svg => None,
            OutputFormat::Raster(f) => Some(f),
        }
    }
}

/// Composite onto opaque white, dropping the alpha channel.
pub fn flatten(img: &RgbaImage) -> DynamicImage {
    let mut background = RgbaImage::from_pixel(img.width(), img.height(), Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut background, img, 0, 0);
    DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(background).to_rgb8())
}

/// Write a raster image in `format`.
pub fn save_raster(img: &RgbaImage, path: &Path, format: OutputFormat) -> Result<(), QrsmithError> {
    let image_format = format
        .image_format()
        .ok_or_else(|| QrsmithError::UnsupportedFormat("svg".to_string()))?;

    let encoded = if format == OutputFormat::Jpeg {
        flatten(img)
    } else {
        DynamicImage::ImageRgba8(img.clone())
    };

    encoded.save_with_format(path, image_format)?;
    Ok(())
}

/// Encode `payload` with default settings and render it as SVG markup.
///
/// No styling applies: black modules, white background, standard quiet zone.
pub fn svg_markup(payload: &str) -> Result<String, QrsmithError> {
    let code = encode_fit(payload, 1, EcLevel::M)?;
    Ok(code
        .render::<svg::Color>()
        .module_dimensions(SVG_MODULE_SIZE, SVG_MODULE_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Write `payload` as an SVG file.
pub fn save_svg(payload: &str, path: &Path) -> Result<(), QrsmithError> {
    fs::write(path, svg_markup(payload)?)?;
    Ok(())
}
