//! # QR Decoding
//!
//! Finds and reads every QR symbol in an image using `rqrr`, and defines
//! the JSON envelope the decoder entry point writes.
//!
//! ## Envelope
//!
//! ```json
//! {
//!   "success": true,
//!   "results": [
//!     {
//!       "data": "https://example.com",
//!       "type": "QRCODE",
//!       "rect": { "left": 40, "top": 40, "width": 250, "height": 250 }
//!     }
//!   ],
//!   "count": 1
//! }
//! ```
//!
//! On failure: `{ "success": false, "error": "No QR codes found in the image" }`.

use std::path::Path;

use image::DynamicImage;
use rqrr::PreparedImage;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::QrsmithError;
use crate::job::InputSource;
use crate::output::flatten;

/// Symbol type reported for QR codes.
pub const QR_SYMBOL_TYPE: &str = "QRCODE";

/// Axis-aligned bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Smallest box containing all `points`.
    fn bounding(points: &[rqrr::Point]) -> Self {
        let left = points.iter().map(|p| p.x).min().unwrap_or(0);
        let top = points.iter().map(|p| p.y).min().unwrap_or(0);
        let right = points.iter().map(|p| p.x).max().unwrap_or(0);
        let bottom = points.iter().map(|p| p.y).max().unwrap_or(0);
        Rect {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// One decoded symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedSymbol {
    pub data: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rect: Rect,
}

/// The decoder's output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<DecodedSymbol>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeEnvelope {
    pub fn success(results: Vec<DecodedSymbol>) -> Self {
        Self {
            success: true,
            count: Some(results.len()),
            results: Some(results),
            error: None,
        }
    }

    pub fn failure(error: &QrsmithError) -> Self {
        Self {
            success: false,
            results: None,
            count: None,
            error: Some(error.to_string()),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, QrsmithError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decode every QR symbol in `img`.
///
/// Transparent areas are treated as white. Grids that fail error
/// correction are skipped; [`QrsmithError::NoCodesFound`] is returned only
/// when no grid decodes.
pub fn decode_image(img: &DynamicImage) -> Result<Vec<DecodedSymbol>, QrsmithError> {
    let gray = flatten(&img.to_rgba8()).to_luma8();
    let (width, height) = gray.dimensions();

    let mut prepared = PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| gray.get_pixel(x as u32, y as u32)[0],
    );

    let mut results = Vec::new();
    for grid in prepared.detect_grids() {
        let mut bytes = Vec::new();
        if let Err(e) = grid.decode_to(&mut bytes) {
            warn!(error = %e, bounds = ?grid.bounds, "skipping undecodable grid");
            continue;
        }
        let data = String::from_utf8(bytes)
            .map_err(|e| QrsmithError::Decode(format!("payload is not valid UTF-8: {}", e)))?;

        results.push(DecodedSymbol {
            data,
            kind: QR_SYMBOL_TYPE.to_string(),
            rect: Rect::bounding(&grid.bounds),
        });
    }

    if results.is_empty() {
        return Err(QrsmithError::NoCodesFound);
    }
    Ok(results)
}

/// Decode from a job `input`: an existing image path or an image data URI.
pub fn decode_input(input: &str) -> Result<Vec<DecodedSymbol>, QrsmithError> {
    match InputSource::classify(input) {
        InputSource::Text(path) => Err(QrsmithError::not_found("Image", Path::new(path))),
        source => decode_image(&source.load_image()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bounding_rect() {
        let points = [
            rqrr::Point { x: 40, y: 42 },
            rqrr::Point { x: 250, y: 40 },
            rqrr::Point { x: 251, y: 249 },
            rqrr::Point { x: 41, y: 250 },
        ];
        assert_eq!(
            Rect::bounding(&points),
            Rect {
                left: 40,
                top: 40,
                width: 211,
                height: 210
            }
        );
    }

    #[test]
    fn test_blank_image_has_no_codes() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([255, 255, 255])));
        assert!(matches!(decode_image(&img), Err(QrsmithError::NoCodesFound)));
    }

    #[test]
    fn test_missing_path() {
        let err = decode_input("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, QrsmithError::NotFound { kind: "Image", .. }));
    }

    #[test]
    fn test_envelope_shapes() {
        let ok = DecodeEnvelope::success(vec![DecodedSymbol {
            data: "hi".into(),
            kind: QR_SYMBOL_TYPE.into(),
            rect: Rect {
                left: 1,
                top: 2,
                width: 3,
                height: 4,
            },
        }]);
        let value: serde_json::Value = serde_json::from_str(&ok.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "results": [{
                    "data": "hi",
                    "type": "QRCODE",
                    "rect": {"left": 1, "top": 2, "width": 3, "height": 4}
                }],
                "count": 1
            })
        );

        let err = DecodeEnvelope::failure(&QrsmithError::NoCodesFound);
        let value: serde_json::Value = serde_json::from_str(&err.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "error": "No QR codes found in the image"})
        );
    }

    #[test]
    fn test_envelope_is_indented() {
        let json = DecodeEnvelope::failure(&QrsmithError::NoCodesFound)
            .to_json()
            .unwrap();
        assert!(json.contains("\n  \"success\": false"));
    }
}
