//! # Job Files
//!
//! Every entry point reads one JSON job file:
//!
//! ```json
//! {
//!   "input": "https://example.com",
//!   "options": { "size": 8, "color": "#8b5cf6", "roundedCorners": true }
//! }
//! ```
//!
//! `options` may be omitted. Unknown option keys are ignored.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, Rgb};
use serde::Deserialize;

use crate::QrsmithError;
use crate::color::ColorValue;
use crate::symbol::EcLevel;

/// A parsed job file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobRequest {
    /// Payload text, image path, or image data URI depending on the entry point.
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub options: JobOptions,
}

/// Recognized option keys. All optional; defaults come from [`StyleDefaults`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOptions {
    #[serde(default)]
    pub version: Option<i16>,
    #[serde(default, rename = "error_correction")]
    pub error_correction: Option<String>,
    /// Pixels per module.
    #[serde(default)]
    pub size: Option<u32>,
    /// Margin width in modules.
    #[serde(default)]
    pub border: Option<u32>,
    #[serde(default)]
    pub color: Option<ColorValue>,
    #[serde(default)]
    pub background_color: Option<ColorValue>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub logo_size_ratio: Option<f32>,
    #[serde(default)]
    pub gradient: bool,
    #[serde(default)]
    pub rounded_corners: bool,
    #[serde(default)]
    pub corner_radius: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
}

impl JobRequest {
    /// Read and parse a job file.
    pub fn from_file(path: &Path) -> Result<Self, QrsmithError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, QrsmithError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The non-empty `input` field, or an error carrying `missing_message`.
    pub fn payload(&self, missing_message: &str) -> Result<&str, QrsmithError> {
        match self.input.as_deref() {
            Some(s) if !s.is_empty() => Ok(s),
            _ => Err(QrsmithError::InvalidJob(missing_message.to_string())),
        }
    }
}

impl JobOptions {
    pub fn logo_path(&self) -> Option<&Path> {
        self.logo_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(Path::new)
    }

    pub fn logo_size_ratio(&self) -> Result<f32, QrsmithError> {
        let ratio = self.logo_size_ratio.unwrap_or(DEFAULT_LOGO_RATIO);
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(ratio)
        } else {
            Err(QrsmithError::InvalidOption {
                option: "logoSizeRatio",
                message: format!("{} is outside (0, 1]", ratio),
            })
        }
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS)
    }

    /// Pixels per module, at least 1.
    pub fn box_size(&self, defaults: &StyleDefaults) -> Result<u32, QrsmithError> {
        match self.size.unwrap_or(defaults.box_size) {
            0 => Err(QrsmithError::InvalidOption {
                option: "size",
                message: "must be at least 1".to_string(),
            }),
            n => Ok(n),
        }
    }

    pub fn border(&self, defaults: &StyleDefaults) -> u32 {
        self.border.unwrap_or(defaults.border)
    }

    pub fn version(&self, defaults: &StyleDefaults) -> i16 {
        self.version.unwrap_or(defaults.version)
    }
}

pub const DEFAULT_LOGO_RATIO: f32 = 0.2;
pub const DEFAULT_CORNER_RADIUS: u32 = 10;

/// # Style Defaults
///
/// Default values an entry point falls back to when an option is absent.
///
/// | Set | Fill | Background | EC level |
/// |-----|------|------------|----------|
/// | STANDARD | black | white | M |
/// | BRAND | `#8b5cf6` | `#ec4899` | H |
///
/// The brand set is used by the advanced generator, where fill and
/// background are the start and end of the module gradient.
#[derive(Debug, Clone, Copy)]
pub struct StyleDefaults {
    pub version: i16,
    pub error_correction: EcLevel,
    pub box_size: u32,
    pub border: u32,
    pub fill: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl StyleDefaults {
    pub const STANDARD: Self = Self {
        version: 1,
        error_correction: EcLevel::M,
        box_size: 10,
        border: 4,
        fill: Rgb([0, 0, 0]),
        background: Rgb([255, 255, 255]),
    };

    pub const BRAND: Self = Self {
        version: 1,
        error_correction: EcLevel::H,
        box_size: 10,
        border: 4,
        fill: Rgb([0x8b, 0x5c, 0xf6]),
        background: Rgb([0xec, 0x48, 0x99]),
    };

    /// Same defaults with a different error-correction level.
    pub const fn with_error_correction(self, level: EcLevel) -> Self {
        Self {
            error_correction: level,
            ..self
        }
    }
}

/// Where an `input` string points.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource<'a> {
    /// An existing file on disk.
    File(&'a Path),
    /// Base64 payload of a `data:image/...;base64,` URI.
    DataUri(&'a str),
    /// Anything else: text to encode.
    Text(&'a str),
}

impl<'a> InputSource<'a> {
    pub fn classify(input: &'a str) -> Self {
        let path = Path::new(input);
        if path.exists() {
            InputSource::File(path)
        } else if let Some(data) = data_uri_payload(input) {
            InputSource::DataUri(data)
        } else {
            InputSource::Text(input)
        }
    }

    /// Whether this source is an image rather than text.
    pub fn is_image(&self) -> bool {
        !matches!(self, InputSource::Text(_))
    }

    /// Load the image behind a `File` or `DataUri` source.
    pub fn load_image(&self) -> Result<DynamicImage, QrsmithError> {
        match self {
            InputSource::File(path) => Ok(image::open(path)?),
            InputSource::DataUri(data) => {
                let bytes = STANDARD.decode(data).map_err(|e| {
                    QrsmithError::InvalidJob(format!("Invalid base64 image data: {}", e))
                })?;
                Ok(image::load_from_memory(&bytes)?)
            }
            InputSource::Text(text) => Err(QrsmithError::not_found("Image", Path::new(text))),
        }
    }
}

/// Extract the base64 part of `data:image/<type>;base64,<payload>`.
fn data_uri_payload(input: &str) -> Option<&str> {
    let rest = input.strip_prefix("data:image/")?;
    let (kind, payload) = rest.split_once(";base64,")?;
    let valid_kind = !kind.is_empty() && kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    (valid_kind && !payload.is_empty()).then_some(payload)
}
