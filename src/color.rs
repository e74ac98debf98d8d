//! # Color Parsing
//!
//! Job files describe colors loosely: a CSS-style name (`"navy"`), a hex
//! string (`"#8b5cf6"`, `"#abc"`, or the same without `#`), or a list of
//! channel values (`[139, 92, 246]`). This module classifies the raw JSON
//! value into a [`ColorSpec`] first and only then resolves it to an
//! [`Rgb<u8>`], so nothing downstream ever inspects JSON types.
//!
//! ```
//! use qrsmith::color::{ColorSpec, ColorValue};
//!
//! let spec = ColorSpec::from(&ColorValue::Text("#ff8000".into()));
//! assert_eq!(spec.resolve("color").unwrap().0, [255, 128, 0]);
//! ```

use image::Rgb;
use serde::Deserialize;

use crate::QrsmithError;

/// A color exactly as it appears in the job file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Text(String),
    Channels(Vec<i64>),
}

/// A classified color, ready to be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// `#rgb` / `#rrggbb`
    Hex(String),
    /// A color name, or a bare hex string without `#`
    Named(String),
    /// Numeric channel list (RGB or RGBA)
    Channels(Vec<i64>),
}

impl From<&ColorValue> for ColorSpec {
    fn from(value: &ColorValue) -> Self {
        match value {
            ColorValue::Text(s) if s.trim_start().starts_with('#') => {
                ColorSpec::Hex(s.trim().to_string())
            }
            ColorValue::Text(s) => ColorSpec::Named(s.trim().to_string()),
            ColorValue::Channels(c) => ColorSpec::Channels(c.clone()),
        }
    }
}

impl ColorSpec {
    /// Resolve to an RGB triple. `option` names the job option in errors.
    pub fn resolve(&self, option: &'static str) -> Result<Rgb<u8>, QrsmithError> {
        let invalid = |message: String| QrsmithError::InvalidOption { option, message };

        match self {
            ColorSpec::Hex(s) => parse_hex(s.trim_start_matches('#'))
                .ok_or_else(|| invalid(format!("'{}' is not a hex color", s))),
            ColorSpec::Named(name) => named(name)
                .or_else(|| parse_hex(name))
                .ok_or_else(|| invalid(format!("unknown color '{}'", name))),
            ColorSpec::Channels(channels) => {
                if channels.len() != 3 && channels.len() != 4 {
                    return Err(invalid(format!(
                        "expected 3 or 4 channel values, got {}",
                        channels.len()
                    )));
                }
                let mut rgb = [0u8; 3];
                for (slot, &value) in rgb.iter_mut().zip(channels) {
                    *slot = u8::try_from(value)
                        .map_err(|_| invalid(format!("channel value {} out of 0..=255", value)))?;
                }
                Ok(Rgb(rgb))
            }
        }
    }
}

/// Resolve an optional color option, falling back to `default`.
pub fn resolve_or(
    value: Option<&ColorValue>,
    default: Rgb<u8>,
    option: &'static str,
) -> Result<Rgb<u8>, QrsmithError> {
    match value {
        Some(v) => ColorSpec::from(v).resolve(option),
        None => Ok(default),
    }
}

/// Parse 3- or 6-digit hex (no leading `#`).
fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Common CSS color names.
fn named(name: &str) -> Option<Rgb<u8>> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "lime" => [0, 255, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" | "aqua" => [0, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "silver" => [192, 192, 192],
        "darkgray" | "darkgrey" => [169, 169, 169],
        "lightgray" | "lightgrey" => [211, 211, 211],
        "maroon" => [128, 0, 0],
        "olive" => [128, 128, 0],
        "navy" => [0, 0, 128],
        "teal" => [0, 128, 128],
        "purple" => [128, 0, 128],
        "orange" => [255, 165, 0],
        "pink" => [255, 192, 203],
        "brown" => [165, 42, 42],
        "gold" => [255, 215, 0],
        "indigo" => [75, 0, 130],
        "violet" => [238, 130, 238],
        "darkblue" => [0, 0, 139],
        "darkgreen" => [0, 100, 0],
        "darkred" => [139, 0, 0],
        _ => return None,
    };
    Some(Rgb(rgb))
}
