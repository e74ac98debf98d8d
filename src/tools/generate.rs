//! Generator: payload text → flat QR image, optional centered logo.
//!
//! Logos cover modules, so the error-correction default is raised from M to
//! H when `logoPath` is set. `format: "svg"` skips raster styling entirely
//! and writes the library's vector rendering of the payload.

use std::path::Path;

use tracing::debug;

use super::{apply_logo, payload};
use crate::QrsmithError;
use crate::color;
use crate::job::{JobRequest, StyleDefaults};
use crate::output::{self, OutputFormat};
use crate::render;
use crate::render::flat::{self, FlatStyle};
use crate::symbol::{self, EcLevel};

/// Defaults for this tool given the job's options.
pub fn defaults(job: &JobRequest) -> StyleDefaults {
    if job.options.logo_path().is_some() {
        StyleDefaults::STANDARD.with_error_correction(EcLevel::H)
    } else {
        StyleDefaults::STANDARD
    }
}

/// Render the flat image without writing it.
pub fn render(job: &JobRequest) -> Result<image::RgbaImage, QrsmithError> {
    let data = payload(job)?;
    let options = &job.options;
    let defaults = defaults(job);

    let level = symbol::resolve_ec_level(options.error_correction.as_deref(), defaults.error_correction);
    let code = symbol::encode_fit(data, options.version(&defaults), level)?;

    let style = FlatStyle {
        box_size: options.box_size(&defaults)?,
        border: options.border(&defaults),
        fill: color::resolve_or(options.color.as_ref(), defaults.fill, "color")?,
        background: color::resolve_or(
            options.background_color.as_ref(),
            defaults.background,
            "backgroundColor",
        )?,
    };
    let side = render::canvas_side(code.width(), style.border, style.box_size)?;
    debug!(
        modules = code.width(),
        ?level,
        box_size = style.box_size,
        border = style.border,
        side,
        "rendering flat QR code"
    );

    apply_logo(flat::render(&code, &style), options)
}

/// Run the generator, writing the result to `output`.
pub fn run(job: &JobRequest, output: &Path) -> Result<(), QrsmithError> {
    let data = payload(job)?;
    let format = OutputFormat::parse(job.options.format.as_deref())?;

    if format == OutputFormat::Svg {
        debug!("writing SVG, raster styling ignored");
        return output::save_svg(data, output);
    }

    let img = render(job)?;
    output::save_raster(&img, output, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn job(json: &str) -> JobRequest {
        JobRequest::from_json(json).unwrap()
    }

    #[test]
    fn test_default_dimensions() {
        let img = render(&job(r#"{"input": "hello"}"#)).unwrap();
        // "hello" fits version 1: 21 modules + 2 * 4 border, 10 px each
        assert_eq!(img.dimensions(), (290, 290));
    }

    #[test]
    fn test_custom_size_and_colors() {
        let img = render(&job(
            r#"{"input": "hello", "options": {"size": 4, "border": 1, "color": "navy", "backgroundColor": [250, 250, 0]}}"#,
        ))
        .unwrap();
        assert_eq!(img.dimensions(), (92, 92));
        assert_eq!(*img.get_pixel(0, 0), Rgba([250, 250, 0, 255]));
        assert_eq!(*img.get_pixel(4, 4), Rgba([0, 0, 128, 255]));
    }

    #[test]
    fn test_logo_raises_error_correction() {
        assert_eq!(defaults(&job(r#"{"input": "x"}"#)).error_correction, EcLevel::M);
        assert_eq!(
            defaults(&job(r#"{"input": "x", "options": {"logoPath": "logo.png"}}"#)).error_correction,
            EcLevel::H
        );
    }

    #[test]
    fn test_missing_logo_is_skipped() {
        let img = render(&job(
            r#"{"input": "hello", "options": {"logoPath": "/no/such/logo.png"}}"#,
        ))
        .unwrap();
        assert_eq!(img.width(), img.height());
    }

    #[test]
    fn test_missing_payload() {
        let err = render(&job(r#"{"options": {}}"#)).unwrap_err();
        assert_eq!(err.to_string(), "No input data provided");
    }

    #[test]
    fn test_bad_color() {
        let err = render(&job(r##"{"input": "x", "options": {"color": "#zzzzzz"}}"##)).unwrap_err();
        assert!(matches!(err, QrsmithError::InvalidOption { option: "color", .. }));
    }

    #[test]
    fn test_oversized_border_rejected() {
        let err = render(&job(r#"{"input": "x", "options": {"border": 3000000000}}"#)).unwrap_err();
        assert!(matches!(err, QrsmithError::InvalidOption { option: "border", .. }));
    }

    #[test]
    fn test_oversized_module_rejected() {
        let err = render(&job(r#"{"input": "x", "options": {"size": 300000000}}"#)).unwrap_err();
        assert!(matches!(err, QrsmithError::InvalidOption { option: "size", .. }));
    }
}
