//! Beautifier: post-process an existing QR image, or render a fresh one
//! with effects.
//!
//! ```text
//! input is an image (path or data URI)
//!     → rounded corners? → logo?
//! input is text
//!     → radial gradient (gradient: true) or flat render
//!     → logo? → rounded corners?
//! ```
//!
//! Existing images only get the flat-style post-processing; the gradient
//! renderers need the module grid and so apply to fresh payloads only.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use super::{apply_logo, generate, payload};
use crate::QrsmithError;
use crate::color;
use crate::job::{InputSource, JobOptions, JobRequest, StyleDefaults};
use crate::output::{self, OutputFormat};
use crate::render::{self, gradient, rounded};
use crate::symbol::{self, EcLevel, ModuleGrid};

/// Defaults for the radial-gradient path.
pub const GRADIENT_DEFAULTS: StyleDefaults = StyleDefaults::STANDARD.with_error_correction(EcLevel::H);

/// Produce the beautified image without writing it.
pub fn render(job: &JobRequest) -> Result<RgbaImage, QrsmithError> {
    let input = payload(job)?;
    let options = &job.options;

    let source = InputSource::classify(input);
    if source.is_image() {
        debug!(?source, "beautifying existing image");
        let img = source.load_image()?.to_rgba8();
        let img = round_if_requested(img, options);
        return apply_logo(img, options);
    }

    let img = if options.gradient {
        render_radial(input, options)?
    } else {
        generate::render(job)?
    };
    Ok(round_if_requested(img, options))
}

fn render_radial(data: &str, options: &JobOptions) -> Result<RgbaImage, QrsmithError> {
    let defaults = GRADIENT_DEFAULTS;
    let level = symbol::resolve_ec_level(options.error_correction.as_deref(), defaults.error_correction);
    let code = symbol::encode_fit(data, options.version(&defaults), level)?;
    let border = options.border(&defaults);
    let box_size = options.box_size(&defaults)?;
    render::canvas_side(code.width(), border, box_size)?;
    let grid = ModuleGrid::new(&code, border);

    let base = color::resolve_or(options.color.as_ref(), defaults.fill, "color")?;
    let background = color::resolve_or(
        options.background_color.as_ref(),
        defaults.background,
        "backgroundColor",
    )?;
    debug!(modules = grid.size(), ?level, box_size, "rendering radial gradient");

    apply_logo(gradient::render_radial(&grid, box_size, base, background), options)
}

fn round_if_requested(img: RgbaImage, options: &JobOptions) -> RgbaImage {
    if options.rounded_corners {
        rounded::round_corners(&img, options.corner_radius())
    } else {
        img
    }
}

/// Run the beautifier, writing the result to `output`.
pub fn run(job: &JobRequest, output: &Path) -> Result<(), QrsmithError> {
    let format = OutputFormat::parse(job.options.format.as_deref())?;
    if format == OutputFormat::Svg {
        return Err(QrsmithError::UnsupportedFormat(
            "svg (beautified codes are raster only)".to_string(),
        ));
    }

    let img = render(job)?;
    output::save_raster(&img, output, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;

    fn job(json: &str) -> JobRequest {
        JobRequest::from_json(json).unwrap()
    }

    #[test]
    fn test_fresh_payload_rounded() {
        let img = render(&job(
            r#"{"input": "hello", "options": {"roundedCorners": true, "cornerRadius": 20}}"#,
        ))
        .unwrap();
        assert_eq!(img.dimensions(), (290, 290));
        assert_eq!(*img.get_pixel(0, 0), rounded::CLEAR);
        assert_eq!(*img.get_pixel(145, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_gradient_path() {
        let img = render(&job(
            r#"{"input": "hello", "options": {"gradient": true, "color": [0, 0, 200]}}"#,
        ))
        .unwrap();
        // module (4, 4) is the top-left finder corner, dimmed blue
        let px = img.get_pixel(40, 40);
        assert_eq!(px[0], 0);
        assert!(px[2] < 200);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_existing_image_from_data_uri() {
        let src = RgbaImage::from_pixel(40, 40, Rgba([10, 20, 30, 255]));
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(src)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(&png));

        let request = JobRequest {
            input: Some(uri),
            options: JobOptions {
                rounded_corners: true,
                corner_radius: Some(5),
                ..Default::default()
            },
        };
        let img = render(&request).unwrap();
        assert_eq!(img.dimensions(), (40, 40));
        assert_eq!(*img.get_pixel(0, 0), rounded::CLEAR);
        assert_eq!(*img.get_pixel(20, 20), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_gradient_oversized_border_rejected() {
        let err = render(&job(
            r#"{"input": "x", "options": {"gradient": true, "border": 3000000000}}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, QrsmithError::InvalidOption { option: "border", .. }));
    }

    #[test]
    fn test_svg_rejected() {
        let out = std::env::temp_dir()
            .join(format!("qrsmith-beautify-rejected-{}.svg", std::process::id()));
        let err = run(&job(r#"{"input": "x", "options": {"format": "svg"}}"#), &out).unwrap_err();
        assert!(matches!(err, QrsmithError::UnsupportedFormat(_)));
    }
}
