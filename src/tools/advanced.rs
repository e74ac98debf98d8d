//! Advanced generator: rounded dots with a linear color gradient.
//!
//! `color` and `backgroundColor` are the gradient's start and end colors
//! (brand purple to pink by default); the canvas itself is always white.
//! Output is always PNG.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use super::{apply_logo, payload};
use crate::QrsmithError;
use crate::color;
use crate::job::{JobRequest, StyleDefaults};
use crate::output::{self, OutputFormat};
use crate::render::{self, gradient};
use crate::symbol::{self, ModuleGrid};

pub const DEFAULTS: StyleDefaults = StyleDefaults::BRAND;

/// Render the gradient-dot image without writing it.
pub fn render(job: &JobRequest) -> Result<RgbaImage, QrsmithError> {
    let data = payload(job)?;
    let options = &job.options;

    let level = symbol::resolve_ec_level(options.error_correction.as_deref(), DEFAULTS.error_correction);
    let code = symbol::encode_fit(data, options.version(&DEFAULTS), level)?;
    let border = options.border(&DEFAULTS);
    let box_size = options.box_size(&DEFAULTS)?;
    render::canvas_side(code.width(), border, box_size)?;
    let grid = ModuleGrid::new(&code, border);

    let start = color::resolve_or(options.color.as_ref(), DEFAULTS.fill, "color")?;
    let end = color::resolve_or(
        options.background_color.as_ref(),
        DEFAULTS.background,
        "backgroundColor",
    )?;
    debug!(modules = grid.size(), ?level, box_size, "rendering gradient dots");

    apply_logo(gradient::render_dots(&grid, box_size, start, end), options)
}

/// Run the advanced generator, writing a PNG to `output`.
pub fn run(job: &JobRequest, output: &Path) -> Result<(), QrsmithError> {
    let img = render(job)?;
    output::save_raster(&img, output, OutputFormat::Png)
}
