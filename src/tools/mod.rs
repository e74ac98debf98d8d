//! # Entry Points
//!
//! One module per job type. Each `run` takes a parsed [`JobRequest`] and
//! the output path, does one transformation and writes one file.
//!
//! | Tool | Input | Output |
//! |------|-------|--------|
//! | [`generate`] | payload | flat PNG/JPG/other raster, or SVG |
//! | [`advanced`] | payload | gradient-dot PNG |
//! | [`beautify`] | payload or image | post-processed raster |
//! | [`decode`] | image | JSON envelope |

pub mod advanced;
pub mod beautify;
pub mod decode;
pub mod generate;

use image::RgbaImage;
use tracing::warn;

use crate::QrsmithError;
use crate::job::{JobOptions, JobRequest};
use crate::render::logo;

/// Message for a job file without `input` on the image-producing tools.
pub const MISSING_PAYLOAD: &str = "No input data provided";

/// Apply the `logoPath` option, if any.
///
/// A configured logo that does not exist is skipped with a warning; the
/// overlay itself would fail with not-found.
pub(crate) fn apply_logo(img: RgbaImage, options: &JobOptions) -> Result<RgbaImage, QrsmithError> {
    let Some(path) = options.logo_path() else {
        return Ok(img);
    };
    if !path.exists() {
        warn!(logo = %path.display(), "logo file not found, skipping overlay");
        return Ok(img);
    }
    logo::overlay_logo(&img, path, options.logo_size_ratio()?)
}

/// The job's payload, or the generic missing-payload error.
pub(crate) fn payload(job: &JobRequest) -> Result<&str, QrsmithError> {
    job.payload(MISSING_PAYLOAD)
}
