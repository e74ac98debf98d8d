//! # Rendering
//!
//! Turns encoded symbols into RGBA images and post-processes them.
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`flat`] | Square modules in two flat colors (library renderer) |
//! | [`gradient`] | Linear-gradient rounded dots, radial-brightness squares |
//! | [`rounded`] | Rounded-corner clipping |
//! | [`logo`] | Centered logo overlay |
//!
//! All renderers lay modules out the same way: module `(x, y)` of the
//! bordered grid covers pixels `[x * box, (x + 1) * box)` horizontally and
//! likewise vertically. [`canvas_side`] checks that layout fits before any
//! renderer allocates.

pub mod flat;
pub mod gradient;
pub mod logo;
pub mod rounded;

use image::{Rgb, Rgba, RgbaImage};

use crate::QrsmithError;

/// Largest canvas side, in pixels, a renderer will allocate.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Side length of a rendered code: `(symbol_width + 2 * border) * box_size`.
///
/// Fails with [`QrsmithError::InvalidOption`] naming `border` or `size` when
/// the result overflows or exceeds [`MAX_CANVAS_SIDE`].
pub fn canvas_side(symbol_width: usize, border: u32, box_size: u32) -> Result<u32, QrsmithError> {
    let modules = u32::try_from(symbol_width)
        .ok()
        .zip(border.checked_mul(2))
        .and_then(|(width, margin)| width.checked_add(margin))
        .filter(|m| *m <= MAX_CANVAS_SIDE)
        .ok_or_else(|| QrsmithError::InvalidOption {
            option: "border",
            message: format!("{} modules per side exceeds {} px", border, MAX_CANVAS_SIDE),
        })?;

    modules
        .checked_mul(box_size)
        .filter(|side| *side <= MAX_CANVAS_SIDE)
        .ok_or_else(|| QrsmithError::InvalidOption {
            option: "size",
            message: format!(
                "{} px per module over {} modules exceeds {} px",
                box_size, modules, MAX_CANVAS_SIDE
            ),
        })
}

/// Opaque RGBA from RGB.
#[inline]
pub fn opaque(rgb: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b] = rgb.0;
    Rgba([r, g, b, 255])
}

/// Fill one module cell, optionally with rounded corners.
///
/// `radius` 0 paints a plain square; `box_size / 2` paints a dot.
pub(crate) fn paint_module(
    img: &mut RgbaImage,
    x: usize,
    y: usize,
    box_size: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    let left = x as u32 * box_size;
    let top = y as u32 * box_size;

    for dy in 0..box_size {
        for dx in 0..box_size {
            if radius == 0 || rounded::contains(dx, dy, box_size, box_size, radius) {
                img.put_pixel(left + dx, top + dy, color);
            }
        }
    }
}
