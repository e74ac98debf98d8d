//! Gradient module coloring.
//!
//! Two modes, both computed per dark module in grid coordinates:
//!
//! - **Linear** (advanced generator): each channel runs from `start` at the
//!   top-left module to `end` at the bottom-right one,
//!   `c = start + (end - start) * (x_norm + y_norm) / 2`.
//! - **Radial** (beautifier): the base color is dimmed by up to 30% with
//!   distance from the grid center; the center keeps full brightness.

use image::{Rgb, RgbaImage};

use super::{opaque, paint_module};
use crate::symbol::ModuleGrid;

/// How much the radial mode darkens the farthest modules.
pub const RADIAL_DIM: f64 = 0.3;

/// Position of `index` along an axis of `size` modules, in `[0, 1]`.
#[inline]
pub fn normalized(index: usize, size: usize) -> f64 {
    if size > 1 {
        index as f64 / (size - 1) as f64
    } else {
        0.0
    }
}

#[inline]
fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    // `as` truncates toward zero
    (start as f64 + (end as f64 - start as f64) * t) as u8
}

/// Linear two-axis gradient color at normalized position `(x_norm, y_norm)`.
pub fn linear_color(start: Rgb<u8>, end: Rgb<u8>, x_norm: f64, y_norm: f64) -> Rgb<u8> {
    let t = (x_norm + y_norm) / 2.0;
    Rgb([
        lerp_channel(start[0], end[0], t),
        lerp_channel(start[1], end[1], t),
        lerp_channel(start[2], end[2], t),
    ])
}

/// Radial brightness color for module `(x, y)` of a `size`-module grid.
pub fn radial_color(base: Rgb<u8>, x: usize, y: usize, size: usize) -> Rgb<u8> {
    let center = (size / 2) as f64;
    let dx = x as f64 - center;
    let dy = y as f64 - center;
    let distance = (dx * dx + dy * dy).sqrt();
    let max_distance = (2.0 * center * center).sqrt();

    if max_distance <= 0.0 {
        return base;
    }

    let factor = 1.0 - (distance / max_distance) * RADIAL_DIM;
    let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
    Rgb([scale(base[0]), scale(base[1]), scale(base[2])])
}

/// Rounded dots colored by the linear gradient, on opaque white.
///
/// Image side is `grid.size() * box_size`; dot radius is `box_size / 2`.
pub fn render_dots(grid: &ModuleGrid, box_size: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbaImage {
    let side = grid.size() as u32 * box_size;
    let mut img = RgbaImage::from_pixel(side, side, opaque(Rgb([255, 255, 255])));
    let radius = box_size / 2;

    for (x, y) in grid.dark_modules() {
        let color = linear_color(
            start,
            end,
            normalized(x, grid.size()),
            normalized(y, grid.size()),
        );
        paint_module(&mut img, x, y, box_size, radius, opaque(color));
    }

    img
}

/// Square modules dimmed by distance from the center, over `background`.
pub fn render_radial(
    grid: &ModuleGrid,
    box_size: u32,
    base: Rgb<u8>,
    background: Rgb<u8>,
) -> RgbaImage {
    let side = grid.size() as u32 * box_size;
    let mut img = RgbaImage::from_pixel(side, side, opaque(background));

    for (x, y) in grid.dark_modules() {
        let color = radial_color(base, x, y, grid.size());
        paint_module(&mut img, x, y, box_size, 0, opaque(color));
    }

    img
}
