//! Flat two-color rendering via the `qrcode` crate's image renderer.

use image::{Rgb, Rgba, RgbaImage, imageops};
use qrcode::QrCode;

use super::opaque;

/// Colors and geometry for a flat render.
#[derive(Debug, Clone, Copy)]
pub struct FlatStyle {
    pub box_size: u32,
    pub border: u32,
    pub fill: Rgb<u8>,
    pub background: Rgb<u8>,
}

/// Render `code` with `style`.
///
/// The library draws the bare symbol; it is then placed on a background
/// canvas with a `border`-module margin. Side length is
/// `(code.width() + 2 * border) * box_size`.
pub fn render(code: &QrCode, style: &FlatStyle) -> RgbaImage {
    let light = opaque(style.background);

    let symbol = code
        .render::<Rgba<u8>>()
        .quiet_zone(false)
        .module_dimensions(style.box_size, style.box_size)
        .dark_color(opaque(style.fill))
        .light_color(light)
        .build();

    let side = (code.width() as u32 + 2 * style.border) * style.box_size;
    let offset = (style.border * style.box_size) as i64;

    let mut canvas = RgbaImage::from_pixel(side, side, light);
    imageops::replace(&mut canvas, &symbol, offset, offset);
    canvas
}
