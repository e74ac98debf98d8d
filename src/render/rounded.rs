//! Rounded rectangles: the coverage test shared by dot rendering and
//! corner clipping, plus the corner-clipping post-process itself.

use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Fully transparent white, the fill outside the clipped shape.
pub const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Whether pixel `(x, y)` lies inside a `width × height` rounded rectangle
/// anchored at the origin with corner radius `radius`.
///
/// Corner arcs are centered `radius` pixels in from each edge, so the
/// outermost corner pixel is outside for any `radius > 0`.
pub fn contains(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    let radius = radius.min(width / 2).min(height / 2);
    if radius == 0 {
        return true;
    }

    // Fold into the top-left quadrant.
    let dx = x.min(width - 1 - x);
    let dy = y.min(height - 1 - y);
    if dx >= radius || dy >= radius {
        return true;
    }

    let ox = (radius - dx) as u64;
    let oy = (radius - dy) as u64;
    let r = radius as u64;
    ox * ox + oy * oy <= r * r
}

/// Single-channel mask: 255 inside the rounded rectangle, 0 outside.
pub fn mask(width: u32, height: u32, radius: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if contains(x, y, width, height, radius) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Clip `img` to a rounded rectangle of `radius`.
///
/// The source is composited onto a transparent canvas through the mask;
/// pixels outside the mask become [`CLEAR`].
pub fn round_corners(img: &RgbaImage, radius: u32) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mask = mask(width, height, radius);

    let mut out = RgbaImage::from_pixel(width, height, CLEAR);
    for (x, y, gate) in mask.enumerate_pixels() {
        if gate[0] == 255 {
            out.put_pixel(x, y, *img.get_pixel(x, y));
        }
    }
    out
}
