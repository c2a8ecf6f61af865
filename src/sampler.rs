//! Color sampling: single-pixel readback from the painted canvas.
//!
//! The picked colors are deliberately read back from rendered pixels rather
//! than recomputed from the gradient math, so whatever the canvas actually
//! painted is what the user gets. A transparent pixel (the ring cutout or
//! the area outside the disk) is a sampling miss, not a color.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Rgb;
use crate::geometry::Point;

/// Read the color of the single pixel under `point` from the last-painted
/// canvas content. `Ok(None)` means the pixel's alpha channel is zero and
/// the caller must keep its previously displayed color.
///
/// # Errors
///
/// Returns `Err` if `getImageData` fails (e.g. a detached or tainted
/// canvas).
pub fn sample_pixel(
    ctx: &CanvasRenderingContext2d,
    point: Point,
) -> Result<Option<Rgb>, JsValue> {
    let data = ctx
        .get_image_data(point.x.floor(), point.y.floor(), 1.0, 1.0)?
        .data();
    let Some(&rgba) = data.first_chunk::<4>() else {
        return Ok(None);
    };
    Ok(Rgb::from_rgba(rgba))
}
