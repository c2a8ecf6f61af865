//! Rendering: draws the full color wheel to a 2D context.
//!
//! This module is the only place that paints on
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only
//! [`Scene`] and produces pixels — it does not mutate any picker state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Picker`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

#[wasm_bindgen]
extern "C" {
    /// `CanvasRenderingContext2D.createConicGradient` is not bound by
    /// `web-sys`, so it is declared here directly.
    #[wasm_bindgen(extends = CanvasRenderingContext2d, js_name = CanvasRenderingContext2D)]
    type ConicGradientContext;

    #[wasm_bindgen(method, js_name = createConicGradient)]
    fn create_conic_gradient(
        this: &ConicGradientContext,
        start_angle: f64,
        x: f64,
        y: f64,
    ) -> CanvasGradient;
}

use crate::consts::{HANDLE_RADIUS_PX, HANDLE_STROKE_PX};
use crate::engine::Scene;
use crate::geometry::{self, Point};

/// Conic-gradient stops for the hue sweep: six evenly spaced fully saturated
/// hues, wrapping back to red.
const HUE_STOPS: [(f32, &str); 7] = [
    (0.0, "red"),
    (1.0 / 6.0, "yellow"),
    (2.0 / 6.0, "lime"),
    (3.0 / 6.0, "cyan"),
    (4.0 / 6.0, "blue"),
    (5.0 / 6.0, "magenta"),
    (1.0, "red"),
];

/// Draw the full scene: hue ring, shade triangle, and both handle
/// indicators.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, scene.size, scene.size);

    draw_ring(ctx, scene)?;
    draw_triangle(ctx, scene)?;

    draw_handle_indicator(ctx, scene.ring_handle)?;
    draw_handle_indicator(ctx, scene.triangle_handle)?;

    Ok(())
}

// =============================================================
// Hue ring
// =============================================================

/// Fill the outer disk with the conic hue sweep, then cut the center back
/// out with `destination-out` compositing, leaving an annulus.
fn draw_ring(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    let center = scene.ring.center();

    let gradient = ctx
        .unchecked_ref::<ConicGradientContext>()
        .create_conic_gradient(0.0, center.x, center.y);
    for (offset, color) in HUE_STOPS {
        gradient.add_color_stop(offset, color)?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);

    ctx.begin_path();
    ctx.arc(center.x, center.y, scene.ring.outer_radius, 0.0, 2.0 * PI)?;
    ctx.fill();

    // Cutout: everything inside the inner radius becomes transparent, which
    // is what makes zero-alpha sampling misses possible there.
    ctx.set_global_composite_operation("destination-out")?;
    ctx.begin_path();
    ctx.arc(center.x, center.y, scene.ring.inner_radius, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.set_global_composite_operation("source-over")?;

    Ok(())
}

// =============================================================
// Shade triangle
// =============================================================

/// Paint the triangle with three overlapping radial gradients: white at the
/// two corners adjacent to the hue corner, the selected hue at the hue
/// corner. The hue gradient is painted last so it dominates near its own
/// corner.
fn draw_triangle(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    let vertices = geometry::triangle_vertices(
        geometry::hue_corner_angle(scene.ring_angle),
        &scene.ring,
    );
    let [hue_corner, white_a, white_b] = vertices;

    // Equilateral, so any side works as the fade radius.
    let side = hue_corner.distance_to(white_a);
    let hue_css = scene.hue.css();

    fill_triangle_gradient(ctx, &vertices, white_a, side, "white")?;
    fill_triangle_gradient(ctx, &vertices, white_b, side, "white")?;
    fill_triangle_gradient(ctx, &vertices, hue_corner, side, &hue_css)?;

    Ok(())
}

/// Fill the triangle path with a radial gradient fading from `color` at
/// `origin` to transparent at `radius`.
fn fill_triangle_gradient(
    ctx: &CanvasRenderingContext2d,
    vertices: &[Point; 3],
    origin: Point,
    radius: f64,
    color: &str,
) -> Result<(), JsValue> {
    let gradient =
        ctx.create_radial_gradient(origin.x, origin.y, 0.0, origin.x, origin.y, radius)?;
    gradient.add_color_stop(0.0, color)?;
    gradient.add_color_stop(1.0, "transparent")?;

    ctx.begin_path();
    ctx.move_to(vertices[0].x, vertices[0].y);
    ctx.line_to(vertices[1].x, vertices[1].y);
    ctx.line_to(vertices[2].x, vertices[2].y);
    ctx.close_path();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    Ok(())
}

// =============================================================
// Handle indicators
// =============================================================

/// Stroke a small white circle marking a handle position, restoring normal
/// compositing afterwards so an earlier `destination-out` can never leak
/// into later strokes.
fn draw_handle_indicator(ctx: &CanvasRenderingContext2d, position: Point) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(position.x, position.y, HANDLE_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.set_stroke_style_str("white");
    ctx.set_line_width(HANDLE_STROKE_PX);
    ctx.stroke();
    ctx.set_global_composite_operation("source-over")?;
    Ok(())
}
