//! Shared numeric constants for the color wheel.

// ── Math ────────────────────────────────────────────────────────

/// 2π / 3 (120°) — spacing between triangle vertices, and the fixed offset
/// between the ring selection angle and the triangle's hue corner.
pub const FRAC_2_PI_3: f64 = 2.0 * std::f64::consts::PI / 3.0;

/// Signed triangle areas below this are treated as degenerate.
pub const DEGENERATE_AREA_EPS: f64 = 1e-9;

// ── Ring geometry ───────────────────────────────────────────────

/// Thickness of the hue ring band in pixels.
pub const RING_THICKNESS_PX: f64 = 16.0;

// ── Handles ─────────────────────────────────────────────────────

/// Radius of the stroked handle indicator circles, in pixels.
pub const HANDLE_RADIUS_PX: f64 = 4.0;

/// Stroke width of the handle indicator circles, in pixels.
pub const HANDLE_STROKE_PX: f64 = 2.0;

// ── Defaults ────────────────────────────────────────────────────

/// Ring angle whose pixel matches the default hue `rgb(0, 61, 255)`
/// (hue 225.65° wrapped into the `atan2` range).
pub const DEFAULT_HUE_ANGLE: f64 = -2.344_919;

/// Initial triangle-handle position as a fraction of the surface size on
/// both axes (90 px on the reference 200 px surface).
pub const DEFAULT_SHADE_HANDLE_RATIO: f64 = 0.45;
