//! Top-level picker engine.
//!
//! [`PickerCore`] holds all interaction state and logic that doesn't depend
//! on a real canvas — it drives painting and pixel readback through the
//! [`Surface`] trait so it can be tested without WASM/browser dependencies.
//! [`Picker`] wraps it with a canvas-backed surface for the browser.
//!
//! Every state mutation runs one fixed transaction: mutate → repaint →
//! sample the pixel under each handle → store the colors that hit. Sampling
//! always happens against the frame just painted, never a stale one.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Rgb;
use crate::consts::{DEFAULT_HUE_ANGLE, DEFAULT_SHADE_HANDLE_RATIO, RING_THICKNESS_PX};
use crate::geometry::{self, Point, RingGeometry};
use crate::input::{Action, DragState};
use crate::{render, sampler};

/// Failures surfaced from the underlying canvas.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The canvas element refused to hand out a 2D context.
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    /// A draw call on the 2D context failed.
    #[error("canvas draw failed: {0}")]
    Draw(String),
    /// Pixel readback from the canvas failed.
    #[error("pixel readback failed: {0}")]
    Sample(String),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Surface size in pixels (the canvas is square).
    pub size: f64,
    /// Derived ring radii.
    pub ring: RingGeometry,
    /// Current ring selection angle in radians.
    pub ring_angle: f64,
    /// Currently selected hue, painted on the triangle's hue corner.
    pub hue: Rgb,
    /// Ring handle position.
    pub ring_handle: Point,
    /// Triangle handle position.
    pub triangle_handle: Point,
}

/// The drawing surface the engine paints to and samples from.
///
/// `repaint` must fully redraw the scene before `sample` is called; the
/// engine relies on that ordering to guarantee sampled pixels reflect the
/// just-updated geometry.
pub trait Surface {
    /// Redraw the whole scene.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying draw calls fail.
    fn repaint(&mut self, scene: &Scene) -> Result<(), PickerError>;

    /// Read the color of the pixel under `point` from the last repaint.
    /// `Ok(None)` means the pixel is transparent (cutout or outside the disk).
    ///
    /// # Errors
    ///
    /// Returns `Err` if pixel readback fails.
    fn sample(&self, point: Point) -> Result<Option<Rgb>, PickerError>;
}

/// Host-facing snapshot of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Color picked on the ring.
    pub hue: Rgb,
    /// Color picked in the triangle, once one has been sampled.
    pub shade: Option<Rgb>,
    /// Ring handle position.
    pub ring_handle: Point,
    /// Triangle handle position.
    pub triangle_handle: Point,
}

/// Core picker state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Picker`] so it can be tested without WASM/browser
/// dependencies.
pub struct PickerCore {
    size: f64,
    ring: RingGeometry,
    ring_handle: Point,
    triangle_handle: Point,
    selected_hue: Rgb,
    selected_shade: Option<Rgb>,
    drag: DragState,
}

impl PickerCore {
    /// Create a core for a square surface of the given pixel size.
    #[must_use]
    pub fn new(surface_size: f64) -> Self {
        let ring = RingGeometry::new(surface_size, RING_THICKNESS_PX);
        Self {
            size: surface_size,
            ring,
            ring_handle: geometry::angle_to_ring_position(DEFAULT_HUE_ANGLE, &ring),
            triangle_handle: Point::new(
                surface_size * DEFAULT_SHADE_HANDLE_RATIO,
                surface_size * DEFAULT_SHADE_HANDLE_RATIO,
            ),
            selected_hue: Rgb::DEFAULT_HUE,
            selected_shade: None,
            drag: DragState::Idle,
        }
    }

    // --- Input events ---

    /// Route a pointer-down to the triangle or ring handle and apply it as a
    /// single-step drag, so plain clicks pick immediately.
    ///
    /// # Errors
    ///
    /// Propagates surface repaint/readback failures.
    pub fn on_pointer_down(
        &mut self,
        point: Point,
        surface: &mut impl Surface,
    ) -> Result<Action, PickerError> {
        if geometry::point_in_triangle(point, &self.triangle()) {
            self.drag = DragState::DraggingTriangle;
            log::debug!("drag start: triangle at ({:.1}, {:.1})", point.x, point.y);
            self.move_triangle_handle(point, surface)
        } else {
            self.drag = DragState::DraggingRing;
            log::debug!("drag start: ring at ({:.1}, {:.1})", point.x, point.y);
            self.move_ring_handle(point, surface)
        }
    }

    /// Apply a pointer move according to the active drag state.
    ///
    /// # Errors
    ///
    /// Propagates surface repaint/readback failures.
    pub fn on_pointer_move(
        &mut self,
        point: Point,
        surface: &mut impl Surface,
    ) -> Result<Action, PickerError> {
        match self.drag {
            DragState::Idle => Ok(Action::None),
            DragState::DraggingRing => self.move_ring_handle(point, surface),
            DragState::DraggingTriangle => self.move_triangle_handle(point, surface),
        }
    }

    /// End the active drag, if any.
    pub fn on_pointer_up(&mut self) -> Action {
        if self.drag != DragState::Idle {
            log::debug!("drag end: {:?}", self.drag);
            self.drag = DragState::Idle;
        }
        Action::None
    }

    /// Pointer left the surface: treated exactly like pointer-up so a drag
    /// can never stick.
    pub fn on_pointer_leave(&mut self) -> Action {
        self.on_pointer_up()
    }

    // --- Render ---

    /// Repaint and resample without any state change (initial mount pass).
    ///
    /// # Errors
    ///
    /// Propagates surface repaint/readback failures.
    pub fn render(&mut self, surface: &mut impl Surface) -> Result<(), PickerError> {
        self.refresh(surface)
    }

    // --- Queries ---

    /// The ring selection angle, always recomputed from the handle position.
    #[must_use]
    pub fn ring_angle(&self) -> f64 {
        geometry::ring_position_to_angle(self.ring_handle, &self.ring)
    }

    /// Snapshot of both handles and both selected colors.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection {
            hue: self.selected_hue,
            shade: self.selected_shade,
            ring_handle: self.ring_handle,
            triangle_handle: self.triangle_handle,
        }
    }

    /// The active drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The frame parameters for the renderer.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene {
            size: self.size,
            ring: self.ring,
            ring_angle: self.ring_angle(),
            hue: self.selected_hue,
            ring_handle: self.ring_handle,
            triangle_handle: self.triangle_handle,
        }
    }

    // --- Internals ---

    /// Current triangle vertices, derived from the ring angle plus the fixed
    /// hue-corner offset.
    fn triangle(&self) -> [Point; 3] {
        geometry::triangle_vertices(geometry::hue_corner_angle(self.ring_angle()), &self.ring)
    }

    /// Move the ring handle to the pointer's angle, sticky-constrained to the
    /// ring band, then repaint and resample.
    fn move_ring_handle(
        &mut self,
        point: Point,
        surface: &mut impl Surface,
    ) -> Result<Action, PickerError> {
        let angle = geometry::ring_position_to_angle(point, &self.ring);
        let candidate = geometry::angle_to_ring_position(angle, &self.ring);
        self.ring_handle = geometry::constrain_to_ring(candidate, self.ring_handle, &self.ring);
        self.refresh(surface)?;
        Ok(Action::SelectionChanged)
    }

    /// Move the triangle handle to the raw pointer position if it is inside
    /// the current triangle, then repaint and resample. Containment is
    /// re-tested on every move because the triangle rotates with the ring.
    fn move_triangle_handle(
        &mut self,
        point: Point,
        surface: &mut impl Surface,
    ) -> Result<Action, PickerError> {
        if !geometry::point_in_triangle(point, &self.triangle()) {
            return Ok(Action::None);
        }
        self.triangle_handle = point;
        self.refresh(surface)?;
        Ok(Action::SelectionChanged)
    }

    /// The repaint-then-resample transaction. Transparent samples are misses
    /// and leave the corresponding color untouched.
    fn refresh(&mut self, surface: &mut impl Surface) -> Result<(), PickerError> {
        surface.repaint(&self.scene())?;
        if let Some(hue) = surface.sample(self.ring_handle)? {
            self.selected_hue = hue;
        }
        if let Some(shade) = surface.sample(self.triangle_handle)? {
            self.selected_shade = Some(shade);
        }
        Ok(())
    }
}

/// The full color wheel. Wraps [`PickerCore`] and paints on a browser canvas.
pub struct Picker {
    ctx: CanvasRenderingContext2d,
    core: PickerCore,
}

impl Picker {
    /// Create a picker bound to the given canvas element.
    ///
    /// The canvas is assumed square; the surface size is taken from its
    /// width attribute.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ContextUnavailable`] if a 2D context cannot be
    /// obtained.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, PickerError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| PickerError::Draw(js_err(&err)))?
            .ok_or(PickerError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PickerError::ContextUnavailable)?;
        Ok(Self {
            ctx,
            core: PickerCore::new(f64::from(canvas.width())),
        })
    }

    // --- Delegated input events ---

    /// # Errors
    ///
    /// Propagates canvas repaint/readback failures.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<Action, PickerError> {
        let mut surface = CanvasSurface { ctx: &self.ctx };
        self.core.on_pointer_down(Point::new(x, y), &mut surface)
    }

    /// # Errors
    ///
    /// Propagates canvas repaint/readback failures.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<Action, PickerError> {
        let mut surface = CanvasSurface { ctx: &self.ctx };
        self.core.on_pointer_move(Point::new(x, y), &mut surface)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Action {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Paint the current state and sample both handles (call once on mount).
    ///
    /// # Errors
    ///
    /// Propagates canvas repaint/readback failures.
    pub fn render(&mut self) -> Result<(), PickerError> {
        let mut surface = CanvasSurface { ctx: &self.ctx };
        self.core.render(&mut surface)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.core.selection()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.core.drag_state()
    }

    #[must_use]
    pub fn ring_angle(&self) -> f64 {
        self.core.ring_angle()
    }
}

/// Canvas-backed [`Surface`]: paints via [`render::draw`] and samples via
/// [`sampler::sample_pixel`].
struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl Surface for CanvasSurface<'_> {
    fn repaint(&mut self, scene: &Scene) -> Result<(), PickerError> {
        render::draw(self.ctx, scene).map_err(|err| PickerError::Draw(js_err(&err)))
    }

    fn sample(&self, point: Point) -> Result<Option<Rgb>, PickerError> {
        sampler::sample_pixel(self.ctx, point).map_err(|err| PickerError::Sample(js_err(&err)))
    }
}

fn js_err(value: &JsValue) -> String {
    format!("{value:?}")
}
