//! Geometry kernel: pure ring/triangle math.
//!
//! Everything in this module is a total function over plain values — no
//! canvas, no interaction state. The engine feeds pointer coordinates in and
//! gets constrained handle positions, angles, and containment answers back.
//! Angles are radians in `(-π, π]` as produced by `atan2`, measured from the
//! surface center with y pointing down.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEGENERATE_AREA_EPS, FRAC_2_PI_3};

/// A point in surface-local pixel coordinates (origin top-left, y-down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Radii of the hue ring, derived from the surface size.
///
/// The surface is square; the ring is centered at
/// `(outer_radius, outer_radius)`. `inner_radius` is both the cutout radius
/// and the radius at which handles and triangle vertices sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl RingGeometry {
    /// Derive ring radii from the surface size and ring thickness.
    ///
    /// Requires `ring_thickness < surface_size`.
    #[must_use]
    pub fn new(surface_size: f64, ring_thickness: f64) -> Self {
        debug_assert!(ring_thickness < surface_size);
        let outer_radius = surface_size / 2.0;
        Self {
            outer_radius,
            inner_radius: outer_radius - ring_thickness / 2.0,
        }
    }

    /// The surface center.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.outer_radius, self.outer_radius)
    }
}

/// The angle at which the triangle's hue corner sits for a given ring
/// selection angle (fixed 120° offset).
#[must_use]
pub fn hue_corner_angle(ring_angle: f64) -> f64 {
    ring_angle + FRAC_2_PI_3
}

/// Place a point on the ring at the given angle.
#[must_use]
pub fn angle_to_ring_position(angle: f64, ring: &RingGeometry) -> Point {
    let center = ring.center();
    Point::new(
        center.x + ring.inner_radius * angle.cos(),
        center.y + ring.inner_radius * angle.sin(),
    )
}

/// The ring angle of an arbitrary surface point, measured from the center.
#[must_use]
pub fn ring_position_to_angle(position: Point, ring: &RingGeometry) -> f64 {
    let center = ring.center();
    (position.y - center.y).atan2(position.x - center.x)
}

/// Sticky clamp to the ring band.
///
/// If `candidate` lies within `[inner_radius, outer_radius]` of the center it
/// is accepted; otherwise the move is rejected and `previous` is returned
/// unchanged. Out-of-band candidates are ignored, not projected onto the
/// band.
#[must_use]
pub fn constrain_to_ring(candidate: Point, previous: Point, ring: &RingGeometry) -> Point {
    let distance = candidate.distance_to(ring.center());
    if distance < ring.inner_radius || distance > ring.outer_radius {
        previous
    } else {
        candidate
    }
}

/// The three triangle vertices for a given hue-corner angle.
///
/// `P0` sits at `angle`, `P1` at `angle + 120°`, `P2` at `angle − 120°`,
/// each at `inner_radius` from the center.
#[must_use]
pub fn triangle_vertices(angle: f64, ring: &RingGeometry) -> [Point; 3] {
    [
        angle_to_ring_position(angle, ring),
        angle_to_ring_position(angle + FRAC_2_PI_3, ring),
        angle_to_ring_position(angle - FRAC_2_PI_3, ring),
    ]
}

/// Barycentric point-in-triangle test.
///
/// Computes the signed area and the barycentric weights `s`, `t` of `point`;
/// inside iff `s ≥ 0`, `t ≥ 0` and `1 − s − t ≥ 0`. A near-zero area means
/// the triangle is degenerate and nothing is inside it.
#[must_use]
pub fn point_in_triangle(point: Point, vertices: &[Point; 3]) -> bool {
    let [p0, p1, p2] = *vertices;

    let area = 0.5
        * (-p1.y * p2.x + p0.y * (-p1.x + p2.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y);
    if area.abs() < DEGENERATE_AREA_EPS {
        return false;
    }

    let s = (p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * point.x + (p0.x - p2.x) * point.y)
        / (2.0 * area);
    let t = (p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * point.x + (p1.x - p0.x) * point.y)
        / (2.0 * area);

    s >= 0.0 && t >= 0.0 && (1.0 - s - t) >= 0.0
}

/// Centroid of a triangle.
#[must_use]
pub fn centroid(vertices: &[Point; 3]) -> Point {
    Point::new(
        (vertices[0].x + vertices[1].x + vertices[2].x) / 3.0,
        (vertices[0].y + vertices[1].y + vertices[2].y) / 3.0,
    )
}
