#![forbid(unsafe_code)]

//! Test surface geometry.
//!
//! Coordinates arrive from the host in client space (viewport-relative CSS
//! pixels). The surface's bounding box is re-queried on every event rather
//! than cached, so layout shifts and page scrolling never skew the mapping.

use serde::Serialize;

/// Current on-screen bounding box of the test surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A rounded, surface-relative coordinate pair.
///
/// May lie outside the surface (negative or past the box extent); callers
/// check [`SurfaceRect::contains`] before treating it as in-area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfacePoint {
    pub x: i32,
    pub y: i32,
}

impl SurfaceRect {
    /// Map client-space coordinates into this surface, rounding to integers.
    #[must_use]
    pub fn relative_point(&self, client_x: f64, client_y: f64) -> SurfacePoint {
        SurfacePoint {
            x: round_to_i32(client_x - self.left),
            y: round_to_i32(client_y - self.top),
        }
    }

    /// Whether a relative point falls within the box, bounds inclusive.
    #[must_use]
    pub fn contains(&self, point: SurfacePoint) -> bool {
        f64::from(point.x) >= 0.0
            && f64::from(point.x) <= self.width
            && f64::from(point.y) >= 0.0
            && f64::from(point.y) <= self.height
    }
}

/// Round half away from zero, then clamp into `i32` range.
///
/// Matches JS `Math.round` for the coordinate magnitudes a pointer can
/// actually produce; the clamp only guards against pathological inputs.
fn round_to_i32(value: f64) -> i32 {
    let rounded = value.round();
    if rounded <= f64::from(i32::MIN) {
        i32::MIN
    } else if rounded >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        rounded as i32
    }
}
