//! Directed line segment between two points.
//!
//! Purpose
//! - Derived quantities of a segment (slope, inclination angle, length,
//!   midpoint, quadrants) and in-place transforms (extend, translate, mirror,
//!   rotate) that return `&mut Self` for chaining.
//!
//! Conventions
//! - `start` and `end` are ordered. Equality and hashing are order-sensitive, and
//!   extension is direction-sensitive.
//! - `start == end` is a valid (degenerate) segment. Nothing here assumes a
//!   non-zero length; degenerate inputs fall into the vertical-line branches.
//! - No epsilons: comparisons are exact unless the method name ends in `_eps`.
//! - Degenerate arithmetic follows IEEE-754; no method panics or returns errors.
//!
//! Code cross-refs: `Point::center_to`, `Point::rotate_with`.

mod extend;
mod query;

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Distance from `start` to `end`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Rise over run; `None` for a vertical segment (`start.x == end.x`).
    pub fn slope(&self) -> Option<f64> {
        if self.end.x == self.start.x {
            return None;
        }
        Some((self.end.y - self.start.y) / (self.end.x - self.start.x))
    }

    /// Slope of a perpendicular line, `-1 / k`.
    ///
    /// `None` when the segment is vertical or horizontal.
    pub fn vertical_line_slope(&self) -> Option<f64> {
        match self.slope() {
            Some(k) if k != 0.0 => Some(-1.0 / k),
            _ => None,
        }
    }

    /// Inclination angle in `[0, π)`.
    ///
    /// Vertical segments give `π/2`; otherwise `atan(k)` for `k >= 0` and
    /// `π + atan(k)` for `k < 0`. A nearly flat falling segment whose angle
    /// rounds up to π reports `0`, the same inclination.
    pub fn angle_rad(&self) -> f64 {
        match self.slope() {
            None => FRAC_PI_2,
            Some(k) if k >= 0.0 => k.atan(),
            Some(k) => {
                let a = PI + k.atan();
                if a >= PI {
                    0.0
                } else {
                    a
                }
            }
        }
    }

    #[inline]
    pub fn angle_degree(&self) -> f64 {
        self.angle_rad().to_degrees()
    }

    #[inline]
    pub fn is_horizontal_line(&self) -> bool {
        self.slope() == Some(0.0)
    }

    #[inline]
    pub fn is_vertical_line(&self) -> bool {
        self.slope().is_none()
    }

    /// Midpoint, with the coincident-endpoint rule of [`Point::center_to`].
    #[inline]
    pub fn center(&self) -> Point {
        self.start.center_to(self.end)
    }

    /// `(start quadrant, end quadrant)`.
    #[inline]
    pub fn passing_quadrant(&self) -> (u8, u8) {
        (self.start.quadrant(), self.end.quadrant())
    }

    pub fn translation_x(&mut self, dx: f64) -> &mut Self {
        self.start.add_x(dx);
        self.end.add_x(dx);
        self
    }

    pub fn translation_y(&mut self, dy: f64) -> &mut Self {
        self.start.add_y(dy);
        self.end.add_y(dy);
        self
    }

    #[inline]
    pub fn translation(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.translation_x(dx).translation_y(dy)
    }

    pub fn mirror(&mut self) -> &mut Self {
        self.start.mirror();
        self.end.mirror();
        self
    }

    pub fn mirror_x(&mut self) -> &mut Self {
        self.start.mirror_x();
        self.end.mirror_x();
        self
    }

    pub fn mirror_y(&mut self) -> &mut Self {
        self.start.mirror_y();
        self.end.mirror_y();
        self
    }

    /// Rotates `start` about `end` by `angle` degrees; `end` stays put.
    pub fn rotate_with_end_point(&mut self, angle: f64) -> &mut Self {
        let pivot = self.end;
        self.start.rotate_with(pivot, angle);
        self
    }

    /// Rotates `end` about `start` by `angle` degrees; `start` stays put.
    pub fn rotate_with_start_point(&mut self, angle: f64) -> &mut Self {
        let pivot = self.start;
        self.end.rotate_with(pivot, angle);
        self
    }

    /// Rotates both endpoints about `pivot` by `angle` degrees.
    pub fn rotate_with_point(&mut self, pivot: Point, angle: f64) -> &mut Self {
        self.start.rotate_with(pivot, angle);
        self.end.rotate_with(pivot, angle);
        self
    }

    /// Rotates about [`Line::center`] by `angle` degrees.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let center = self.center();
        self.rotate_with_point(center, angle)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line{{({}), ({})}}", self.start, self.end)
    }
}

impl From<(Point, Point)> for Line {
    fn from((start, end): (Point, Point)) -> Self {
        Self::new(start, end)
    }
}

impl From<Line> for (Point, Point) {
    fn from(l: Line) -> Self {
        (l.start, l.end)
    }
}
