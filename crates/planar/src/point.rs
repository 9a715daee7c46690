//! Mutable 2D point.
//!
//! Conventions
//! - Coordinates are `f64` and assumed finite. `Eq`/`Hash` rely on that; a NaN
//!   coordinate makes a point unequal to itself.
//! - Transforms take `&mut self` and return `&mut Self` so calls chain:
//!   `p.add_x(1.0).mirror_y()`. Queries return by value.
//! - Angles passed to rotations are in degrees, positive = counter-clockwise.
//! - Point arithmetic is in place only: `+=`, `-=`, `*=`, `/=`, `%=` against
//!   another point, componentwise. There are no by-value `+`/`-` operators.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{AddAssign, DivAssign, MulAssign, RemAssign, SubAssign};

use nalgebra::{Rotation2, Vector2};
use tracing::trace;

use crate::line::Line;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn add_x(&mut self, dx: f64) -> &mut Self {
        self.x += dx;
        self
    }

    #[inline]
    pub fn add_y(&mut self, dy: f64) -> &mut Self {
        self.y += dy;
        self
    }

    #[inline]
    pub fn add(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.add_x(dx).add_y(dy)
    }

    /// Adds the coordinates of `other` to `self`.
    #[inline]
    pub fn add_point(&mut self, other: Point) -> &mut Self {
        self.add(other.x, other.y)
    }

    #[inline]
    pub fn move_x_to(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn move_y_to(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// `(x, y) -> (x + 1, y + 1)`.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.add(1.0, 1.0)
    }

    /// `(x, y) -> (x - 1, y - 1)`.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.add(-1.0, -1.0)
    }

    /// Point reflection through the origin.
    #[inline]
    pub fn mirror(&mut self) -> &mut Self {
        self.mirror_x().mirror_y()
    }

    /// Negates `x` (reflection across the y-axis).
    #[inline]
    pub fn mirror_x(&mut self) -> &mut Self {
        self.x = -self.x;
        self
    }

    /// Negates `y` (reflection across the x-axis).
    #[inline]
    pub fn mirror_y(&mut self) -> &mut Self {
        self.y = -self.y;
        self
    }

    /// Rotates `self` about `pivot` by `angle` degrees (counter-clockwise positive).
    ///
    /// `x' = (x-px)cosθ - (y-py)sinθ + px`, `y' = (x-px)sinθ + (y-py)cosθ + py`.
    pub fn rotate_with(&mut self, pivot: Point, angle: f64) -> &mut Self {
        let rot = Rotation2::new(angle.to_radians());
        let rotated = rot * (self.to_vector() - pivot.to_vector()) + pivot.to_vector();
        self.move_to(rotated.x, rotated.y)
    }

    /// Cartesian quadrant 1..=4, or 0 when the point lies on an axis.
    pub fn quadrant(&self) -> u8 {
        match (self.x, self.y) {
            (x, y) if x > 0.0 && y > 0.0 => 1,
            (x, y) if x < 0.0 && y > 0.0 => 2,
            (x, y) if x < 0.0 && y < 0.0 => 3,
            (x, y) if x > 0.0 && y < 0.0 => 4,
            _ => 0,
        }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    /// Midpoint of `self` and `other`, as a new point.
    ///
    /// Equal points yield the origin, not the shared point.
    pub fn center_to(&self, other: Point) -> Point {
        if *self == other {
            trace!(point = %self, "center of coincident points collapses to origin");
            return Point::origin();
        }
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Segment from `self` to `other`.
    #[inline]
    pub fn connect(self, other: Point) -> Line {
        Line::new(self, other)
    }

    /// Segment from `other` to `self`.
    #[inline]
    pub fn connect_to(self, other: Point) -> Line {
        Line::new(other, self)
    }

    /// See [`Line::contains_point`].
    #[inline]
    pub fn is_in_line(&self, line: &Line) -> bool {
        line.contains_point(*self)
    }

    /// Coordinatewise comparison with an explicit tolerance.
    #[inline]
    pub fn approx_eq(&self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2({:?}, {:?})", self.x, self.y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike.
        let mut x = self.x;
        if x == 0.0 {
            x = 0.0;
        }
        let mut y = self.y;
        if y == 0.0 {
            y = 0.0;
        }
        state.write_u64(x.to_bits());
        state.write_u64(y.to_bits());
    }
}

macro_rules! componentwise_assign {
    ($OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $OpAssign for Point {
            #[inline]
            fn $op_assign(&mut self, rhs: Point) {
                self.x = self.x $sym rhs.x;
                self.y = self.y $sym rhs.y;
            }
        }
    };
}

componentwise_assign!(AddAssign, add_assign, +);
componentwise_assign!(SubAssign, sub_assign, -);
componentwise_assign!(MulAssign, mul_assign, *);
componentwise_assign!(DivAssign, div_assign, /);
componentwise_assign!(RemAssign, rem_assign, %);

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}
