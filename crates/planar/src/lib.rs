//! Planar geometry: points and directed line segments.
//!
//! Conventions
//! - Coordinates are `f64`. Angles passed to rotations are in degrees,
//!   counter-clockwise positive; derived angles are available in both units.
//! - One mutation discipline: transforms take `&mut self`, mutate in place and
//!   return `&mut Self` for chaining. Queries return values and never mutate.
//! - Undefined slopes are `None`. Other degenerate arithmetic follows IEEE-754
//!   (∞/NaN); nothing panics and nothing returns an error.
//! - Predicates are exact. Tolerant variants are opt-in and end in `_eps`.

pub mod line;
pub mod point;
pub mod sample;

pub use line::Line;
pub use point::Point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Suggested tolerance for the `_eps` predicates at O(1) coordinate scales.
pub const EPS: f64 = 1e-9;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{draw_line, draw_lines, draw_point, Bounds2, ReplayToken};
    pub use crate::{Line, Point, EPS};
    pub use nalgebra::Vector2 as Vec2;
}
