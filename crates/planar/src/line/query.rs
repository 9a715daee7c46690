//! Point queries against a segment.

use tracing::trace;

use super::Line;
use crate::point::Point;

impl Line {
    /// Whether `point` lies on the closed segment.
    ///
    /// Collinearity is the exact cross-product test
    /// `(px-sx)(ey-sy) == (py-sy)(ex-sx)`, combined with an inclusive
    /// bounding-box check. Callers needing tolerance use
    /// [`Line::contains_point_eps`] or round beforehand.
    pub fn contains_point(&self, point: Point) -> bool {
        let (s, e) = (self.start, self.end);
        (point.x - s.x) * (e.y - s.y) == (point.y - s.y) * (e.x - s.x)
            && (s.x.min(e.x)..=s.x.max(e.x)).contains(&point.x)
            && (s.y.min(e.y)..=s.y.max(e.y)).contains(&point.y)
    }

    /// [`Line::contains_point`] with the cross product and the box widened by `eps`.
    pub fn contains_point_eps(&self, point: Point, eps: f64) -> bool {
        let (s, e) = (self.start, self.end);
        let cross = (point.x - s.x) * (e.y - s.y) - (point.y - s.y) * (e.x - s.x);
        cross.abs() <= eps
            && (s.x.min(e.x) - eps..=s.x.max(e.x) + eps).contains(&point.x)
            && (s.y.min(e.y) - eps..=s.y.max(e.y) + eps).contains(&point.y)
    }

    /// Point at `relative_distance` from `online_point` along the inclination
    /// direction (negative distances go the other way).
    ///
    /// Shortcuts, in order: zero distance returns `online_point`; an
    /// `online_point` on the y-axis moves along y only; one on the x-axis moves
    /// along x only. These shortcuts ignore the segment's direction.
    pub fn get_on_line_one_point(&self, online_point: Point, relative_distance: f64) -> Point {
        if relative_distance == 0.0 {
            return online_point;
        }
        if online_point.x == 0.0 {
            trace!(point = %online_point, "on y-axis; offsetting along y");
            return Point::new(online_point.x, online_point.y + relative_distance);
        }
        if online_point.y == 0.0 {
            trace!(point = %online_point, "on x-axis; offsetting along x");
            return Point::new(online_point.x + relative_distance, online_point.y);
        }
        let distance = relative_distance.abs();
        let angle = self.angle_rad();
        let (dx, dy) = (distance * angle.cos(), distance * angle.sin());
        let mut out = online_point;
        if relative_distance < 0.0 {
            out.add(-dx, -dy);
        } else {
            out.add(dx, dy);
        }
        out
    }

    /// [`Line::get_on_line_one_point`] measured from `start`.
    #[inline]
    pub fn get_line_point_distance_to_start_point(&self, distance: f64) -> Point {
        self.get_on_line_one_point(self.start, distance)
    }
}
