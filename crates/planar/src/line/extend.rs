//! Lengthening and shortening along the segment's own direction.
//!
//! The displacement is split per axis: the inclination angle is folded into
//! `[0°, 90°]`, giving magnitudes `|Δ|cos` and `|Δ|sin`, and each axis takes its
//! sign from where `end` lies relative to `start`. Axis-parallel segments skip
//! the trigonometry and move a single coordinate.

use tracing::debug;

use super::Line;

/// Endpoint that moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

impl Line {
    /// Lengthens (`delta > 0`) or shortens (`delta < 0`) the segment past `end`.
    /// `start` is unchanged.
    #[inline]
    pub fn extend_length(&mut self, delta: f64) -> &mut Self {
        self.extend_from(Side::End, delta)
    }

    /// Lengthens (`delta > 0`) or shortens (`delta < 0`) the segment past `start`.
    /// `end` is unchanged.
    #[inline]
    pub fn reverse_extend_length(&mut self, delta: f64) -> &mut Self {
        self.extend_from(Side::Start, delta)
    }

    fn extend_from(&mut self, side: Side, delta: f64) -> &mut Self {
        if delta == 0.0 {
            return self;
        }
        // Direction is read before anything moves.
        let up = self.end.y > self.start.y;
        let right = self.end.x > self.start.x;

        let (dx, dy) = if self.start.x == self.end.x {
            if self.start.y == self.end.y {
                debug!(line = %self, delta, "extending a zero-length segment along -y");
            }
            (0.0, delta)
        } else if self.start.y == self.end.y {
            (delta, 0.0)
        } else {
            let mut degrees = self.angle_degree();
            if degrees > 90.0 {
                degrees = 180.0 - degrees;
            }
            let folded = degrees.to_radians();
            (delta * folded.cos(), delta * folded.sin())
        };
        let dx = if right { dx } else { -dx };
        let dy = if up { dy } else { -dy };

        match side {
            Side::End => self.end.add(dx, dy),
            Side::Start => self.start.add(-dx, -dy),
        };
        self
    }
}
