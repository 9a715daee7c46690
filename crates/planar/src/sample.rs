//! Random points and segments in a box (replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property checks and benchmarks. A draw is fully
//!   determined by its `ReplayToken`, so failing cases can be replayed by index.
//!
//! Model
//! - Coordinates are uniform per axis of `Bounds2` over the half-open box
//!   `[min, max)`; rounding can rarely land exactly on `max`.
//! - A token `(seed, index)` is mixed into a single `StdRng`; one token yields
//!   one point or one segment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::line::Line;
use crate::point::Point;

/// Axis-aligned sampling box. `new` orders the corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square `[-half, half]²` around the origin.
    pub fn centered(half: f64) -> Self {
        let h = half.abs();
        Self::new(Point::new(-h, -h), Point::new(h, h))
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        let x = self.min.x + (self.max.x - self.min.x) * rng.gen::<f64>();
        let y = self.min.y + (self.max.y - self.min.y) * rng.gen::<f64>();
        Point::new(x, y)
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::centered(1.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

pub fn draw_point(bounds: Bounds2, tok: ReplayToken) -> Point {
    bounds.sample(&mut tok.to_std_rng())
}

/// Both endpoints come from the same token stream (`start` first).
pub fn draw_line(bounds: Bounds2, tok: ReplayToken) -> Line {
    let mut rng = tok.to_std_rng();
    let start = bounds.sample(&mut rng);
    let end = bounds.sample(&mut rng);
    Line::new(start, end)
}

/// `n` segments with tokens `(seed, 0..n)`.
pub fn draw_lines(bounds: Bounds2, seed: u64, n: usize) -> Vec<Line> {
    (0..n as u64)
        .map(|index| draw_line(bounds, ReplayToken::new(seed, index)))
        .collect()
}
