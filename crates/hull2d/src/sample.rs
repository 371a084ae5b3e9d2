//! Seeded Gaussian point clusters.
//!
//! Purpose
//! - Feed hulls with reproducible scattered points for the CLI driver,
//!   randomized tests, and benchmarks.
//!
//! Model
//! - Each coordinate is `center + sigma * z` with `z ~ N(0, 1)` drawn by the
//!   Box-Muller transform from two uniforms on [0, 1).
//! - `demo_clusters` draws two clusters interleaved from one `StdRng`, so a
//!   seed alone replays the whole pair.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::Point;

/// Cluster centre and per-axis standard deviation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterCfg {
    pub center: Point,
    pub sigma: Point,
}

impl Default for ClusterCfg {
    fn default() -> Self {
        Self {
            center: Vector2::zeros(),
            sigma: Vector2::new(0.15, 0.15),
        }
    }
}

impl ClusterCfg {
    #[inline]
    pub fn new(center: Point, sigma: f32) -> Self {
        Self {
            center,
            sigma: Vector2::new(sigma, sigma),
        }
    }

    /// One point from this cluster.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        let x = randn(rng) as f32 * self.sigma.x + self.center.x;
        let y = randn(rng) as f32 * self.sigma.y + self.center.y;
        Vector2::new(x, y)
    }
}

/// Standard normal deviate (Box-Muller). `u1` is redrawn while too close to
/// zero for `ln`.
pub fn randn<R: Rng>(rng: &mut R) -> f64 {
    let mut u1: f64 = rng.gen();
    while u1 <= f64::EPSILON {
        u1 = rng.gen();
    }
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

pub fn gaussian_cluster<R: Rng>(rng: &mut R, cfg: &ClusterCfg, count: usize) -> Vec<Point> {
    (0..count).map(|_| cfg.sample(rng)).collect()
}

/// Lower-left and upper-right clusters, centred at `(-0.5, -0.5)` and
/// `(0.5, 0.5)`, `count` points each.
pub fn demo_clusters(seed: u64, count: usize, sigma: f32) -> (Vec<Point>, Vec<Point>) {
    let lower = ClusterCfg::new(Vector2::new(-0.5, -0.5), sigma);
    let upper = ClusterCfg::new(Vector2::new(0.5, 0.5), sigma);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = Vec::with_capacity(count);
    let mut b = Vec::with_capacity(count);
    for _ in 0..count {
        a.push(lower.sample(&mut rng));
        b.push(upper.sample(&mut rng));
    }
    (a, b)
}
