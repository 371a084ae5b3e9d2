//! Point-in-hull and hull-hull intersection queries.
//!
//! Both hulls must be computed. The pairwise test walks the two boundaries
//! with the advance rules of the rotating-edges convex intersection algorithm
//! (O'Rourke, Computational Geometry in C, 7.6), stopping at the first edge
//! hit instead of building the overlap polygon. If no edges meet, one hull
//! can still contain the other, which a single vertex test settles.
//!
//! Complexity: O(n + m) for boundaries of size n and m.

use super::predicates::{left, left_on, seg_seg_intersect, AREA_EPS};
use super::types::{Hull2, Point};

impl Hull2 {
    /// `p` lies inside or on the boundary.
    ///
    /// Panics if the hull is dirty.
    pub fn point_in_hull(&self, p: &Point) -> bool {
        assert!(!self.dirty, "point_in_hull on a dirty hull");
        let n = self.boundary.len();
        (0..n).all(|i| {
            let a = self.vertex(i);
            let b = self.vertex((i + 1) % n);
            left_on(a, b, p)
        })
    }

    /// The two convex regions share at least one point (edges cross or touch,
    /// or one contains the other).
    ///
    /// Panics if either hull is dirty.
    pub fn check_intersect(&self, other: &Hull2) -> bool {
        assert!(
            !self.dirty && !other.dirty,
            "check_intersect on a dirty hull"
        );
        let n = self.boundary.len();
        let m = other.boundary.len();

        let mut a = 0usize;
        let mut b = 0usize;
        loop {
            let a0 = self.vertex(a % n);
            let a1 = self.vertex((a + 1) % n);
            let b0 = other.vertex(b % m);
            let b1 = other.vertex((b + 1) % m);

            if seg_seg_intersect(a0, a1, b0, b1) {
                tracing::trace!(edge_a = a % n, edge_b = b % m, "hulls intersect at edges");
                return true;
            }

            let cross = f64::from((a1.x - a0.x) * (b1.y - b0.y) - (a1.y - a0.y) * (b1.x - b0.x));
            let a_head_left_of_b = left(b0, b1, a1);
            let b_head_left_of_a = left(a0, a1, b1);

            if cross < -AREA_EPS {
                if a_head_left_of_b {
                    b += 1;
                } else {
                    a += 1;
                }
            } else if b_head_left_of_a {
                a += 1;
            } else {
                b += 1;
            }

            // Both boundaries fully swept, or one lapped twice.
            if !((a < n || b < m) && a < 2 * n && b < 2 * m) {
                break;
            }
        }

        let contained = other.point_in_hull(self.vertex(0)) || self.point_in_hull(other.vertex(0));
        tracing::trace!(contained, "no edge hit, containment fallback");
        contained
    }

    #[inline]
    fn vertex(&self, i: usize) -> &Point {
        self.point_of(self.boundary[i])
    }
}
