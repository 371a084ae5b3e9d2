//! Graham-scan construction.
//!
//! Steps (all in place on `Hull2::boundary`):
//! 1. Move the pivot (lowest point) to slot 0 and sort the rest CCW by angle.
//! 2. Flag redundant candidates: all but the farthest on each ray from the
//!    pivot, and anything coincident with the pivot. This is a separate pass
//!    over the sorted list so the comparator stays a pure total order.
//! 3. Compact away flagged entries.
//! 4. Left-turn sweep using the caller's scratch stack, then copy back.
//!
//! Complexity: O(s log s) for `s` candidates.

use std::cmp::Ordering;

use super::predicates::{area_sign, left};
use super::types::{FlaggedIndex, Hull2, HullError, Point};
use crate::stack::BoundedStack;

impl Hull2 {
    /// Rebuild the boundary from the current candidates.
    ///
    /// No-op on a clean hull. On error the hull stays dirty; candidates may
    /// have been reordered and pruned, which keeps them a valid candidate set,
    /// so appending more points and retrying is fine.
    pub fn compute_hull(
        &mut self,
        scratch: &mut BoundedStack<FlaggedIndex>,
    ) -> Result<(), HullError> {
        if !self.dirty {
            return Ok(());
        }
        let count = self.boundary.len();
        if count < 3 {
            tracing::debug!(count, "compute_hull: too few points");
            return Err(HullError::TooFewPoints { count });
        }
        if scratch.capacity() < count {
            return Err(HullError::ScratchTooSmall {
                needed: count,
                capacity: scratch.capacity(),
            });
        }

        self.sort_about_pivot();
        self.flag_redundant();
        self.squash();

        let survivors = self.boundary.len();
        if survivors < 3 {
            tracing::debug!(count, survivors, "compute_hull: collinear input");
            return Err(HullError::Collinear { survivors });
        }

        self.graham(scratch)?;
        self.copy_stack(scratch)?;
        self.dirty = false;
        tracing::trace!(
            candidates = count,
            boundary = self.boundary.len(),
            "compute_hull"
        );
        Ok(())
    }

    fn sort_about_pivot(&mut self) {
        self.boundary.swap(0, self.lowest);
        self.lowest = 0;
        for f in &mut self.boundary {
            f.remove = false;
        }
        let pivot = *self.point_of(self.boundary[0]);
        let points = &self.points;
        self.boundary[1..].sort_by(|b, c| polar_order(points, &pivot, *b, *c));
    }

    /// Walk runs of candidates on one ray (collinear with the pivot within
    /// `AREA_EPS`) and keep only the farthest of each run.
    fn flag_redundant(&mut self) {
        let pivot = *self.point_of(self.boundary[0]);
        let n = self.boundary.len();
        let mut i = 1;
        while i < n {
            let head = *self.point_of(self.boundary[i]);
            if head == pivot {
                // Pivot duplicates sort last.
                for f in &mut self.boundary[i..] {
                    f.remove = true;
                }
                break;
            }
            let mut best = i;
            let mut j = i + 1;
            while j < n {
                let p = *self.point_of(self.boundary[j]);
                if p == pivot || area_sign(&pivot, &head, &p) != 0 {
                    break;
                }
                let cand = self.boundary[j];
                let kept = self.boundary[best];
                if farther(&pivot, cand, &p, kept, self.point_of(kept)) {
                    best = j;
                }
                j += 1;
            }
            for k in i..j {
                if k != best {
                    self.boundary[k].remove = true;
                }
            }
            i = j;
        }
    }

    fn squash(&mut self) {
        self.boundary.retain(|f| !f.remove);
    }

    fn graham(&self, stack: &mut BoundedStack<FlaggedIndex>) -> Result<(), HullError> {
        stack.clear();
        // The pivot and the first point by angle are always on the hull.
        stack.push(self.boundary[0])?;
        stack.push(self.boundary[1])?;

        let mut i = 2;
        while i < self.boundary.len() {
            let (Some(i1), Some(i2)) = (stack.peek(1), stack.peek(0)) else {
                unreachable!("scan stack holds the pivot and first point");
            };
            let p3 = self.boundary[i];
            if left(self.point_of(i1), self.point_of(i2), self.point_of(p3)) {
                stack.push(p3)?;
                i += 1;
            } else if stack.count() > 2 {
                stack.pop()?;
            } else {
                // p3 sits on the pivot's first ray within AREA_EPS (its run was
                // split by rounding). Keep the farther of the two.
                let pivot = self.point_of(i1);
                if farther(pivot, p3, self.point_of(p3), i2, self.point_of(i2)) {
                    stack.pop()?;
                    stack.push(p3)?;
                }
                i += 1;
            }
        }
        Ok(())
    }

    fn copy_stack(&mut self, stack: &mut BoundedStack<FlaggedIndex>) -> Result<(), HullError> {
        let n = stack.count();
        for slot in (0..n).rev() {
            self.boundary[slot] = stack.pop()?;
        }
        self.boundary.truncate(n);
        debug_assert!(stack.is_empty(), "scratch stack drained");
        Ok(())
    }
}

/// Exact CCW angular order around `pivot`. Candidates on the same ray come
/// farthest first, then by descending point index; pivot duplicates last.
fn polar_order(points: &[Point], pivot: &Point, b: FlaggedIndex, c: FlaggedIndex) -> Ordering {
    if b.point == c.point {
        return Ordering::Equal;
    }
    let pb = &points[b.point as usize];
    let pc = &points[c.point as usize];
    match (pb == pivot, pc == pivot) {
        (true, true) => return c.point.cmp(&b.point),
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let (bx, by) = offset(pivot, pb);
    let (cx, cy) = offset(pivot, pc);
    let cross = bx * cy - cx * by;
    if cross > 0.0 {
        return Ordering::Less;
    }
    if cross < 0.0 {
        return Ordering::Greater;
    }
    let db = bx.abs().max(by.abs());
    let dc = cx.abs().max(cy.abs());
    dc.total_cmp(&db).then_with(|| c.point.cmp(&b.point))
}

#[inline]
fn offset(pivot: &Point, p: &Point) -> (f64, f64) {
    (
        f64::from(p.x) - f64::from(pivot.x),
        f64::from(p.y) - f64::from(pivot.y),
    )
}

/// `b` is farther from `pivot` than `c` along their shared ray: strictly
/// farther on either axis, or equally far with the larger point index.
fn farther(pivot: &Point, b: FlaggedIndex, pb: &Point, c: FlaggedIndex, pc: &Point) -> bool {
    let eps = f32::EPSILON;
    let dx = (pb.x - pivot.x).abs() - (pc.x - pivot.x).abs();
    let dy = (pb.y - pivot.y).abs() - (pc.y - pivot.y).abs();
    if dx > eps || dy > eps {
        true
    } else if dx < -eps || dy < -eps {
        false
    } else {
        b.point > c.point
    }
}
