//! Hull data types, capacity configuration, and point mutators.
//!
//! - `Point`: single-precision 2D point.
//! - `FlaggedIndex`: boundary reference into the point buffer plus a removal flag.
//! - `HullCfg`: capacity bound for one hull.
//! - `Hull2`: point buffer, boundary list, lowest-point tracking, dirty flag.
//!
//! Code cross-refs: `build::compute_hull`, `intersect::{point_in_hull, check_intersect}`

use std::fmt;

use nalgebra::Vector2;

use crate::stack::{BoundedStack, StackError};

/// Points are stored in single precision; predicates promote to f64.
pub type Point = Vector2<f32>;

pub const CORNERS_PER_BLOB: usize = 8;
pub const MAX_BLOBS_PER_GROUP: usize = 256;
/// Default upper bound on points per hull.
pub const MAX_POINTS_PER_HULL: usize = MAX_BLOBS_PER_GROUP * CORNERS_PER_BLOB;

/// Reference to `Hull2::points[point]`. `remove` is scratch state of a
/// computation and is always false outside of one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlaggedIndex {
    pub point: u32,
    pub remove: bool,
}

impl FlaggedIndex {
    #[inline]
    pub fn new(point: u32) -> Self {
        Self {
            point,
            remove: false,
        }
    }
}

/// Hull configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    /// Maximum number of points a hull accepts before `add_point` fails.
    pub max_points: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS_PER_HULL,
        }
    }
}

/// Failure modes of hull mutation and construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Appending `requested` points would exceed `max_points`.
    Full { max_points: usize, requested: usize },
    /// Point `index` of the appended batch has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// Fewer than three candidates before sorting.
    TooFewPoints { count: usize },
    /// Fewer than three candidates left once collinear points were dropped.
    Collinear { survivors: usize },
    /// Scratch stack cannot hold every candidate.
    ScratchTooSmall { needed: usize, capacity: usize },
    Stack(StackError),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::Full {
                max_points,
                requested,
            } => write!(
                f,
                "hull capacity exceeded: {requested} more point(s) do not fit in {max_points}"
            ),
            HullError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            HullError::TooFewPoints { count } => {
                write!(f, "need at least 3 points to build a hull, have {count}")
            }
            HullError::Collinear { survivors } => write!(
                f,
                "points are collinear ({survivors} candidate(s) left after removing redundant points)"
            ),
            HullError::ScratchTooSmall { needed, capacity } => write!(
                f,
                "scratch stack holds {capacity} items, computation needs {needed}"
            ),
            HullError::Stack(e) => write!(f, "scratch stack: {e}"),
        }
    }
}

impl std::error::Error for HullError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HullError::Stack(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StackError> for HullError {
    fn from(e: StackError) -> Self {
        HullError::Stack(e)
    }
}

/// Bounded-memory 2D convex hull.
///
/// Invariants:
/// - `boundary.len() <= points.len()`.
/// - `!dirty` ⇒ `boundary` is the CCW convex boundary of `points`, starting at
///   the lowest point, `len >= 3`, no entry flagged.
/// - `boundary[lowest]` is the lowest candidate (min y, then max x).
#[derive(Clone, Debug)]
pub struct Hull2 {
    pub(super) points: Vec<Point>,
    pub(super) boundary: Vec<FlaggedIndex>,
    pub(super) lowest: usize,
    pub(super) dirty: bool,
    pub(super) max_points: usize,
}

impl Default for Hull2 {
    fn default() -> Self {
        Self::with_cfg(HullCfg::default())
    }
}

/// Strict lowest-point order: smaller y wins, equal y falls back to larger x.
#[inline]
fn is_lower(p: &Point, than: &Point) -> bool {
    p.y < than.y || (p.y == than.y && p.x > than.x)
}

fn ensure_finite(ps: &[Point]) -> Result<(), HullError> {
    match ps.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}

impl Hull2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: HullCfg) -> Self {
        Self {
            points: Vec::with_capacity(cfg.max_points),
            boundary: Vec::with_capacity(cfg.max_points),
            lowest: 0,
            dirty: true,
            max_points: cfg.max_points,
        }
    }

    /// Reset to the empty, dirty state. Storage is kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.boundary.clear();
        self.lowest = 0;
        self.dirty = true;
    }

    /// Scratch stack large enough for any computation on this hull.
    pub fn scratch_stack(&self) -> Result<BoundedStack<FlaggedIndex>, StackError> {
        BoundedStack::with_capacity(self.max_points)
    }

    /// Append one point and register it as a boundary candidate.
    /// Coordinates must be finite.
    pub fn add_point(&mut self, p: Point) -> Result<(), HullError> {
        self.ensure_room(1)?;
        ensure_finite(std::slice::from_ref(&p))?;
        self.push_candidate(p);
        self.dirty = true;
        Ok(())
    }

    /// Append a batch; same end state as calling `add_point` in order.
    /// Nothing is written if the whole batch does not fit or any point is
    /// non-finite.
    pub fn add_points(&mut self, ps: &[Point]) -> Result<(), HullError> {
        self.ensure_room(ps.len())?;
        ensure_finite(ps)?;
        if ps.is_empty() {
            return Ok(());
        }
        self.points.reserve(ps.len());
        self.boundary.reserve(ps.len());
        for &p in ps {
            self.push_candidate(p);
        }
        self.dirty = true;
        Ok(())
    }

    fn ensure_room(&self, requested: usize) -> Result<(), HullError> {
        if self.points.len() + requested > self.max_points {
            return Err(HullError::Full {
                max_points: self.max_points,
                requested,
            });
        }
        Ok(())
    }

    fn push_candidate(&mut self, p: Point) {
        let idx = self.points.len() as u32;
        self.points.push(p);
        let slot = self.boundary.len();
        if slot == 0 || is_lower(&p, &self.points[self.boundary[self.lowest].point as usize]) {
            self.lowest = slot;
        }
        self.boundary.push(FlaggedIndex::new(idx));
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Candidates while dirty, hull vertices (CCW) once computed.
    #[inline]
    pub fn boundary(&self) -> &[FlaggedIndex] {
        &self.boundary
    }

    /// Points referenced by `boundary()`, in order.
    pub fn boundary_points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.boundary.iter().map(|f| self.points[f.point as usize])
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Position within `boundary()` of the lowest candidate.
    #[inline]
    pub fn lowest_index(&self) -> usize {
        self.lowest
    }

    /// The lowest candidate point, if any.
    pub fn lowest_point(&self) -> Option<Point> {
        self.boundary
            .get(self.lowest)
            .map(|f| self.points[f.point as usize])
    }

    #[inline]
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    #[inline]
    pub(super) fn point_of(&self, f: FlaggedIndex) -> &Point {
        &self.points[f.point as usize]
    }
}
