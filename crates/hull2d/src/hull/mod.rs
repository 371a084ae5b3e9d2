//! Bounded-memory 2D convex hulls (Graham scan) and convex intersection.
//!
//! Purpose
//! - Collect points into a fixed-capacity buffer, rebuild the convex boundary
//!   on demand, and answer point-in-hull and hull-hull intersection queries.
//! - Construction borrows a caller-owned scratch stack, so one stack can serve
//!   many hulls computed one after another.
//!
//! Lifecycle
//! - `add_point`/`add_points` mark the hull dirty.
//! - `compute_hull` sorts candidates by angle around the lowest point, drops
//!   redundant collinear ones, sweeps left turns, and marks the hull clean.
//! - Queries require a clean hull and panic otherwise.
//!
//! Layout
//! - `types.rs` (data, config, mutators), `predicates.rs` (orientation and
//!   segment tests), `build.rs` (construction), `intersect.rs` (queries).
//!
//! References
//! - J. O'Rourke, Computational Geometry in C, 2nd ed.: ch. 3 (Graham scan),
//!   sec. 7.6 (convex polygon intersection).

mod build;
mod intersect;
pub mod predicates;
mod types;

pub use predicates::{area_sign, collinear, left, left_on, seg_seg_intersect, AREA_EPS};
pub use types::{
    FlaggedIndex, Hull2, HullCfg, HullError, Point, CORNERS_PER_BLOB, MAX_BLOBS_PER_GROUP,
    MAX_POINTS_PER_HULL,
};
