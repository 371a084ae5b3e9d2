//! Bounded-memory 2D convex hulls.
//!
//! - `stack`: fixed-capacity LIFO used as scratch space during construction.
//! - `hull`: point buffer, Graham-scan construction, point-in-hull and
//!   hull-hull intersection tests.
//! - `sample`: seeded Gaussian point clusters for demos, tests, and benches.
//!
//! Typical use:
//! ```
//! use hull2d::prelude::*;
//!
//! let mut hull = Hull2::new();
//! let mut scratch = hull.scratch_stack().unwrap();
//! hull.add_points(&[
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(2.0, 0.0),
//!     Vec2::new(2.0, 2.0),
//!     Vec2::new(0.0, 2.0),
//!     Vec2::new(1.0, 1.0),
//! ])
//! .unwrap();
//! hull.compute_hull(&mut scratch).unwrap();
//! assert_eq!(hull.boundary().len(), 4);
//! assert!(hull.point_in_hull(&Vec2::new(1.0, 1.0)));
//! ```

pub mod hull;
pub mod sample;
pub mod stack;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{FlaggedIndex, Hull2, HullCfg, HullError, Point};
pub use stack::{BoundedStack, StackError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        FlaggedIndex, Hull2, HullCfg, HullError, Point, MAX_POINTS_PER_HULL,
    };
    pub use crate::sample::{demo_clusters, gaussian_cluster, ClusterCfg};
    pub use crate::stack::{BoundedStack, StackError};
    pub use nalgebra::Vector2 as Vec2;
}
