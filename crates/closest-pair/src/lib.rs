//! Closest pair of points in the plane.
//!
//! Purpose
//! - Compute the minimum Euclidean distance between any two points of a
//!   finite set of integer points in O(n log n), via the classic
//!   divide-and-conquer scheme (sort by x, recurse, merge by y, scan strip).
//! - Keep the surface small: one solver, a brute-force reference, a text
//!   reader for the `N x1 y1 ... xN yN` format, and seeded point clouds.
//!
//! Numeric policy
//! - Coordinates are `i32`; squared distances are `u128` (`DistSq`), so the
//!   extreme corners of the `i32` plane never wrap. Only the final answer
//!   takes a square root.
//!
//! Code cross-refs: `solver::ClosestPairSolver`, `point::Point`,
//! `ingest::read_points`, `rand::draw_cloud`.

mod cfg;
pub mod ingest;
pub mod point;
pub mod rand;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{DistSq, Point};
pub use solver::{brute_force, closest_pair, ClosestPair, ClosestPairSolver, SolverCfg, NO_PAIR};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ingest::{format_points, parse_points, read_points, ParseError};
    pub use crate::point::{DistSq, Point};
    pub use crate::rand::{draw_cloud, CloudCfg, CloudError, ReplayToken};
    pub use crate::solver::{
        brute_force, closest_pair, ClosestPair, ClosestPairSolver, SolverCfg, NO_PAIR,
    };
}
