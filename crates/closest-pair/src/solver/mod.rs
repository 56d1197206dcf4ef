//! Closest-pair solver (divide and conquer, O(n log n)).
//!
//! Purpose
//! - Own a growable point set and answer "minimum pairwise distance" for it.
//! - Keep the running minimum and the scratch buffer per solve call, so a
//!   reused solver never sees state from an earlier solve.
//!
//! Algorithm
//! - Sort once by (x, y). Recurse on halves split at the median index;
//!   subranges up to `leaf_size` points are compared exhaustively and then
//!   sorted by y.
//! - Merge the two y-sorted halves, then scan the strip around the dividing
//!   line `x = x_mid`, comparing each strip point only against earlier strip
//!   points whose y-gap is below the current minimum.
//!
//! Threading
//! - `solve` takes `&mut self`: one solve per instance at a time. Separate
//!   instances are independent and may be solved on separate threads.
//!
//! Code cross-refs: `divide::solve_sorted`, `brute::brute_force`, `types::Best`

mod brute;
mod divide;
mod types;

pub use brute::brute_force;
pub use types::{ClosestPair, SolverCfg};

use crate::point::Point;

/// Returned by [`ClosestPairSolver::solve`] when fewer than two points exist.
pub const NO_PAIR: f64 = -1.0;

/// Owns a point set and computes its closest pair.
#[derive(Clone, Debug, Default)]
pub struct ClosestPairSolver {
    points: Vec<Point>,
    cfg: SolverCfg,
}

impl ClosestPairSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: SolverCfg) -> Self {
        Self {
            points: Vec::new(),
            cfg,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            cfg: SolverCfg::default(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> SolverCfg {
        self.cfg
    }

    /// Append a point. Returns `self` for chaining.
    #[inline]
    pub fn add(&mut self, p: impl Into<Point>) -> &mut Self {
        self.points.push(p.into());
        self
    }

    /// Current points. After a solve these are in y-order, not insertion order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Closest pair and its squared distance; `None` for fewer than two points.
    ///
    /// Reorders the owned points. Solving again yields the same distance.
    pub fn closest_pair(&mut self) -> Option<ClosestPair> {
        let n = self.points.len();
        tracing::debug!(n, leaf_size = self.cfg.effective_leaf_size(), "closest_pair");
        if n < 2 {
            return None;
        }
        self.points.sort_unstable_by_key(|p| (p.x, p.y));
        let best = divide::solve_sorted(&mut self.points, self.cfg.effective_leaf_size());
        let pair = best.into_pair();
        if let Some(found) = &pair {
            tracing::debug!(n, dist_sq = %found.dist_sq, "closest_pair_done");
        }
        pair
    }

    /// Minimum pairwise distance, or [`NO_PAIR`] (−1) for fewer than two points.
    pub fn solve(&mut self) -> f64 {
        self.closest_pair().map_or(NO_PAIR, |pair| pair.distance())
    }
}

impl Extend<Point> for ClosestPairSolver {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point> for ClosestPairSolver {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            cfg: SolverCfg::default(),
        }
    }
}

/// One-shot closest pair over a borrowed slice (the slice is left untouched).
pub fn closest_pair(points: &[Point]) -> Option<ClosestPair> {
    let mut solver: ClosestPairSolver = points.iter().copied().collect();
    solver.closest_pair()
}
