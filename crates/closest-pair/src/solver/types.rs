//! Solver configuration, result pair, and the running-minimum accumulator.

use crate::cfg::{DEFAULT_LEAF_SIZE, MAX_LEAF_SIZE, MIN_LEAF_SIZE};
use crate::point::{DistSq, Point};

/// Solver configuration.
///
/// `leaf_size` is clamped to `[2, 32]` when the solver runs; the result does
/// not depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverCfg {
    pub leaf_size: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF_SIZE,
        }
    }
}

impl SolverCfg {
    #[inline]
    pub fn with_leaf_size(leaf_size: usize) -> Self {
        Self {
            leaf_size: leaf_size.clamp(MIN_LEAF_SIZE, MAX_LEAF_SIZE),
        }
    }

    #[inline]
    pub(crate) fn effective_leaf_size(&self) -> usize {
        self.leaf_size.clamp(MIN_LEAF_SIZE, MAX_LEAF_SIZE)
    }
}

/// Two points at minimum distance, plus their exact squared distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosestPair {
    pub a: Point,
    pub b: Point,
    pub dist_sq: DistSq,
}

impl ClosestPair {
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.dist_sq as f64).sqrt()
    }
}

/// Running minimum over one solve call.
///
/// Starts at `DistSq::MAX` ("infinity"; no real pair reaches it) and only
/// ever decreases.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Best {
    dist_sq: DistSq,
    pair: Option<(Point, Point)>,
}

impl Best {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            dist_sq: DistSq::MAX,
            pair: None,
        }
    }

    /// Current bound on the squared distance.
    #[inline]
    pub(crate) fn bound(&self) -> DistSq {
        self.dist_sq
    }

    #[inline]
    pub(crate) fn offer(&mut self, a: Point, b: Point) {
        let d = a.dist_sq(b);
        if d < self.dist_sq {
            self.dist_sq = d;
            self.pair = Some((a, b));
        }
    }

    pub(crate) fn into_pair(self) -> Option<ClosestPair> {
        self.pair.map(|(a, b)| ClosestPair {
            a,
            b,
            dist_sq: self.dist_sq,
        })
    }
}
