//! O(n²) reference: every pair, squared distances only.

use super::types::{Best, ClosestPair};
use crate::point::Point;

/// Closest pair by exhaustive comparison. `None` for fewer than two points.
pub fn brute_force(points: &[Point]) -> Option<ClosestPair> {
    let mut best = Best::new();
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            best.offer(a, b);
        }
    }
    best.into_pair()
}
