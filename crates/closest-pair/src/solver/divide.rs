//! Divide-and-conquer recursion over a slice sorted by (x, y).
//!
//! Each call leaves its slice sorted by y and tightens the shared `Best`.
//! The scratch slice is allocated once per solve with the full length; a
//! call only touches the prefix matching its own slice, first as the merge
//! target and then as the strip window.

use super::types::Best;
use crate::point::{axis_sq, Point};

/// Solve over `points`, which must already be sorted by x then y.
pub(crate) fn solve_sorted(points: &mut [Point], leaf_size: usize) -> Best {
    let mut best = Best::new();
    if points.len() < 2 {
        return best;
    }
    let mut scratch = vec![Point::default(); points.len()];
    solve_range(points, &mut scratch, leaf_size, &mut best);
    best
}

fn solve_range(points: &mut [Point], scratch: &mut [Point], leaf_size: usize, best: &mut Best) {
    let n = points.len();
    if n <= leaf_size {
        for i in 0..n {
            for j in i + 1..n {
                best.offer(points[i], points[j]);
            }
        }
        points.sort_by_key(|p| p.y);
        return;
    }

    // n > leaf_size >= 2, so both halves are non-empty and strictly smaller.
    let mid = (n - 1) / 2;
    let x_mid = points[mid].x;
    {
        let (lo, hi) = points.split_at_mut(mid + 1);
        let hi_len = hi.len();
        solve_range(lo, &mut scratch[..mid + 1], leaf_size, best);
        solve_range(hi, &mut scratch[..hi_len], leaf_size, best);
    }

    merge_by_y(points, mid + 1, &mut scratch[..n]);
    scan_strip(points, x_mid, &mut scratch[..n], best);
}

/// Stable merge of the y-sorted runs `points[..split]` and `points[split..]`.
fn merge_by_y(points: &mut [Point], split: usize, scratch: &mut [Point]) {
    let n = points.len();
    let (mut i, mut j, mut k) = (0, split, 0);
    while i < split && j < n {
        if points[j].y < points[i].y {
            scratch[k] = points[j];
            j += 1;
        } else {
            scratch[k] = points[i];
            i += 1;
        }
        k += 1;
    }
    let rest = split - i;
    scratch[k..k + rest].copy_from_slice(&points[i..split]);
    k += rest;
    debug_assert_eq!(k, j);
    scratch[k..].copy_from_slice(&points[j..]);
    points.copy_from_slice(scratch);
}

/// Walk the y-sorted slice and compare points near the dividing line.
///
/// The backward walk stops at the first y-gap not below the current bound,
/// which shrinks as closer pairs turn up.
fn scan_strip(points: &[Point], x_mid: i32, strip: &mut [Point], best: &mut Best) {
    let mut len = 0;
    for &p in points {
        if axis_sq(p.x, x_mid) >= best.bound() {
            continue;
        }
        for &q in strip[..len].iter().rev() {
            if axis_sq(p.y, q.y) >= best.bound() {
                break;
            }
            best.offer(p, q);
        }
        strip[len] = p;
        len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn merge_interleaves_and_keeps_left_first_on_ties() {
        let mut p = pts(&[(0, 1), (1, 3), (2, 5), (9, 2), (8, 3), (7, 6)]);
        let mut scratch = vec![Point::default(); p.len()];
        merge_by_y(&mut p, 3, &mut scratch);
        let ys: Vec<i32> = p.iter().map(|q| q.y).collect();
        assert_eq!(ys, vec![1, 2, 3, 3, 5, 6]);
        // Equal y: the left run's point comes first.
        assert_eq!(p[2], Point::new(1, 3));
        assert_eq!(p[3], Point::new(8, 3));
    }

    #[test]
    fn merge_handles_exhausted_runs() {
        let mut p = pts(&[(0, 10), (0, 11), (1, 0), (1, 1)]);
        let mut scratch = vec![Point::default(); p.len()];
        merge_by_y(&mut p, 2, &mut scratch);
        assert_eq!(p, pts(&[(1, 0), (1, 1), (0, 10), (0, 11)]));
    }

    #[test]
    fn strip_finds_pair_across_line() {
        // y-sorted; the close pair straddles x = 0.
        let p = pts(&[(-1, 0), (5, 1), (1, 1), (-9, 3)]);
        let mut strip = vec![Point::default(); p.len()];
        let mut best = Best::new();
        best.offer(Point::new(100, 100), Point::new(103, 104));
        scan_strip(&p, 0, &mut strip, &mut best);
        let pair = best.into_pair().unwrap();
        assert_eq!(pair.dist_sq, 5);
    }

    #[test]
    fn leaves_slice_sorted_by_y() {
        let mut p = pts(&[(0, 9), (1, 3), (2, 7), (3, 1), (4, 4), (5, 0), (6, 8)]);
        let best = solve_sorted(&mut p, 2);
        assert!(p.windows(2).all(|w| w[0].y <= w[1].y));
        assert_eq!(best.bound(), 5);
    }
}
