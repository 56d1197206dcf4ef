//! Solve a few seeded clouds and cross-check against brute force.
//!
//! Usage:
//!   cargo run -p closest-pair --example random_cloud -- 2000
//!
//! Prints n, the distance, and the pair for five draws.

use closest_pair::prelude::*;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000);
    let cfg = CloudCfg {
        count,
        extent: 10_000,
        duplicate_frac: 0.0,
    };
    let mut tok = ReplayToken { seed: 2025, index: 0 };
    for i in 0..5 {
        let pts = draw_cloud(cfg, tok).unwrap();
        let reference = brute_force(&pts).map(|p| p.dist_sq);
        let mut solver: ClosestPairSolver = pts.into_iter().collect();
        match solver.closest_pair() {
            Some(pair) => {
                assert_eq!(Some(pair.dist_sq), reference);
                println!(
                    "draw {i}: n={count}, d={:.4}, pair={} {}",
                    pair.distance(),
                    pair.a,
                    pair.b
                );
            }
            None => println!("draw {i}: n={count}, no pair"),
        }
        tok = tok.next();
    }
}
