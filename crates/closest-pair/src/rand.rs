//! Random integer point clouds with replay tokens.
//!
//! Purpose
//! - Reproducible inputs for differential tests, benches and the CLI `gen`
//!   command.
//!
//! Model
//! - `count` points uniform in the square `[-extent, extent]²`; a fraction
//!   `duplicate_frac` of them are copies of earlier points, so zero
//!   distances show up on demand.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use crate::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for cloud parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum CloudError {
    InvalidParams { reason: String },
}

impl CloudError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid cloud params: {reason}"),
        }
    }
}

impl std::error::Error for CloudError {}

/// Point cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Half-width of the sampling square. Must be >= 0.
    pub extent: i32,
    /// Share of points copied from earlier ones, in [0, 1].
    pub duplicate_frac: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1_000,
            extent: 1_000_000,
            duplicate_frac: 0.0,
        }
    }
}

impl CloudCfg {
    fn validate(&self) -> Result<(), CloudError> {
        if self.extent < 0 {
            return Err(CloudError::invalid("extent must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.duplicate_frac) {
            return Err(CloudError::invalid("duplicate_frac must lie in [0, 1]"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a point cloud. Same `(cfg, tok)` gives the same points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, CloudError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let e = cfg.extent;
    let mut pts: Vec<Point> = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        if !pts.is_empty() && cfg.duplicate_frac > 0.0 && rng.gen_bool(cfg.duplicate_frac) {
            let src = pts[rng.gen_range(0..pts.len())];
            pts.push(src);
        } else {
            pts.push(Point::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e)));
        }
    }
    Ok(pts)
}
