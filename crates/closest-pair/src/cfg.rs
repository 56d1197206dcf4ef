//! Tuning constants for the solver (internal).
//!
//! Policy
//! - The leaf size is the only knob. Any small constant keeps the result
//!   exact; the bounds below keep the exhaustive base case O(1).

/// Subranges of at most this many points are solved exhaustively.
pub(crate) const DEFAULT_LEAF_SIZE: usize = 4;
/// Below two points a leaf cannot split any further.
pub(crate) const MIN_LEAF_SIZE: usize = 2;
/// Above this the base case stops being a constant-cost step.
pub(crate) const MAX_LEAF_SIZE: usize = 32;
