//! Error type shared by the fill engine, the painter and the bindings.

use thiserror::Error;

use super::rect::FillBox;

/// Failure of a fill or paint call.
///
/// Seeds skipped by the multi-seed batch are not errors; they are
/// reported through [`SeedOutcome`](super::SeedOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// Seed lies outside the mask.
    #[error("seed ({x}, {y}) is outside the {width}x{height} mask")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// Buffer geometry does not describe `height` rows of `width` cells.
    #[error("invalid buffer layout: {0}")]
    InvalidLayout(String),
    /// Paint region does not fit inside the grid.
    #[error("region {region:?} does not fit the {width}x{height} grid")]
    RegionOutOfBounds {
        region: FillBox,
        width: usize,
        height: usize,
    },
    /// Marker equal to the boundary value would paint over line pixels.
    #[error("fill marker {0} is the boundary value")]
    MarkerIsBoundary(u8),
}
