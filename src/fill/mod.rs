//! Bucket fill for line-art masks.
//!
//! The mask holds one byte per pixel: line pixels carry a boundary value,
//! everything else is empty. A fill from a seed marks the connected empty
//! region in the mask, and the painter then recolors the matching pixels of
//! a separate 32-bit color buffer.
//!
//! - **Scanline engine** ([`fill_mask`]): run-at-a-time flood fill with
//!   4- or 8-connectivity, reporting the bounding rect of what it marked
//! - **Painter** ([`paint_region`]): recolors marked cells inside a rect
//! - **Seed fills** ([`fill_seed`], [`fill_many_seeds`]): skip rules for
//!   line pixels and already-painted regions, plus union of the results
//!
//! Each stage has a grid form working on [`Grid`] / [`GridMut`] and a raw
//! form taking flat buffers with byte strides.

pub mod error;
pub mod grid;
pub mod paint;
pub mod rect;
pub mod scanline;
pub mod seeds;
pub mod segment;

pub use error::FillError;
pub use grid::{Grid, GridMut};
pub use paint::{paint_masked_region, paint_region};
pub use rect::{FillBox, Rect};
pub use scanline::{fill_mask, flood_fill_mask, Connectivity};
pub use seeds::{
    fill_many_seeds, fill_seed, flood_fill_and_paint_many_seeds, interleaved_seeds, BatchFill,
    FillOptions, SeedOutcome,
};
pub use segment::{Direction, Segment, SegmentStack};
