//! Scanline flood fill over a byte mask.
//!
//! Works one horizontal run at a time. Each run on the stack remembers the
//! run it was found from, so expansion back towards that parent row only
//! scans the cells the parent could not have covered itself.

use serde::{Deserialize, Serialize};

use super::error::FillError;
use super::grid::GridMut;
use super::rect::{FillBox, Rect};
use super::segment::{Direction, Segment, SegmentStack};

/// Which neighbours count as connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Left, right, up, down.
    #[default]
    Four,
    /// Also the four diagonals.
    Eight,
}

impl Connectivity {
    /// How far a run's scan range is widened on each side of the neighbouring row.
    #[inline]
    pub fn margin(self) -> isize {
        match self {
            Connectivity::Four => 0,
            Connectivity::Eight => 1,
        }
    }

    /// Parse the `0` / `1` flag used by the C-style entry points.
    pub fn from_flag(flag: i32) -> Option<Self> {
        match flag {
            0 => Some(Connectivity::Four),
            1 => Some(Connectivity::Eight),
            _ => None,
        }
    }
}

/// Mark the maximal run of `val0` cells around `x` and return its inclusive bounds.
#[inline]
fn mark_run(row: &mut [u8], x: usize, val0: u8, marker: u8) -> (usize, usize) {
    row[x] = marker;
    let mut left = x;
    while left > 0 && row[left - 1] == val0 {
        left -= 1;
        row[left] = marker;
    }
    let mut right = x;
    while right + 1 < row.len() && row[right + 1] == val0 {
        right += 1;
        row[right] = marker;
    }
    (left, right)
}

/// Flood fill `mask` from `(seed_x, seed_y)`, writing `marker` into every cell
/// connected to the seed that holds the seed's original value.
///
/// Returns the bounding rect of the marked cells. When the seed already holds
/// `marker` nothing is written and the rect is the seed cell alone.
///
/// # Errors
/// [`FillError::OutOfBounds`] if the seed is not inside the mask.
pub fn fill_mask(
    mask: &mut GridMut<'_, u8>,
    seed_x: i64,
    seed_y: i64,
    marker: u8,
    connectivity: Connectivity,
) -> Result<Rect, FillError> {
    let mut stack = SegmentStack::for_grid(mask.width(), mask.height());
    fill_mask_with_stack(mask, seed_x, seed_y, marker, connectivity, &mut stack)
}

/// [`fill_mask`] using a caller-provided stack, which is empty again on return.
pub(crate) fn fill_mask_with_stack(
    mask: &mut GridMut<'_, u8>,
    seed_x: i64,
    seed_y: i64,
    marker: u8,
    connectivity: Connectivity,
    stack: &mut SegmentStack,
) -> Result<Rect, FillError> {
    let (width, height) = (mask.width(), mask.height());
    let (x, y) = mask
        .cell_index(seed_x, seed_y)
        .ok_or(FillError::OutOfBounds { x: seed_x, y: seed_y, width, height })?;

    let val0 = mask.get(x, y);
    if val0 == marker {
        return Ok(Rect::cell(x, y));
    }

    let margin = connectivity.margin();
    let last = width as isize - 1;

    let (left, right) = mark_run(mask.row_mut(y), x, val0, marker);
    let mut bounds = Rect::run(y, left, right);

    // Empty parent range: the seed run scans both neighbouring rows in full
    stack.push(Segment {
        y,
        left,
        right,
        prev_left: right + 1,
        prev_right: right,
        dir: Direction::Up,
    });

    while let Some(seg) = stack.pop() {
        let (l, r) = (seg.left as isize, seg.right as isize);
        let scans = [
            (seg.dir.reversed(), l - margin, r + margin),
            (seg.dir, l - margin, seg.prev_left as isize - 1),
            (seg.dir, seg.prev_right as isize + 1, r + margin),
        ];

        for (dir, lo, hi) in scans {
            let Some(ny) = dir.step(seg.y, height) else {
                continue;
            };
            let (lo, hi) = (lo.max(0), hi.min(last));
            if lo > hi {
                continue;
            }

            let row = mask.row_mut(ny);
            let mut i = lo as usize;
            while i <= hi as usize {
                if row[i] != val0 {
                    i += 1;
                    continue;
                }
                let (run_l, run_r) = mark_run(row, i, val0, marker);
                bounds.include_run(ny, run_l, run_r);
                stack.push(Segment {
                    y: ny,
                    left: run_l,
                    right: run_r,
                    prev_left: seg.left,
                    prev_right: seg.right,
                    dir: dir.reversed(),
                });
                i = run_r + 1;
            }
        }
    }

    Ok(bounds)
}

/// Flood fill a raw mask buffer whose rows start every `mask_stride` bytes.
///
/// # Arguments
/// * `mask` - Mask bytes, one per pixel
/// * `mask_stride` - Bytes between mask rows
/// * `width` - Image width
/// * `height` - Image height
/// * `seed_x` - Starting X coordinate
/// * `seed_y` - Starting Y coordinate
/// * `marker` - Value written into filled cells
/// * `connectivity` - 4- or 8-connected neighbourhood
///
/// # Returns
/// The filled area as `{x, y, width, height}`
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_mask(
    mask: &mut [u8],
    mask_stride: usize,
    width: usize,
    height: usize,
    seed_x: i64,
    seed_y: i64,
    marker: u8,
    connectivity: Connectivity,
) -> Result<FillBox, FillError> {
    let mut grid = GridMut::new(mask, width, height, mask_stride)?;
    fill_mask(&mut grid, seed_x, seed_y, marker, connectivity).map(|r| r.to_fill_box())
}
