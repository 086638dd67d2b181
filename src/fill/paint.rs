//! Recolor the color buffer wherever the mask carries a fill marker.

use rayon::prelude::*;

use super::error::FillError;
use super::grid::{Grid, GridMut};
use super::rect::{FillBox, Rect};

/// Fail unless the color buffer and mask describe the same `width x height`.
pub(crate) fn check_same_size(color: &GridMut<'_, u32>, mask: &Grid<'_, u8>) -> Result<(), FillError> {
    if (color.width(), color.height()) != (mask.width(), mask.height()) {
        return Err(FillError::InvalidLayout(format!(
            "color buffer is {}x{} but mask is {}x{}",
            color.width(),
            color.height(),
            mask.width(),
            mask.height()
        )));
    }
    Ok(())
}

/// Convert a `{x, y, width, height}` box to a rect over `mask`.
///
/// A box whose far edge overflows `usize` cannot fit any grid and is
/// reported as [`FillError::RegionOutOfBounds`].
pub(crate) fn box_region(region: FillBox, mask: &Grid<'_, u8>) -> Result<Rect, FillError> {
    region.to_rect().ok_or(FillError::RegionOutOfBounds {
        region,
        width: mask.width(),
        height: mask.height(),
    })
}

/// Write `new_color` into every cell of `region` whose mask cell equals `marker`.
///
/// Cells outside `region` are never read or written. Rows are painted in
/// parallel.
///
/// # Errors
/// [`FillError::InvalidLayout`] if the grids differ in size,
/// [`FillError::RegionOutOfBounds`] if `region` does not fit them.
pub fn paint_region(
    color: &mut GridMut<'_, u32>,
    mask: &Grid<'_, u8>,
    region: Rect,
    new_color: u32,
    marker: u8,
) -> Result<(), FillError> {
    check_same_size(color, mask)?;
    if region.is_empty() {
        return Ok(());
    }
    if region.xmax > mask.width() || region.ymax > mask.height() {
        return Err(FillError::RegionOutOfBounds {
            region: region.to_fill_box(),
            width: mask.width(),
            height: mask.height(),
        });
    }

    let (xmin, xmax) = (region.xmin, region.xmax);
    color
        .par_rows_mut()
        .enumerate()
        .skip(region.ymin)
        .take(region.height())
        .for_each(|(y, row)| {
            let mask_row = &mask.row(y)[xmin..xmax];
            for (c, &m) in row[xmin..xmax].iter_mut().zip(mask_row) {
                if m == marker {
                    *c = new_color;
                }
            }
        });

    Ok(())
}

/// Paint raw buffers: `color` rows every `color_stride` bytes, `mask` rows
/// every `mask_stride` bytes, restricted to `region`.
///
/// # Arguments
/// * `color` - Color tokens, one `u32` per pixel
/// * `mask` - Mask bytes, one per pixel
/// * `color_stride` - Bytes between color rows (multiple of 4)
/// * `mask_stride` - Bytes between mask rows
/// * `width` - Image width
/// * `height` - Image height
/// * `region` - Area to paint, usually the box returned by the fill
/// * `new_color` - Color written into marked cells
/// * `marker` - Mask value of cells to paint
///
/// # Returns
/// `Ok(())` once every marked cell in `region` holds `new_color`
#[allow(clippy::too_many_arguments)]
pub fn paint_masked_region(
    color: &mut [u32],
    mask: &[u8],
    color_stride: usize,
    mask_stride: usize,
    width: usize,
    height: usize,
    region: FillBox,
    new_color: u32,
    marker: u8,
) -> Result<(), FillError> {
    let mut color = GridMut::new(color, width, height, color_stride)?;
    let mask = Grid::new(mask, width, height, mask_stride)?;
    let region = box_region(region, &mask)?;
    paint_region(&mut color, &mask, region, new_color, marker)
}
