//! Bucket fill driven by seed points: fill the mask, then paint the color
//! buffer where the fill landed.
//!
//! A paint-bucket drag produces many seeds, most of which land in regions
//! an earlier seed already painted. Those, and seeds on line pixels or off
//! the canvas, are skipped without touching either buffer.

use serde::{Deserialize, Serialize};

use super::error::FillError;
use super::grid::GridMut;
use super::paint::{check_same_size, paint_region};
use super::rect::Rect;
use super::scanline::{fill_mask, Connectivity};

/// Mask encoding and neighbourhood used by seed fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    pub connectivity: Connectivity,
    /// Value written into filled mask cells.
    pub marker: u8,
    /// Mask value of line pixels. Seeds on it are skipped.
    pub boundary: u8,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Four,
            marker: 2,
            boundary: 1,
        }
    }
}

impl FillOptions {
    pub fn validate(&self) -> Result<(), FillError> {
        if self.marker == self.boundary {
            return Err(FillError::MarkerIsBoundary(self.marker));
        }
        Ok(())
    }
}

/// What happened to one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Region filled and painted; the rect bounds it.
    Filled(Rect),
    OutOfBounds,
    /// Seed is on a line pixel.
    OnBoundary,
    /// Seed already has the target color.
    AlreadyColored,
}

/// Summary of a multi-seed fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchFill {
    /// Union of all filled regions; empty when nothing was filled.
    pub bounds: Rect,
    pub fills: usize,
    pub skipped: usize,
}

impl BatchFill {
    /// Union of the filled regions, or `None` if no seed caused a fill.
    pub fn region(&self) -> Option<Rect> {
        (self.fills > 0).then_some(self.bounds)
    }
}

/// Fill from one seed and paint the result.
///
/// Unlike [`fill_mask`], a seed outside the grid is an outcome rather than
/// an error.
pub fn fill_seed(
    color: &mut GridMut<'_, u32>,
    mask: &mut GridMut<'_, u8>,
    options: &FillOptions,
    new_color: u32,
    x: i64,
    y: i64,
) -> Result<SeedOutcome, FillError> {
    options.validate()?;
    check_same_size(color, &mask.as_grid())?;
    fill_checked_seed(color, mask, options, new_color, x, y)
}

/// [`fill_seed`] for callers that already validated `options` and grid sizes.
fn fill_checked_seed(
    color: &mut GridMut<'_, u32>,
    mask: &mut GridMut<'_, u8>,
    options: &FillOptions,
    new_color: u32,
    x: i64,
    y: i64,
) -> Result<SeedOutcome, FillError> {
    let Some((cx, cy)) = mask.cell_index(x, y) else {
        return Ok(SeedOutcome::OutOfBounds);
    };
    if color.get(cx, cy) == new_color {
        return Ok(SeedOutcome::AlreadyColored);
    }
    if mask.get(cx, cy) == options.boundary {
        return Ok(SeedOutcome::OnBoundary);
    }

    let region = fill_mask(mask, x, y, options.marker, options.connectivity)?;
    paint_region(color, &mask.as_grid(), region, new_color, options.marker)?;
    Ok(SeedOutcome::Filled(region))
}

/// Fill and paint from every seed in order, accumulating the union of the
/// filled regions.
pub fn fill_many_seeds(
    color: &mut GridMut<'_, u32>,
    mask: &mut GridMut<'_, u8>,
    options: &FillOptions,
    new_color: u32,
    seeds: &[(i64, i64)],
) -> Result<BatchFill, FillError> {
    options.validate()?;
    check_same_size(color, &mask.as_grid())?;
    let mut batch = BatchFill::default();

    for &(x, y) in seeds {
        match fill_checked_seed(color, mask, options, new_color, x, y)? {
            SeedOutcome::Filled(region) => {
                batch.fills += 1;
                batch.bounds = batch.bounds.union(&region);
            }
            skipped => {
                log::trace!("seed ({x}, {y}) skipped: {skipped:?}");
                batch.skipped += 1;
            }
        }
    }

    log::debug!(
        "filled {} of {} seeds, bounds {:?}",
        batch.fills,
        seeds.len(),
        batch.region()
    );
    Ok(batch)
}

/// Split interleaved `[x0, y0, x1, y1, ...]` coordinates into seed points.
///
/// # Errors
/// [`FillError::InvalidLayout`] if `coords` has an odd length.
pub fn interleaved_seeds(coords: &[i32]) -> Result<Vec<(i64, i64)>, FillError> {
    if coords.len() % 2 != 0 {
        return Err(FillError::InvalidLayout(format!(
            "{} seed coordinates do not form x, y pairs",
            coords.len()
        )));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|p| (p[0] as i64, p[1] as i64))
        .collect())
}

/// Multi-seed fill over raw buffers with independent byte strides.
///
/// # Arguments
/// * `color` - Color tokens, one `u32` per pixel
/// * `mask` - Mask bytes, one per pixel; filled cells get `options.marker`
/// * `color_stride` - Bytes between color rows (multiple of 4)
/// * `mask_stride` - Bytes between mask rows
/// * `width` - Image width
/// * `height` - Image height
/// * `options` - Marker, boundary value and connectivity
/// * `new_color` - Color painted into every filled region
/// * `seeds` - Seed points, processed in order
///
/// # Returns
/// Fill count, skip count and the union of the filled regions
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_and_paint_many_seeds(
    color: &mut [u32],
    mask: &mut [u8],
    color_stride: usize,
    mask_stride: usize,
    width: usize,
    height: usize,
    options: &FillOptions,
    new_color: u32,
    seeds: &[(i64, i64)],
) -> Result<BatchFill, FillError> {
    let mut color = GridMut::new(color, width, height, color_stride)?;
    let mut mask = GridMut::new(mask, width, height, mask_stride)?;
    fill_many_seeds(&mut color, &mut mask, options, new_color, seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: u32 = 0xffff_0000;

    // Two 3x3 rooms separated by a wall column
    fn two_rooms() -> (Vec<u8>, Vec<u32>) {
        let mask = vec![
            0, 0, 0, 1, 0, 0, 0, //
            0, 0, 0, 1, 0, 0, 0, //
            0, 0, 0, 1, 0, 0, 0,
        ];
        (mask, vec![0u32; 21])
    }

    #[test]
    fn test_default_options() {
        let options = FillOptions::default();
        assert_eq!(options.marker, 2);
        assert_eq!(options.boundary, 1);
        assert_eq!(options.connectivity, Connectivity::Four);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_marker_equal_to_boundary_rejected() {
        let (mut mask, mut color) = two_rooms();
        let options = FillOptions { marker: 1, ..Default::default() };

        let err = flood_fill_and_paint_many_seeds(&mut color, &mut mask, 28, 7, 7, 3, &options, BLUE, &[(0, 0)])
            .unwrap_err();
        assert_eq!(err, FillError::MarkerIsBoundary(1));
    }

    #[test]
    fn test_second_seed_in_same_room_skipped() {
        let (mut mask, mut color) = two_rooms();
        let batch = flood_fill_and_paint_many_seeds(
            &mut color,
            &mut mask,
            28,
            7,
            7,
            3,
            &FillOptions::default(),
            BLUE,
            &[(0, 0), (2, 2)],
        )
        .unwrap();

        assert_eq!(batch.fills, 1);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.region(), Some(Rect::new(0, 0, 3, 3)));
        assert_eq!(color[4], 0);
        assert_eq!(color[2], BLUE);
    }

    #[test]
    fn test_both_rooms() {
        let (mut mask, mut color) = two_rooms();
        let batch = flood_fill_and_paint_many_seeds(
            &mut color,
            &mut mask,
            28,
            7,
            7,
            3,
            &FillOptions::default(),
            BLUE,
            &[(1, 1), (5, 1)],
        )
        .unwrap();

        assert_eq!(batch.fills, 2);
        assert_eq!(batch.region(), Some(Rect::new(0, 0, 7, 3)));
        // Wall keeps its color
        assert_eq!(color[3], 0);
        assert_eq!(color.iter().filter(|&&c| c == BLUE).count(), 18);
    }

    #[test]
    fn test_skip_reasons() {
        let (mut mask_data, mut color_data) = two_rooms();
        color_data[5] = BLUE;
        let mut mask = GridMut::packed(&mut mask_data, 7, 3).unwrap();
        let mut color = GridMut::packed(&mut color_data, 7, 3).unwrap();
        let options = FillOptions::default();

        let mut outcome = |x, y| fill_seed(&mut color, &mut mask, &options, BLUE, x, y).unwrap();

        assert_eq!(outcome(-1, 0), SeedOutcome::OutOfBounds);
        assert_eq!(outcome(7, 0), SeedOutcome::OutOfBounds);
        assert_eq!(outcome(3, 1), SeedOutcome::OnBoundary);
        assert_eq!(outcome(5, 0), SeedOutcome::AlreadyColored);
        assert_eq!(
            outcome(6, 2),
            SeedOutcome::Filled(Rect::new(4, 0, 7, 3))
        );
    }

    #[test]
    fn test_no_fill_has_no_region() {
        let (mut mask, mut color) = two_rooms();
        let batch = flood_fill_and_paint_many_seeds(
            &mut color,
            &mut mask,
            28,
            7,
            7,
            3,
            &FillOptions::default(),
            BLUE,
            &[(3, 0), (100, 100)],
        )
        .unwrap();

        assert_eq!(batch.fills, 0);
        assert_eq!(batch.skipped, 2);
        assert_eq!(batch.region(), None);
        assert!(mask.iter().all(|&v| v != 2));
    }

    #[test]
    fn test_interleaved_seeds() {
        assert_eq!(interleaved_seeds(&[1, 2, -3, 4]).unwrap(), vec![(1, 2), (-3, 4)]);
        assert!(interleaved_seeds(&[]).unwrap().is_empty());

        let err = interleaved_seeds(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, FillError::InvalidLayout(_)));
    }

    #[test]
    fn test_batch_rejects_size_mismatch_without_seeds() {
        let mut mask_data = vec![0u8; 6];
        let mut color_data = vec![0u32; 4];
        let mut mask = GridMut::packed(&mut mask_data, 3, 2).unwrap();
        let mut color = GridMut::packed(&mut color_data, 2, 2).unwrap();

        let err = fill_many_seeds(&mut color, &mut mask, &FillOptions::default(), BLUE, &[]).unwrap_err();
        assert!(matches!(err, FillError::InvalidLayout(_)));
    }

    #[test]
    fn test_options_from_config_text() {
        let options: FillOptions =
            serde_json::from_str(r#"{"connectivity": "eight", "boundary": 255}"#).unwrap();

        assert_eq!(options.connectivity, Connectivity::Eight);
        assert_eq!(options.boundary, 255);
        assert_eq!(options.marker, 2);
    }
}
