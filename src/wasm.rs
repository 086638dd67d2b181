//! WebAssembly exports for the bucket fill.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Buffers are
//! tightly packed (`Uint8Array` mask, `Uint32Array` color) and are written
//! back to the caller's arrays in place.

use wasm_bindgen::prelude::*;

use crate::fill::paint::box_region;
use crate::fill::{self, Connectivity, FillBox, FillOptions, Grid, GridMut};

fn connectivity(eight_connected: bool) -> Connectivity {
    if eight_connected {
        Connectivity::Eight
    } else {
        Connectivity::Four
    }
}

// ============================================================================
// Flood Fill
// ============================================================================

/// Flood fill a packed mask from (seed_x, seed_y).
///
/// # Returns
/// `[x, y, width, height]` of the filled area
#[wasm_bindgen]
pub fn flood_fill_mask_wasm(
    mask: &mut [u8],
    width: usize,
    height: usize,
    seed_x: i32,
    seed_y: i32,
    marker: u8,
    eight_connected: bool,
) -> Result<Vec<u32>, JsError> {
    let mut grid = GridMut::packed(mask, width, height)?;
    let region = fill::fill_mask(
        &mut grid,
        seed_x as i64,
        seed_y as i64,
        marker,
        connectivity(eight_connected),
    )?;
    let b = region.to_fill_box();
    Ok(vec![b.x as u32, b.y as u32, b.width as u32, b.height as u32])
}

/// Paint color cells whose mask cell equals `marker` inside `[x, y, width, height]`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn paint_masked_region_wasm(
    color: &mut [u32],
    mask: &[u8],
    width: usize,
    height: usize,
    region: &[u32],
    new_color: u32,
    marker: u8,
) -> Result<(), JsError> {
    let [x, y, w, h] = <[u32; 4]>::try_from(region)
        .map_err(|_| JsError::new("region must have 4 entries: x, y, width, height"))?
        .map(|v| v as usize);
    let mut color = GridMut::packed(color, width, height)?;
    let mask = Grid::new(mask, width, height, width)?;
    let region = box_region(FillBox { x, y, width: w, height: h }, &mask)?;
    fill::paint_region(&mut color, &mask, region, new_color, marker)?;
    Ok(())
}

// ============================================================================
// Multi-Seed Fill
// ============================================================================

/// Fill and paint from seeds given as interleaved `[x0, y0, x1, y1, ...]`.
///
/// # Returns
/// `[fills, xmin, ymin, xmax, ymax]` with exclusive maxima; only `fills`
/// is present when nothing was filled
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_and_paint_many_seeds_wasm(
    color: &mut [u32],
    mask: &mut [u8],
    width: usize,
    height: usize,
    seeds: &[i32],
    new_color: u32,
    marker: u8,
    boundary: u8,
    eight_connected: bool,
) -> Result<Vec<u32>, JsError> {
    let seeds = fill::interleaved_seeds(seeds)?;
    let options = FillOptions {
        connectivity: connectivity(eight_connected),
        marker,
        boundary,
    };

    let mut color = GridMut::packed(color, width, height)?;
    let mut mask = GridMut::packed(mask, width, height)?;
    let batch = fill::fill_many_seeds(&mut color, &mut mask, &options, new_color, &seeds)?;

    let mut out = vec![batch.fills as u32];
    if let Some(r) = batch.region() {
        out.extend([r.xmin, r.ymin, r.xmax, r.ymax].map(|v| v as u32));
    }
    Ok(out)
}
