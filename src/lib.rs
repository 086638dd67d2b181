//! Linefill Rust Extensions
//!
//! Paint-bucket fill for line-art raster tools, implemented in Rust
//! with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Buffer Format
//! - **Mask**: (height, width) `u8`, one tag per pixel. Line pixels hold
//!   the boundary value (1 by default), empty pixels 0; filled pixels get
//!   the marker value (2 by default).
//! - **Color**: (height, width) `u32`, one opaque color token per pixel.
//!
//! Both buffers are mutated in place. Raw entry points accept a row stride
//! in bytes for each buffer, so padded rows are fine.

pub mod fill;

#[cfg(feature = "wasm")]
pub mod wasm;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{PyReadonlyArray1, PyReadonlyArray2, PyReadwriteArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::fill::paint::box_region;
    use crate::fill::{self, Connectivity, FillBox, FillError, FillOptions, Grid, GridMut};

    type Bbox = (usize, usize, usize, usize);

    fn to_py_err(err: FillError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn connectivity(eight_connected: bool) -> Connectivity {
        if eight_connected {
            Connectivity::Eight
        } else {
            Connectivity::Four
        }
    }

    // ========================================================================
    // Flood Fill
    // ========================================================================

    /// Flood fill a uint8 mask in place from (seed_x, seed_y).
    ///
    /// Returns the filled area as (x, y, width, height).
    #[pyfunction]
    #[pyo3(signature = (mask, seed_x, seed_y, marker=2, eight_connected=false))]
    pub fn flood_fill_mask<'py>(
        mut mask: PyReadwriteArray2<'py, u8>,
        seed_x: i64,
        seed_y: i64,
        marker: u8,
        eight_connected: bool,
    ) -> PyResult<Bbox> {
        let mut grid = GridMut::from_array(mask.as_array_mut()).map_err(to_py_err)?;
        let region = fill::fill_mask(&mut grid, seed_x, seed_y, marker, connectivity(eight_connected))
            .map_err(to_py_err)?;
        let b = region.to_fill_box();
        Ok((b.x, b.y, b.width, b.height))
    }

    /// Paint uint32 color cells whose mask cell equals marker, inside region.
    ///
    /// `region` is (x, y, width, height) as returned by flood_fill_mask.
    #[pyfunction]
    #[pyo3(signature = (color, mask, region, new_color, marker=2))]
    pub fn paint_masked_region<'py>(
        mut color: PyReadwriteArray2<'py, u32>,
        mask: PyReadonlyArray2<'py, u8>,
        region: Bbox,
        new_color: u32,
        marker: u8,
    ) -> PyResult<()> {
        let mut color = GridMut::from_array(color.as_array_mut()).map_err(to_py_err)?;
        let mask = Grid::from_array(mask.as_array()).map_err(to_py_err)?;
        let (x, y, width, height) = region;
        let region = box_region(FillBox { x, y, width, height }, &mask).map_err(to_py_err)?;
        fill::paint_region(&mut color, &mask, region, new_color, marker).map_err(to_py_err)
    }

    // ========================================================================
    // Multi-Seed Fill
    // ========================================================================

    /// Fill and paint from every (xs[i], ys[i]) seed.
    ///
    /// Returns (bbox, fills) where bbox is (xmin, ymin, xmax, ymax) with
    /// exclusive maxima, or None when no seed caused a fill.
    #[pyfunction]
    #[pyo3(signature = (color, mask, xs, ys, new_color, marker=2, boundary=1, eight_connected=false))]
    #[allow(clippy::too_many_arguments)]
    pub fn flood_fill_and_paint_many_seeds<'py>(
        mut color: PyReadwriteArray2<'py, u32>,
        mut mask: PyReadwriteArray2<'py, u8>,
        xs: PyReadonlyArray1<'py, i32>,
        ys: PyReadonlyArray1<'py, i32>,
        new_color: u32,
        marker: u8,
        boundary: u8,
        eight_connected: bool,
    ) -> PyResult<(Option<Bbox>, usize)> {
        let (xs, ys) = (xs.as_array(), ys.as_array());
        if xs.len() != ys.len() {
            return Err(PyValueError::new_err(format!(
                "xs has {} seeds but ys has {}",
                xs.len(),
                ys.len()
            )));
        }
        let seeds: Vec<(i64, i64)> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| (x as i64, y as i64))
            .collect();

        let options = FillOptions {
            connectivity: connectivity(eight_connected),
            marker,
            boundary,
        };
        let mut color = GridMut::from_array(color.as_array_mut()).map_err(to_py_err)?;
        let mut mask = GridMut::from_array(mask.as_array_mut()).map_err(to_py_err)?;
        let batch = fill::fill_many_seeds(&mut color, &mut mask, &options, new_color, &seeds)
            .map_err(to_py_err)?;

        let bbox = batch.region().map(|r| (r.xmin, r.ymin, r.xmax, r.ymax));
        Ok((bbox, batch.fills))
    }

    /// Linefill Rust extension module
    #[pymodule]
    pub fn linefill_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill_mask, m)?)?;
        m.add_function(wrap_pyfunction!(paint_masked_region, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_and_paint_many_seeds, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::linefill_rust;
