//! Strided row-major views over caller-owned buffers.
//!
//! Mask and color buffers arrive as flat slices plus a row stride in bytes,
//! which may be larger than the row itself. [`Grid`] and [`GridMut`] check
//! that geometry once and then hand out rows, so the fill and paint loops
//! never do offset arithmetic of their own.

use std::mem::size_of;

use ndarray::{ArrayView2, ArrayViewMut2};
use rayon::prelude::*;

use super::error::FillError;

/// Validate a buffer layout and return the row stride in elements.
fn element_stride<T>(
    len: usize,
    width: usize,
    height: usize,
    stride_bytes: usize,
) -> Result<usize, FillError> {
    let elem = size_of::<T>();
    if stride_bytes % elem != 0 {
        return Err(FillError::InvalidLayout(format!(
            "stride of {stride_bytes} bytes is not a multiple of the {elem}-byte element"
        )));
    }
    let stride = stride_bytes / elem;
    if stride < width {
        return Err(FillError::InvalidLayout(format!(
            "stride of {stride} elements is smaller than the width {width}"
        )));
    }
    if height > 0 {
        let needed = (height - 1) * stride + width;
        if len < needed {
            return Err(FillError::InvalidLayout(format!(
                "buffer holds {len} elements but {width}x{height} with stride {stride} needs {needed}"
            )));
        }
    }
    Ok(stride)
}

/// Map a signed coordinate pair to a cell index if it lies inside `width x height`.
#[inline]
fn cell_index(width: usize, height: usize, x: i64, y: i64) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    (x < width && y < height).then_some((x, y))
}

/// Read-only strided grid.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

/// Mutable strided grid.
#[derive(Debug)]
pub struct GridMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T: Copy> Grid<'a, T> {
    /// Wrap `data` whose rows start every `stride_bytes` bytes.
    pub fn new(
        data: &'a [T],
        width: usize,
        height: usize,
        stride_bytes: usize,
    ) -> Result<Self, FillError> {
        let stride = element_stride::<T>(data.len(), width, height, stride_bytes)?;
        Ok(Self { data, width, height, stride })
    }

    /// Wrap a standard-layout 2D array of shape `(height, width)`.
    pub fn from_array(view: ArrayView2<'a, T>) -> Result<Self, FillError> {
        let (height, width) = view.dim();
        let data = view.to_slice().ok_or_else(|| {
            FillError::InvalidLayout("array is not contiguous in row-major order".into())
        })?;
        Ok(Self { data, width, height, stride: width })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [T] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }

    pub fn cell_index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        cell_index(self.width, self.height, x, y)
    }
}

impl<'a, T: Copy> GridMut<'a, T> {
    /// Wrap `data` whose rows start every `stride_bytes` bytes.
    pub fn new(
        data: &'a mut [T],
        width: usize,
        height: usize,
        stride_bytes: usize,
    ) -> Result<Self, FillError> {
        let stride = element_stride::<T>(data.len(), width, height, stride_bytes)?;
        Ok(Self { data, width, height, stride })
    }

    /// Wrap a tightly packed buffer of `height` rows of `width` cells.
    pub fn packed(data: &'a mut [T], width: usize, height: usize) -> Result<Self, FillError> {
        Self::new(data, width, height, width * size_of::<T>())
    }

    /// Wrap a standard-layout 2D array of shape `(height, width)`.
    pub fn from_array(view: ArrayViewMut2<'a, T>) -> Result<Self, FillError> {
        let (height, width) = view.dim();
        let data = view.into_slice().ok_or_else(|| {
            FillError::InvalidLayout("array is not contiguous in row-major order".into())
        })?;
        Ok(Self { data, width, height, stride: width })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_grid(&self) -> Grid<'_, T> {
        Grid {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.stride + x] = value;
    }

    pub fn cell_index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        cell_index(self.width, self.height, x, y)
    }
}

impl<T: Copy + Send> GridMut<'_, T> {
    /// Rows as disjoint mutable slices, trimmed to `width`, for rayon.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [T]> + '_ {
        let width = self.width;
        self.data
            .par_chunks_mut(self.stride.max(1))
            .take(self.height)
            .map(move |row| &mut row[..width])
    }
}
