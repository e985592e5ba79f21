//! Convolution kernels
//!
//! A [`Kernel`] is a square, odd-sized matrix of `f32` weights stored in
//! row-major order. Its origin is the center element `(size/2, size/2)`.
//!
//! Weights are not required to sum to 1. Callers wanting an
//! energy-preserving kernel call [`Kernel::normalize`] before use.

use crate::{FilterError, FilterResult};

/// A square convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a zero kernel of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is zero or even.
    pub fn new(size: u32) -> FilterResult<Self> {
        check_size(size)?;
        Ok(Kernel {
            size,
            data: vec![0.0; (size * size) as usize],
        })
    }

    /// Create a kernel from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is zero or even, or
    /// if `data.len() != size * size`.
    pub fn from_slice(size: u32, data: &[f32]) -> FilterResult<Self> {
        check_size(size)?;
        let expected = (size as usize) * (size as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "{size}x{size} kernel needs {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Create a kernel from a matrix given as rows.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the matrix is empty, ragged,
    /// not square, or has an even side length.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_filter::Kernel;
    ///
    /// let k = Kernel::from_rows::<Vec<f32>>(&[
    ///     vec![0.0, 0.0, 0.0],
    ///     vec![0.0, 1.0, 0.0],
    ///     vec![0.0, 0.0, 0.0],
    /// ])
    /// .unwrap();
    /// assert_eq!(k.size(), 3);
    /// assert!(Kernel::from_rows::<[f32; 2]>(&[[1.0, 2.0], [3.0, 4.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> FilterResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != size)
        {
            return Err(FilterError::InvalidKernel(format!(
                "kernel is not square: {size} rows but row {i} has {} columns",
                row.as_ref().len()
            )));
        }
        let size = u32::try_from(size)
            .map_err(|_| FilterError::InvalidKernel(format!("kernel too large: {size}")))?;
        let data: Vec<f32> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_slice(size, &data)
    }

    /// Build a 3x3 kernel from a constant matrix scaled by `scale`.
    fn from_3x3(rows: [[f32; 3]; 3], scale: f32) -> Self {
        Kernel {
            size: 3,
            data: rows.iter().flatten().map(|&v| v * scale).collect(),
        }
    }

    /// 3x3 identity kernel.
    pub fn identity() -> Self {
        Self::from_3x3([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]], 1.0)
    }

    /// 3x3 smoothing (box) kernel, every weight `1/9`.
    pub fn smoothing() -> Self {
        Self::from_3x3([[1.0; 3]; 3], 1.0 / 9.0)
    }

    /// 3x3 Gaussian kernel `[[1,2,1],[2,4,2],[1,2,1]] / 16`.
    pub fn gaussian() -> Self {
        Self::from_3x3([[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]], 1.0 / 16.0)
    }

    /// Sobel kernel responding to intensity change along y.
    ///
    /// `[[-1,-2,-1],[0,0,0],[1,2,1]]`, unnormalized.
    pub fn sobel_x() -> Self {
        Self::from_3x3(
            [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]],
            1.0,
        )
    }

    /// Sobel kernel responding to intensity change along x.
    ///
    /// `[[-1,0,1],[-2,0,2],[-1,0,1]]`, unnormalized.
    pub fn sobel_y() -> Self {
        Self::from_3x3(
            [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]],
            1.0,
        )
    }

    /// Side length of the kernel.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to an edge, `size / 2`.
    #[inline]
    pub fn half(&self) -> u32 {
        self.size / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the weight at (row, col).
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.data[(row * self.size + col) as usize])
    }

    /// Set the weight at (row, col). Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: f32) {
        if row < self.size && col < self.size {
            self.data[(row * self.size + col) as usize] = value;
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel whose weights sum to zero (e.g. Sobel) is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Iterate over `(dy, dx, weight)` relative to the center.
    pub(crate) fn taps(&self) -> impl Iterator<Item = (i64, i64, f32)> + '_ {
        let half = self.half() as i64;
        let size = self.size as usize;
        self.data.iter().enumerate().map(move |(i, &w)| {
            let row = (i / size) as i64;
            let col = (i % size) as i64;
            (row - half, col - half, w)
        })
    }
}

fn check_size(size: u32) -> FilterResult<()> {
    if size == 0 {
        return Err(FilterError::InvalidKernel("kernel size must be > 0".into()));
    }
    if size % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size must be odd, got {size}"
        )));
    }
    Ok(())
}
