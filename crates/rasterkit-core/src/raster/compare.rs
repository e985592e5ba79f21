//! Raster comparison
//!
//! Size checks used wherever two rasters are combined, plus pixel-level
//! difference counting for diagnostics.

use super::Raster;
use crate::error::{Error, Result};

impl Raster {
    /// Check whether `other` has the same width and height.
    #[inline]
    pub fn same_size(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Require `other` to have the same size as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] with `self` as the expected size.
    pub fn check_same_size(&self, other: &Raster) -> Result<()> {
        if self.same_size(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            })
        }
    }

    /// Count pixels whose RGBA value differs between the two rasters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_differing_pixels(&self, other: &Raster) -> Result<usize> {
        self.check_same_size(other)?;
        Ok(self
            .pixels()
            .zip(other.pixels())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Largest absolute difference over all channels (alpha included).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn max_channel_diff(&self, other: &Raster) -> Result<u8> {
        self.check_same_size(other)?;
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| a.abs_diff(b))
            .max()
            .unwrap_or(0))
    }
}
