//! Border handling for neighborhood filters
//!
//! A 3x3 window centered on an edge pixel reaches outside the raster.
//! [`BorderMode`] decides what those samples contribute.

use std::fmt;

/// How neighborhood samples outside the raster are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderMode {
    /// Drop out-of-bounds samples. Their kernel weight is lost, so edge
    /// pixels see a smaller effective weight sum (and the median window
    /// holds fewer samples).
    #[default]
    Skip,
    /// Read the nearest edge pixel instead, so every window is full.
    Replicate,
}

impl BorderMode {
    /// Map a sample coordinate to a source coordinate.
    ///
    /// Returns `None` when the sample must be skipped.
    #[inline]
    pub fn resolve(self, coord: i64, len: u32) -> Option<u32> {
        if coord >= 0 && coord < len as i64 {
            return Some(coord as u32);
        }
        match self {
            BorderMode::Skip => None,
            BorderMode::Replicate => Some(coord.clamp(0, len as i64 - 1) as u32),
        }
    }
}

impl fmt::Display for BorderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderMode::Skip => f.write_str("skip"),
            BorderMode::Replicate => f.write_str("replicate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inside() {
        for mode in [BorderMode::Skip, BorderMode::Replicate] {
            assert_eq!(mode.resolve(0, 5), Some(0));
            assert_eq!(mode.resolve(4, 5), Some(4));
        }
    }

    #[test]
    fn test_resolve_outside() {
        assert_eq!(BorderMode::Skip.resolve(-1, 5), None);
        assert_eq!(BorderMode::Skip.resolve(5, 5), None);
        assert_eq!(BorderMode::Replicate.resolve(-2, 5), Some(0));
        assert_eq!(BorderMode::Replicate.resolve(7, 5), Some(4));
    }

    #[test]
    fn test_default_is_skip() {
        assert_eq!(BorderMode::default(), BorderMode::Skip);
    }
}
