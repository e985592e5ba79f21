//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use rasterkit_core::Raster;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and fail on mismatch (default)
    #[default]
    Compare,
    /// Display mode - run and report without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index and every failure
/// seen so far. Comparisons never panic; call [`RegParams::cleanup`] at the
/// end of the test and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    fn record(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare a boolean condition, recorded as value 1.0 vs 0.0
    pub fn compare_true(&mut self, cond: bool) -> bool {
        self.compare_values(1.0, if cond { 1.0 } else { 0.0 }, 0.0)
    }

    /// Compare two rasters for exact equality
    ///
    /// Reports the first differing pixel in row-major order.
    pub fn compare_raster(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        if !expected.same_size(actual) {
            self.record(TestError::SizeMismatch {
                index: self.index,
                expected: expected.dimensions(),
                actual: actual.dimensions(),
            });
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let p1 = expected.get_rgba_unchecked(x, y);
                let p2 = actual.get_rgba_unchecked(x, y);
                if p1 != p2 {
                    self.record(TestError::PixelMismatch {
                        index: self.index,
                        x,
                        y,
                        expected: p1,
                        actual: p2,
                    });
                    return false;
                }
            }
        }

        true
    }

    /// Finish the test
    ///
    /// Returns `true` if every comparison passed, or if running in
    /// display mode.
    pub fn cleanup(&self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "FAILURE: {}_reg ({} of {} checks failed)",
            self.test_name,
            self.failures.len(),
            self.index
        );
        self.display()
    }

    /// Finish the test, returning the first failure as an error
    pub fn finish(self) -> TestResult<()> {
        match self.failures.into_iter().next() {
            Some(err) if self.mode == RegTestMode::Compare => Err(err),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RegParams {
        let mut rp = RegParams::new("selftest");
        rp.mode = RegTestMode::Compare;
        rp
    }

    #[test]
    fn test_compare_values() {
        let mut rp = params();
        assert!(rp.compare_values(10.0, 10.4, 0.5));
        assert!(!rp.compare_values(10.0, 11.0, 0.5));
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_raster() {
        let mut rp = params();
        let a = Raster::filled(3, 2, [1, 2, 3, 4]).unwrap();
        let mut b = a.clone();
        assert!(rp.compare_raster(&a, &b));
        b.set_rgba(2, 1, [0, 0, 0, 0]).unwrap();
        assert!(!rp.compare_raster(&a, &b));
        assert!(matches!(
            rp.failures()[0],
            TestError::PixelMismatch { x: 2, y: 1, .. }
        ));
        let c = Raster::new(2, 3).unwrap();
        assert!(!rp.compare_raster(&a, &c));
        assert!(rp.finish().is_err());
    }

    #[test]
    fn test_display_mode_passes() {
        let mut rp = params();
        rp.mode = RegTestMode::Display;
        rp.compare_true(false);
        assert!(rp.cleanup());
        assert!(rp.finish().is_ok());
    }
}
