//! rasterkit-test - Regression test framework for rasterkit
//!
//! Provides [`RegParams`], which counts comparisons and collects failures
//! instead of panicking on the first one, and the [`synth`] module of
//! deterministic fixture rasters. Two modes are supported:
//!
//! - **Compare**: Fail the test on any mismatch
//! - **Display**: Run and report mismatches without failing
//!
//! # Usage
//!
//! ```ignore
//! use rasterkit_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("median");
//! let raster = synth::uniform(8, 8, [40, 40, 40, 255]).unwrap();
//! rp.compare_raster(&raster, &median_filter(&raster).unwrap());
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
