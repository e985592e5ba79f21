//! Synthetic fixture rasters
//!
//! Regression tests build their inputs here instead of loading image files,
//! so every fixture is deterministic and needs no decoder.

use crate::error::TestResult;
use rasterkit_core::Raster;

/// Raster with every pixel set to `pixel`
pub fn uniform(width: u32, height: u32, pixel: [u8; 4]) -> TestResult<Raster> {
    Ok(Raster::filled(width, height, pixel)?)
}

/// Opaque gray ramp running from 0 at the left column to 255 at the right
///
/// A single-column raster is all zero.
pub fn horizontal_ramp(width: u32, height: u32) -> TestResult<Raster> {
    let mut raster = Raster::new(width, height)?;
    let span = width.saturating_sub(1).max(1) as u64;
    for y in 0..height {
        for x in 0..width {
            let v = (x as u64 * 255 / span) as u8;
            raster.set_rgba_unchecked(x, y, [v, v, v, 255]);
        }
    }
    Ok(raster)
}

/// Checkerboard of `cell`-sized squares alternating between `a` and `b`
///
/// The top-left cell uses `a`. A `cell` of 0 is treated as 1.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    a: [u8; 4],
    b: [u8; 4],
) -> TestResult<Raster> {
    let cell = cell.max(1);
    let mut raster = Raster::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let px = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            raster.set_rgba_unchecked(x, y, px);
        }
    }
    Ok(raster)
}

/// Pseudo-random RGB content with opaque alpha
///
/// The same `seed` always yields the same raster.
pub fn noisy(width: u32, height: u32, seed: u64) -> TestResult<Raster> {
    let mut rng = Lcg::new(seed);
    let mut raster = Raster::new(width, height)?;
    for px in raster.pixels_mut() {
        px[0] = rng.next_u8();
        px[1] = rng.next_u8();
        px[2] = rng.next_u8();
        px[3] = 255;
    }
    Ok(raster)
}

/// Raster from a row-major list of RGBA pixels
pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> TestResult<Raster> {
    let data = pixels.iter().flatten().copied().collect();
    Ok(Raster::from_rgba(width, height, data)?)
}

/// Linear congruential generator (Numerical Recipes constants)
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9,
        }
    }

    fn next_u8(&mut self) -> u8 {
        const A: u64 = 1664525;
        const C: u64 = 1013904223;
        self.state = self.state.wrapping_mul(A).wrapping_add(C);
        (self.state >> 24) as u8
    }
}
