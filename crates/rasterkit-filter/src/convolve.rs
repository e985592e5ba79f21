//! Convolution operations
//!
//! Implements RGBA convolution with square, odd-sized kernels, plus the
//! named 3x3 blurs built on it.
//!
//! Only R, G and B are convolved; alpha is copied from the source pixel.
//! Accumulated sums are rounded and clamped to [0, 255].

use crate::{BorderMode, FilterResult, Kernel};
use rasterkit_core::{Raster, color};

/// Convolve an RGBA raster with a kernel.
///
/// Kernel taps that fall outside the raster are skipped: their weight is
/// neither applied nor redistributed, so pixels near the edge of a
/// non-negative, unit-sum kernel come out darker. Use
/// [`convolve_with_border`] with [`BorderMode::Replicate`] to avoid this.
///
/// # Example
///
/// ```
/// use rasterkit_core::Raster;
/// use rasterkit_filter::{Kernel, convolve};
///
/// let raster = Raster::filled(4, 4, [90, 90, 90, 255]).unwrap();
/// let out = convolve(&raster, &Kernel::smoothing()).unwrap();
/// assert_eq!(out.get_rgba(1, 1), Some([90, 90, 90, 255]));
/// assert_eq!(out.get_rgba(0, 0), Some([40, 40, 40, 255]));
/// ```
pub fn convolve(raster: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    convolve_with_border(raster, kernel, BorderMode::default())
}

/// Convolve an RGBA raster with a kernel using the given border mode.
pub fn convolve_with_border(
    raster: &Raster,
    kernel: &Kernel,
    border: BorderMode,
) -> FilterResult<Raster> {
    let w = raster.width();
    let h = raster.height();
    log::debug!(
        "convolve: {}x{} kernel={}x{} border={}",
        w,
        h,
        kernel.size(),
        kernel.size(),
        border
    );

    let taps: Vec<(i64, i64, f32)> = kernel.taps().filter(|&(_, _, k)| k != 0.0).collect();
    let src = raster.data();
    let mut out = raster.new_same_size();

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0.0f32; 3];

            for &(dy, dx, k) in &taps {
                let Some(sy) = border.resolve(y as i64 + dy, h) else {
                    continue;
                };
                let Some(sx) = border.resolve(x as i64 + dx, w) else {
                    continue;
                };
                let i = raster.offset(sx, sy);
                for (acc, c) in sum.iter_mut().zip(color::RGB) {
                    *acc += src[i + c] as f32 * k;
                }
            }

            let i = raster.offset(x, y);
            let px = color::compose_rgba(
                color::clamp_channel_f32(sum[0]),
                color::clamp_channel_f32(sum[1]),
                color::clamp_channel_f32(sum[2]),
                src[i + color::ALPHA],
            );
            out.set_rgba_unchecked(x, y, px);
        }
    }

    Ok(out)
}

/// Apply the 3x3 smoothing (box) filter.
pub fn smooth(raster: &Raster) -> FilterResult<Raster> {
    convolve(raster, &Kernel::smoothing())
}

/// Apply the 3x3 Gaussian blur.
pub fn gaussian_blur(raster: &Raster) -> FilterResult<Raster> {
    convolve(raster, &Kernel::gaussian())
}
