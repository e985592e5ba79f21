//! Rank filtering operations
//!
//! Provides the 3x3 median filter. For each pixel and each of R, G and B,
//! the in-window samples are sorted and the element at index `count / 2`
//! is selected. Alpha is copied from the source pixel.
//!
//! With [`BorderMode::Skip`] the window is not padded, so the sample count
//! drops to 6 on an edge and 4 in a corner; with an even count the upper
//! of the two middle values is chosen.

use crate::{BorderMode, FilterResult};
use rasterkit_core::{Raster, color};

/// Half-width of the median window (3x3)
const MEDIAN_HALF: i64 = 1;

/// Apply the 3x3 median filter, skipping out-of-bounds neighbors.
///
/// # Example
///
/// ```
/// use rasterkit_core::Raster;
/// use rasterkit_filter::median_filter;
///
/// let mut raster = Raster::filled(3, 3, [10, 10, 10, 255]).unwrap();
/// raster.set_rgba(1, 1, [250, 0, 10, 255]).unwrap();
/// let out = median_filter(&raster).unwrap();
/// assert_eq!(out.get_rgba(1, 1), Some([10, 10, 10, 255]));
/// ```
pub fn median_filter(raster: &Raster) -> FilterResult<Raster> {
    median_filter_with_border(raster, BorderMode::default())
}

/// Apply the 3x3 median filter using the given border mode.
pub fn median_filter_with_border(raster: &Raster, border: BorderMode) -> FilterResult<Raster> {
    let w = raster.width();
    let h = raster.height();
    log::debug!("median_filter: {}x{} window=3x3 border={}", w, h, border);

    let src = raster.data();
    let mut out = raster.new_same_size();
    let window = (2 * MEDIAN_HALF + 1) as usize;
    let mut samples: [Vec<u8>; 3] = std::array::from_fn(|_| Vec::with_capacity(window * window));

    for y in 0..h {
        for x in 0..w {
            for s in &mut samples {
                s.clear();
            }

            for dy in -MEDIAN_HALF..=MEDIAN_HALF {
                let Some(sy) = border.resolve(y as i64 + dy, h) else {
                    continue;
                };
                for dx in -MEDIAN_HALF..=MEDIAN_HALF {
                    let Some(sx) = border.resolve(x as i64 + dx, w) else {
                        continue;
                    };
                    let i = raster.offset(sx, sy);
                    for (s, c) in samples.iter_mut().zip(color::RGB) {
                        s.push(src[i + c]);
                    }
                }
            }

            let i = raster.offset(x, y);
            let [r, g, b] = samples.each_mut().map(|s| select_middle(s));
            out.set_rgba_unchecked(x, y, color::compose_rgba(r, g, b, src[i + color::ALPHA]));
        }
    }

    Ok(out)
}

/// Sort the samples and return the element at index `len / 2`.
///
/// The window always contains the center pixel, so `samples` is never empty.
fn select_middle(samples: &mut [u8]) -> u8 {
    samples.sort_unstable();
    samples[samples.len() / 2]
}
