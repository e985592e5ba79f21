//! Edge detection regression test
//!
//! Sobel magnitude on uniform, stepped and noisy rasters, plus the
//! size check in gradient_magnitude.

use rasterkit_core::{Error, Raster, color};
use rasterkit_filter::{
    BorderMode, FilterError, Kernel, convolve, gradient_magnitude, sobel_edge,
    sobel_edge_with_border,
};
use rasterkit_test::{RegParams, synth};

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");

    // --- Test 1: uniform raster has no interior edges ---
    let flat = synth::uniform(9, 7, [140, 20, 220, 99]).expect("uniform");
    let edges = sobel_edge(&flat).expect("sobel_edge");
    let mut interior_zero = true;
    for y in 1..6 {
        for x in 1..8 {
            interior_zero &= edges.get_rgba(x, y) == Some([0, 0, 0, 99]);
        }
    }
    rp.compare_true(interior_zero);
    let rep = sobel_edge_with_border(&flat, BorderMode::Replicate).expect("sobel_edge");
    rp.compare_true(rep.pixels().all(|p| p == [0, 0, 0, 99]));

    // --- Test 2: vertical step is detected on both sides only ---
    let mut step = synth::uniform(8, 6, [0, 0, 0, 255]).expect("uniform");
    for y in 0..6 {
        for x in 4..8 {
            step.set_rgba(x, y, [100, 100, 100, 255]).expect("set_rgba");
        }
    }
    let edges = sobel_edge_with_border(&step, BorderMode::Replicate).expect("sobel_edge");
    for y in 0..6 {
        for x in 0..8 {
            let expected = if x == 3 || x == 4 { 255.0 } else { 0.0 };
            rp.compare_values(
                expected,
                edges.get_channel(x, y, color::RED).unwrap_or(0) as f64,
                0.0,
            );
        }
    }

    // --- Test 3: output is gray with the source alpha ---
    let noisy = synth::noisy(20, 15, 9).expect("noisy");
    let edges = sobel_edge(&noisy).expect("sobel_edge");
    rp.compare_true(edges.is_grayscale());
    rp.compare_values(20.0, edges.width() as f64, 0.0);
    rp.compare_values(15.0, edges.height() as f64, 0.0);
    rp.compare_true(edges.pixels().all(|p| p[color::ALPHA] == 255));

    // --- Test 4: magnitude equals the two red gradients combined ---
    let gx = convolve(&noisy, &Kernel::sobel_x()).expect("sobel_x");
    let gy = convolve(&noisy, &Kernel::sobel_y()).expect("sobel_y");
    let combined = gradient_magnitude(&gx, &gy).expect("gradient_magnitude");
    rp.compare_raster(&edges, &combined);

    // --- Test 5: mismatched gradient sizes ---
    let small = Raster::new(20, 14).expect("new");
    let err = gradient_magnitude(&gx, &small);
    rp.compare_true(
        err == Err(FilterError::Core(Error::DimensionMismatch {
            expected: (20, 15),
            actual: (20, 14),
        })),
    );

    assert!(rp.cleanup(), "edge regression test failed");
}
