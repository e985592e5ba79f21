//! Convolution regression test
//!
//! Identity kernel, smoothing and Gaussian blur under both border modes,
//! alpha pass-through and kernel validation.

use rasterkit_core::color;
use rasterkit_filter::{
    BorderMode, FilterError, Kernel, convolve, convolve_with_border, gaussian_blur, smooth,
};
use rasterkit_test::{RegParams, synth};

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    let pixs = synth::noisy(40, 30, 5).expect("noisy");
    let w = pixs.width();
    let h = pixs.height();
    eprintln!("Image size: {}x{}", w, h);

    // --- Test 1: identity kernel reproduces the source ---
    for border in [BorderMode::Skip, BorderMode::Replicate] {
        let out = convolve_with_border(&pixs, &Kernel::identity(), border).expect("identity");
        rp.compare_raster(&pixs, &out);
    }

    // --- Test 2: blurs keep the size and reduce contrast ---
    let board = synth::checkerboard(16, 16, 1, [255, 255, 255, 255], [0, 0, 0, 255])
        .expect("checkerboard");
    for (name, out) in [
        ("smoothing", smooth(&board).expect("smooth")),
        ("gaussian", gaussian_blur(&board).expect("gaussian")),
    ] {
        rp.compare_values(16.0, out.width() as f64, 0.0);
        rp.compare_values(16.0, out.height() as f64, 0.0);
        let diff = board.max_channel_diff(&out).expect("same size");
        rp.compare_true(diff > 0);
        // interior of a 1-pixel checkerboard averages toward mid gray
        let center = out.get_channel(8, 8, color::RED).unwrap_or(0);
        rp.compare_true((100..=160).contains(&center));
        eprintln!("  {}: max diff {}, center {}", name, diff, center);
    }

    // --- Test 3: skipped taps darken the border of a uniform raster ---
    let flat = synth::uniform(6, 6, [90, 90, 90, 255]).expect("uniform");
    let skip = smooth(&flat).expect("smooth");
    rp.compare_values(40.0, skip.get_channel(0, 0, color::RED).unwrap_or(0) as f64, 0.0);
    rp.compare_values(60.0, skip.get_channel(3, 0, color::RED).unwrap_or(0) as f64, 0.0);
    rp.compare_values(90.0, skip.get_channel(3, 3, color::RED).unwrap_or(0) as f64, 0.0);
    let rep = convolve_with_border(&flat, &Kernel::smoothing(), BorderMode::Replicate)
        .expect("replicate");
    rp.compare_raster(&flat, &rep);

    // --- Test 4: alpha is copied from the source ---
    let translucent = synth::checkerboard(9, 7, 2, [10, 200, 30, 0], [250, 20, 90, 77])
        .expect("checkerboard");
    let blurred = gaussian_blur(&translucent).expect("gaussian");
    let same_alpha = blurred
        .pixels()
        .zip(translucent.pixels())
        .all(|(a, b)| a[color::ALPHA] == b[color::ALPHA]);
    rp.compare_true(same_alpha);

    // --- Test 5: ramp is preserved in the interior by a unit-sum kernel ---
    let ramp = synth::horizontal_ramp(11, 5).expect("ramp");
    let out = convolve(&ramp, &Kernel::gaussian()).expect("gaussian");
    for x in 1..10 {
        rp.compare_values(
            ramp.get_channel(x, 2, color::RED).unwrap_or(0) as f64,
            out.get_channel(x, 2, color::RED).unwrap_or(0) as f64,
            1.0,
        );
    }

    // --- Test 6: exact halves round to the even neighbor ---
    let dot = synth::from_pixels(
        3,
        3,
        &[
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [2, 2, 2, 255],
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [0, 0, 0, 255],
        ],
    )
    .expect("from_pixels");
    let out = gaussian_blur(&dot).expect("gaussian");
    rp.compare_true(out.pixels().all(|p| p == [0, 0, 0, 255]));

    // --- Test 7: kernel validation ---
    rp.compare_true(matches!(Kernel::new(4), Err(FilterError::InvalidKernel(_))));
    rp.compare_true(matches!(Kernel::new(0), Err(FilterError::InvalidKernel(_))));
    rp.compare_true(matches!(
        Kernel::from_slice(3, &[1.0; 8]),
        Err(FilterError::InvalidKernel(_))
    ));
    rp.compare_values(1.0, Kernel::smoothing().sum() as f64, 1e-5);
    rp.compare_values(1.0, Kernel::gaussian().sum() as f64, 1e-5);

    assert!(rp.cleanup(), "convolve regression test failed");
}
