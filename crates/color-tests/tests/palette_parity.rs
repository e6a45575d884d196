//! Palette Parity Tests
//!
//! Compare oxcolor's HSL, HSV, XYZ and Lab conversions against the
//! `palette` crate over grid, random and hue-ramp samples.

use color_tests::accuracy::hue_distance;
use color_tests::patterns::{SamplePattern, generate_samples, is_chromatic};
use color_tests::reference::{hsl_palette, hsv_palette, lab_palette, xyz_palette};
use color_tests::{ErrorStats, compare_channels, init_tracing};
use oxcolor_core::Rgb;
use oxcolor_core::color::{D65, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_xyz};

const PATTERNS: [SamplePattern; 4] = [
    SamplePattern::Grid(9),
    SamplePattern::Random(0x5eed, 2000),
    SamplePattern::HueRamp(360),
    SamplePattern::GamutBoundary,
];

fn all_samples() -> Vec<Rgb> {
    PATTERNS.iter().flat_map(|&p| generate_samples(p)).collect()
}

fn report(name: &str, stats: &ErrorStats) {
    eprintln!(
        "{:<12} n={:<6} mean={:.3e} p95={:.3e} max={:.3e}",
        name, stats.count, stats.mean, stats.p95, stats.max
    );
}

/// Compare the hue channel on the circle, skipping greys
fn hue_stats(samples: &[Rgb], ours: impl Fn(Rgb) -> f64, theirs: impl Fn(Rgb) -> f64) -> ErrorStats {
    let diffs = samples
        .iter()
        .filter(|rgb| is_chromatic(rgb))
        .map(|&rgb| hue_distance(ours(rgb), theirs(rgb)))
        .collect();
    ErrorStats::from_diffs(diffs)
}

#[test]
fn test_hsl_matches_palette() {
    init_tracing();
    let samples = all_samples();

    let reference: Vec<[f64; 2]> = samples
        .iter()
        .map(|&rgb| {
            let [_, s, l] = hsl_palette(rgb);
            [s, l]
        })
        .collect();
    let result: Vec<[f64; 2]> = samples
        .iter()
        .map(|&rgb| {
            let hsl = rgb_to_hsl(rgb);
            [hsl.s, hsl.l]
        })
        .collect();

    let sl = compare_channels(&reference, &result);
    let hue = hue_stats(&samples, |rgb| rgb_to_hsl(rgb).h, |rgb| hsl_palette(rgb)[0]);
    report("hsl s,l", &sl);
    report("hsl hue", &hue);

    assert!(sl.within(1e-9), "HSL saturation/lightness max error {:.3e}", sl.max);
    assert!(hue.within(1e-9), "HSL hue max error {:.3e}", hue.max);
}

#[test]
fn test_hsv_matches_palette() {
    init_tracing();
    let samples = all_samples();

    let reference: Vec<[f64; 2]> = samples
        .iter()
        .map(|&rgb| {
            let [_, s, v] = hsv_palette(rgb);
            [s, v]
        })
        .collect();
    let result: Vec<[f64; 2]> = samples
        .iter()
        .map(|&rgb| {
            let hsv = rgb_to_hsv(rgb);
            [hsv.s, hsv.v]
        })
        .collect();

    let sv = compare_channels(&reference, &result);
    let hue = hue_stats(&samples, |rgb| rgb_to_hsv(rgb).h, |rgb| hsv_palette(rgb)[0]);
    report("hsv s,v", &sv);
    report("hsv hue", &hue);

    assert!(sv.within(1e-9), "HSV saturation/value max error {:.3e}", sv.max);
    assert!(hue.within(1e-9), "HSV hue max error {:.3e}", hue.max);
}

#[test]
fn test_xyz_matches_palette() {
    init_tracing();
    let samples = all_samples();

    let reference: Vec<[f64; 3]> = samples.iter().map(|&rgb| xyz_palette(rgb)).collect();
    let result: Vec<[f64; 3]> = samples.iter().map(|&rgb| rgb_to_xyz(rgb).to_array()).collect();

    let stats = compare_channels(&reference, &result);
    report("xyz", &stats);

    // palette derives its matrix from the primaries; the published matrix
    // is rounded to 7 digits
    assert!(stats.within(1e-5), "XYZ max error {:.3e}", stats.max);
}

#[test]
fn test_lab_matches_palette() {
    init_tracing();
    let samples = all_samples();

    let reference: Vec<[f64; 3]> = samples.iter().map(|&rgb| lab_palette(rgb)).collect();
    let result: Vec<[f64; 3]> = samples
        .iter()
        .map(|&rgb| rgb_to_lab(rgb, &D65).to_array())
        .collect();

    let stats = compare_channels(&reference, &result);
    report("lab", &stats);

    // The linear toe uses the rounded 7.787 slope rather than 841/108
    assert!(stats.within(5e-3), "Lab max error {:.3e}", stats.max);
}

#[test]
fn test_greys_have_no_saturation() {
    init_tracing();

    for rgb in generate_samples(SamplePattern::Greys(21)) {
        let ours = rgb_to_hsl(rgb);
        let theirs = hsl_palette(rgb);
        assert_eq!(ours.s, 0.0);
        assert!(theirs[1].abs() < 1e-12);
        assert!((ours.l - theirs[2]).abs() < 1e-12);

        let lab = rgb_to_lab(rgb, &D65);
        assert!(lab.a.abs() < 0.01 && lab.b.abs() < 0.01, "grey {:?} -> {:?}", rgb, lab);
    }
}
