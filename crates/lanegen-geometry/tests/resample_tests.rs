use approx::assert_abs_diff_eq;
use lanegen_core::SamplingConfig;
use lanegen_geometry::{CubicBezier, Curve, CurveSet, Resampler};
use lanegen_math::{DVec3, Point3};

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

/// Straight line of length 3 along +X, starting at `origin`.
fn line_from(origin: Point3) -> CubicBezier {
    CubicBezier::new(
        origin,
        origin + dvec3(1.0, 0.0, 0.0),
        origin + dvec3(2.0, 0.0, 0.0),
        origin + dvec3(3.0, 0.0, 0.0),
    )
}

fn sample_curves() -> Vec<CubicBezier> {
    vec![
        line_from(DVec3::ZERO),
        CubicBezier::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.0, 0.0, 4.0),
            dvec3(2.0, 0.0, 6.0),
            dvec3(2.0, 0.0, 10.0),
        ),
        CubicBezier::new(
            dvec3(-4.0, 1.0, 2.0),
            dvec3(3.0, 7.5, -1.0),
            dvec3(-2.0, -6.0, 3.5),
            dvec3(5.0, 0.5, 0.0),
        ),
        CubicBezier::from_points([dvec3(5.0, 5.0, 5.0); 4]),
    ]
}

#[test]
fn test_endpoint_interpolation() {
    for curve in sample_curves() {
        assert_eq!(curve.evaluate(0.0), curve.start());
        assert_eq!(curve.evaluate(1.0), curve.end());
    }
}

#[test]
fn test_clamping_outside_unit_interval() {
    for curve in sample_curves() {
        for t in [-100.0, -1.0, -0.25, 1.25, 2.0, 100.0] {
            assert_eq!(curve.evaluate(t), curve.evaluate(t.clamp(0.0, 1.0)));
        }
    }
}

#[test]
fn test_curve_trait_matches_inherent_methods() {
    for curve in sample_curves() {
        let dyn_curve: &dyn Curve = &curve;
        assert_eq!(dyn_curve.domain(), (0.0, 1.0));
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(dyn_curve.point_at(t), curve.evaluate(t));
            assert_eq!(dyn_curve.tangent_at(t), curve.derivative(t));
        }
    }
}

#[test]
fn test_two_lines_concatenate_in_order() {
    let set = CurveSet::from_curves(vec![
        line_from(DVec3::ZERO),
        line_from(dvec3(0.0, 5.0, 0.0)),
    ]);

    // 0.98 is crossed every 33 steps of 0.03, three times per line.
    let per_curve: Vec<usize> = set
        .iter()
        .map(|c| c.resample(0.98).unwrap().count())
        .collect();
    assert_eq!(per_curve, vec![3, 3]);

    let points: Vec<_> = set.resample(0.98).unwrap().collect();
    assert_eq!(points.len(), 6);

    assert!(points[..3].iter().all(|p| p.y == 0.0));
    assert!(points[3..].iter().all(|p| p.y == 5.0));
    for chunk in points.chunks(3) {
        assert_abs_diff_eq!(chunk[0].x, 0.99, epsilon = 1e-9);
        assert_abs_diff_eq!(chunk[1].x, 1.98, epsilon = 1e-9);
        assert_abs_diff_eq!(chunk[2].x, 2.97, epsilon = 1e-9);
    }
}

#[test]
fn test_no_continuity_across_curves() {
    // The second line alone would emit the same markers it emits after the first.
    let second = line_from(dvec3(10.0, 0.0, 0.0));
    let alone: Vec<_> = second.resample(1.0).unwrap().collect();

    let set = CurveSet::from_curves(vec![line_from(DVec3::ZERO), second]);
    let all: Vec<_> = set.resample(1.0).unwrap().collect();
    assert!(all.ends_with(&alone));
}

#[test]
fn test_parallel_matches_sequential() {
    let set = CurveSet::offset_lines(sample_curves()[2], 64, 3.0).unwrap();
    let sequential: Vec<_> = set.resample(0.4).unwrap().collect();
    let parallel = set.resample_par(0.4).unwrap();
    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
}

#[test]
fn test_resample_is_deterministic() {
    let set = CurveSet::from_curves(sample_curves());
    let first: Vec<_> = set.resample(0.5).unwrap().collect();
    let second: Vec<_> = set.resample(0.5).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn test_infinite_interval_on_set() {
    let set = CurveSet::from_curves(sample_curves());
    assert_eq!(set.resample(f64::INFINITY).unwrap().count(), 0);
}

#[test]
fn test_markers_lie_on_curve_samples() {
    let curve = sample_curves()[2];
    let config = SamplingConfig::default();
    let resampler = Resampler::with_config(0.3, &config).unwrap();
    let grid: Vec<_> = (0..=config.step_count)
        .map(|i| curve.evaluate(i as f64 / config.step_count as f64))
        .collect();

    for p in resampler.resample(&curve) {
        assert!(grid.contains(&p), "{p:?} is not a step sample");
    }
}

#[test]
fn test_marker_spacing_close_to_interval() {
    let curve = sample_curves()[1];
    let interval = 1.5;
    let points: Vec<_> = curve.resample(interval).unwrap().collect();
    assert!(points.len() >= 3);

    // Chords are never longer than the arc they span, and one step of
    // overshoot is the most the arc can exceed the interval by.
    let max_step = 0.2;
    for pair in points.windows(2) {
        let gap = pair[0].distance(pair[1]);
        assert!(gap <= interval + max_step, "gap {gap} too large");
        assert!(gap > 0.5 * interval, "gap {gap} too small");
    }
}

#[test]
fn test_total_length_of_offset_lines() {
    let set = CurveSet::offset_lines(line_from(DVec3::ZERO), 5, 3.0).unwrap();
    assert_abs_diff_eq!(set.total_length(100).unwrap(), 15.0, epsilon = 1e-9);
}

#[test]
fn test_curve_set_json_is_array_of_curves() {
    let set = CurveSet::from_curves(vec![line_from(DVec3::ZERO)]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(
        json,
        "[[[0.0,0.0,0.0],[1.0,0.0,0.0],[2.0,0.0,0.0],[3.0,0.0,0.0]]]"
    );
    let back: CurveSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}
