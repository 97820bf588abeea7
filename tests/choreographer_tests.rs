// Host-side tests for camera choreography and the flight path.

use glam::Vec3;
use globe_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn default_choreographer() -> Choreographer {
    let cfg = SceneConfig::default();
    Choreographer::new(
        cfg.origin,
        cfg.destination,
        cfg.globe_radius,
        cfg.stages,
        cfg.camera,
    )
}

fn default_curve() -> FlightCurve {
    let cfg = SceneConfig::default();
    FlightCurve::between(cfg.origin, cfg.destination, cfg.globe_radius, &cfg.flight)
}

fn parallel(a: Vec3, b: Vec3) -> bool {
    a.normalize().dot(b.normalize()) > 0.9999
}

#[test]
fn anchor_distances_follow_globe_radius() {
    let c = default_choreographer();
    assert!(approx(c.start_distance(), 7.0));
    assert!(approx(c.end_distance(), 7.6));
}

#[test]
fn starts_snapped_to_first_target() {
    let c = default_choreographer();
    let first = c.target(0.0, ManualRotation::ZERO);
    assert_eq!(c.camera().position, first.position);
    assert!(approx(first.distance(), 7.0 * 1.05));
    assert!(approx(first.zoom, 1.5));
}

#[test]
fn stage_keyframes() {
    let c = default_choreographer();
    let start = c.start_distance();
    let end = c.end_distance();

    let focus = c.target(0.30, ManualRotation::ZERO);
    assert_eq!(focus.stage, AnimationStage::Focus);
    assert!(approx(focus.distance(), start * 0.875));
    assert!(approx(focus.zoom, 2.75));
    assert!(parallel(focus.base, c.origin_camera()));

    let arrive = c.target(1.0, ManualRotation::ZERO);
    assert_eq!(arrive.stage, AnimationStage::Arrive);
    assert!(approx(arrive.distance(), end * 0.9));
    assert!(parallel(arrive.base, c.destination_camera()));
}

#[test]
fn transit_blends_between_anchors() {
    let c = default_choreographer();
    let mid = c.target(0.5, ManualRotation::ZERO);
    assert_eq!(mid.stage, AnimationStage::Transit);
    assert!(approx(mid.local, 0.5));

    let blend = c.origin_camera().lerp(c.destination_camera(), 0.5);
    assert!(parallel(mid.base, blend));
    let expected = c.start_distance() * 0.9 + (c.end_distance() - c.start_distance() * 0.9) * 0.5;
    assert!(approx(mid.distance(), expected));
    assert_eq!(mid.zoom, 2.75);
}

#[test]
fn distance_is_continuous_across_boundaries() {
    let c = default_choreographer();
    let b = c.bounds();
    for boundary in [b.zoom_end, b.focus_end, b.transit_end] {
        let before = c.target(boundary - 1e-4, ManualRotation::ZERO);
        let at = c.target(boundary, ManualRotation::ZERO);
        assert_ne!(before.stage, at.stage);
        assert!(
            (before.distance() - at.distance()).abs() < 0.01,
            "jump at {boundary}: {} vs {}",
            before.distance(),
            at.distance()
        );
        assert!(before.base.distance(at.base) < 0.05, "position jump at {boundary}");
    }
}

#[test]
fn zoom_ramps_then_holds() {
    let c = default_choreographer();
    let mut last = 0.0;
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        let z = c.target(p, ManualRotation::ZERO).zoom;
        assert!(z >= last - 1e-6, "zoom decreased at {p}");
        last = z;
    }
    assert!(approx(last, 2.75));
}

#[test]
fn rotation_offsets_position_but_not_base() {
    let c = default_choreographer();
    let r = ManualRotation::new(0.2, 0.8);
    let t = c.target(0.5, r);
    assert_eq!(t.base, c.target(0.5, ManualRotation::ZERO).base);
    assert!(approx(t.position.length(), t.base.length()));
    assert!(t.position.distance(t.base) > 0.1);
}

#[test]
fn advance_eases_a_tenth_per_frame() {
    let mut c = default_choreographer();
    let from = c.camera().position;
    let target = c.target(1.0, ManualRotation::ZERO);
    let cam = c.advance(&target, 1.0);
    let expected = from + (target.position - from) * 0.1;
    assert!(cam.position.distance(expected) < 1e-4);
    assert_eq!(cam.zoom, target.zoom);
    assert_eq!(cam.look_at, Vec3::ZERO);
}

#[test]
fn advance_converges() {
    let mut c = default_choreographer();
    let target = c.target(1.0, ManualRotation::ZERO);
    for _ in 0..300 {
        c.advance(&target, 1.0);
    }
    assert!(c.camera().position.distance(target.position) < 1e-3);
}

#[test]
fn smoothing_alpha_scales_with_frames() {
    assert_eq!(smoothing_alpha(0.1, 1.0), 0.1);
    assert!((smoothing_alpha(0.1, 2.0) - 0.19).abs() < 1e-5);
    assert_eq!(smoothing_alpha(0.1, 0.0), 0.0);
    assert_eq!(smoothing_alpha(0.1, f32::NAN), 0.0);
    assert_eq!(smoothing_alpha(1.0, 3.0), 1.0);
}

#[test]
fn flight_marker_only_mid_transit() {
    let c = default_choreographer();
    let curve = default_curve();
    let cam = c.camera();

    let before = c.target(0.2, ManualRotation::ZERO);
    assert!(!c.flight_marker(&before, &curve, &cam).visible);

    let start = c.target(0.35, ManualRotation::ZERO);
    assert_eq!(start.stage, AnimationStage::Transit);
    assert!(!c.flight_marker(&start, &curve, &cam).visible);

    let mid = c.target(0.5, ManualRotation::ZERO);
    let marker = c.flight_marker(&mid, &curve, &cam);
    assert!(marker.visible);
    assert!(approx(marker.t, 0.5));
    assert!(marker.position.distance(curve.point_at(0.5)) < 1e-3);
    assert!(approx(marker.heading.length(), 1.0));

    let late = c.target(0.6495, ManualRotation::ZERO);
    assert!(!c.flight_marker(&late, &curve, &cam).visible);

    let after = c.target(0.8, ManualRotation::ZERO);
    assert!(!c.flight_marker(&after, &curve, &cam).visible);
}

#[test]
fn curve_control_points() {
    let curve = default_curve();
    assert!(approx(curve.start().length(), 2.1));
    assert!(approx(curve.end().length(), 2.1));
    assert!(approx(curve.control_points()[1].length(), 3.2));
}

#[test]
fn curve_endpoints_and_samples() {
    let curve = default_curve();
    assert!(curve.point_at(0.0).distance(curve.start()) < 1e-4);
    assert!(curve.point_at(1.0).distance(curve.end()) < 1e-4);
    assert!(curve.point(0.5).distance(curve.control_points()[1]) < 1e-4);

    let arc = curve.sample(256);
    assert_eq!(arc.len(), 257);
    assert!(arc[0].distance(curve.start()) < 1e-4);
    assert!(arc[256].distance(curve.end()) < 1e-4);
}

#[test]
fn curve_sampling_is_pure() {
    let curve = default_curve();
    assert_eq!(curve.point_at(0.3), curve.point_at(0.3));
    assert_eq!(curve.point_at(-1.0), curve.point_at(0.0));
    assert_eq!(curve.point_at(2.0), curve.point_at(1.0));
}

#[test]
fn arc_length_sampling_is_even() {
    let curve = default_curve();
    let points: Vec<Vec3> = (0..=10).map(|i| curve.point_at(i as f32 / 10.0)).collect();
    let steps: Vec<f32> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
    let min = steps.iter().copied().fold(f32::MAX, f32::min);
    let max = steps.iter().copied().fold(0.0, f32::max);
    assert!(max / min < 1.1, "uneven steps {steps:?}");
    assert!((steps.iter().sum::<f32>() - curve.length()).abs() / curve.length() < 0.03);
}

#[test]
fn curve_stays_above_surface() {
    let curve = default_curve();
    for p in curve.sample(64) {
        assert!(p.length() >= 2.0);
    }
}

#[test]
fn antipodal_anchors_still_build_an_arc() {
    let cfg = FlightPathConfig::default();
    let curve = FlightCurve::between(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0), 2.0, &cfg);
    let mid = curve.control_points()[1];
    assert!(approx(mid.length(), 3.2));
    assert!(curve.length().is_finite() && curve.length() > 0.0);
}

#[test]
fn camera_orientation_faces_globe() {
    let cam = CameraState::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
    let forward = cam.orientation() * Vec3::NEG_Z;
    assert!(forward.distance(Vec3::NEG_Z) < 1e-4);
    assert!(approx(cam.distance(), 5.0));

    // Straight down the Y axis still yields a valid basis
    let top = CameraState::new(Vec3::new(0.0, 5.0, 0.0), 1.0);
    let forward = top.orientation() * Vec3::NEG_Z;
    assert!(forward.distance(Vec3::NEG_Y) < 1e-4);
}
