// Host-side tests for coordinate conversion and scroll progress.

use globe_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn lat_lon_lands_on_sphere() {
    for &(lat, lon) in &[(0.0, 0.0), (21.0278, 105.8342), (-37.8136, 144.9631), (89.0, -179.0)] {
        let p = lat_lon_to_vec3(lat, lon, 2.0);
        assert!(approx(p.length(), 2.0), "({lat}, {lon}) -> {p:?}");
    }
}

#[test]
fn lat_lon_axes() {
    // Poles sit on Y
    let north = lat_lon_to_vec3(90.0, 0.0, 1.0);
    assert!(approx(north.y, 1.0));
    let south = lat_lon_to_vec3(-90.0, 0.0, 1.0);
    assert!(approx(south.y, -1.0));

    // Longitude 0 on the equator faces +X
    let zero = lat_lon_to_vec3(0.0, 0.0, 1.0);
    assert!(approx(zero.x, 1.0) && approx(zero.y, 0.0) && approx(zero.z, 0.0));

    // Longitude 90 faces -Z
    let east = lat_lon_to_vec3(0.0, 90.0, 1.0);
    assert!(approx(east.z, -1.0));
}

#[test]
fn geo_point_validity() {
    assert!(GeoPoint::new(21.0, 105.0).is_valid());
    assert!(!GeoPoint::new(91.0, 0.0).is_valid());
    assert!(!GeoPoint::new(0.0, 181.0).is_valid());
    assert!(!GeoPoint::new(f32::NAN, 0.0).is_valid());
}

#[test]
fn clamp_unit_handles_nan_and_range() {
    assert_eq!(clamp_unit(-0.5), 0.0);
    assert_eq!(clamp_unit(1.5), 1.0);
    assert_eq!(clamp_unit(f32::NAN), 0.0);
    assert_eq!(clamp_unit(0.3), 0.3);
}

#[test]
fn scroll_geometry_progress() {
    let mut g = ScrollGeometry {
        scroll_y: 500.0,
        region_top: 0.0,
        region_height: 2000.0,
        viewport_height: 1000.0,
    };
    assert!(approx(g.progress(), 0.5));

    g.scroll_y = -100.0;
    assert_eq!(g.progress(), 0.0);

    g.scroll_y = 5000.0;
    assert_eq!(g.progress(), 1.0);
}

#[test]
fn short_region_stays_finite() {
    // Region shorter than the viewport: travel floored at one pixel
    let g = ScrollGeometry {
        scroll_y: 10.0,
        region_top: 0.0,
        region_height: 400.0,
        viewport_height: 900.0,
    };
    let p = g.progress();
    assert!(p.is_finite());
    assert_eq!(p, 1.0);
}

#[test]
fn tracker_reports_changes() {
    let mut tracker = ProgressTracker::new();
    let g = ScrollGeometry {
        scroll_y: 250.0,
        region_top: 0.0,
        region_height: 2000.0,
        viewport_height: 1000.0,
    };
    assert!(tracker.update(g));
    assert!(!tracker.update(g));
    assert!(approx(tracker.progress(), 0.25));

    // Taller viewport, same scroll offset: less travel, more progress
    assert!(tracker.update(ScrollGeometry {
        viewport_height: 1500.0,
        ..g
    }));
    assert!(approx(tracker.progress(), 0.5));
    assert_eq!(tracker.geometry().scroll_y, 250.0);
}

#[test]
fn progress_window_is_inclusive() {
    let w = ProgressWindow::new(0.05, 0.55);
    assert!(w.contains(0.05));
    assert!(w.contains(0.55));
    assert!(!w.contains(0.04));
    assert!(!w.contains(0.56));
    assert_eq!(w.local(0.0), 0.0);
    assert_eq!(w.local(1.0), 1.0);
    assert!(approx(w.local(0.30), 0.5));
}

#[test]
fn progress_window_validity() {
    assert!(ProgressWindow::new(0.2, 0.2).is_valid());
    assert!(!ProgressWindow::new(0.6, 0.2).is_valid());
    assert!(!ProgressWindow::new(-0.1, 0.2).is_valid());
    assert!(!ProgressWindow::new(0.1, 1.2).is_valid());
}

#[test]
fn zero_width_window_does_not_divide_by_zero() {
    let w = ProgressWindow::new(0.5, 0.5);
    assert_eq!(w.local(0.49), 0.0);
    assert_eq!(w.local(0.51), 1.0);
}

#[test]
fn progress_cell_clamps() {
    let cell = ProgressCell::new(0.4);
    assert_eq!(cell.get(), 0.4);
    cell.set(1.5);
    assert_eq!(cell.get(), 1.0);
    cell.set(f32::NAN);
    assert_eq!(cell.get(), 0.0);
    assert_eq!(ProgressCell::default().get(), 0.0);
}
