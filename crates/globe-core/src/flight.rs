//! Flight path between the two anchors.
//!
//! A centripetal Catmull-Rom curve through three control points: both anchors
//! lifted slightly off the surface and a midpoint pushed out to form an arc.
//! The curve is built once; every sampler is a pure function of its argument.

use crate::constants::{
    FLIGHT_ARC_LENGTH_DIVISIONS, FLIGHT_ARC_LIFT, FLIGHT_ARC_SEGMENTS, FLIGHT_HEADING_LOOKBACK,
    FLIGHT_SURFACE_LIFT,
};
use crate::geo::GeoPoint;
use crate::progress::clamp_unit;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightPathConfig {
    /// Height of both endpoints above the globe surface.
    pub surface_lift: f32,
    /// Height of the arc midpoint above the globe surface.
    pub arc_lift: f32,
    /// Segment count for the static dashed arc.
    pub arc_segments: usize,
    /// Divisions of the arc-length lookup table.
    pub length_divisions: usize,
}

impl Default for FlightPathConfig {
    fn default() -> Self {
        Self {
            surface_lift: FLIGHT_SURFACE_LIFT,
            arc_lift: FLIGHT_ARC_LIFT,
            arc_segments: FLIGHT_ARC_SEGMENTS,
            length_divisions: FLIGHT_ARC_LENGTH_DIVISIONS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FlightCurve {
    points: [Vec3; 3],
    /// Cumulative chord lengths at `i / divisions` of the curve parameter.
    lengths: Vec<f32>,
}

impl FlightCurve {
    pub fn between(origin: GeoPoint, destination: GeoPoint, globe_radius: f32, cfg: &FlightPathConfig) -> Self {
        let start = origin.to_vec3(globe_radius + cfg.surface_lift);
        let end = destination.to_vec3(globe_radius + cfg.surface_lift);
        let mid_dir = ((start + end) * 0.5).normalize_or_zero();
        // Antipodal anchors have no midpoint direction; bulge towards +Y instead.
        let mid_dir = if mid_dir == Vec3::ZERO { Vec3::Y } else { mid_dir };
        let mid = mid_dir * (globe_radius + cfg.arc_lift);
        Self::through([start, mid, end], cfg.length_divisions)
    }

    pub fn through(points: [Vec3; 3], length_divisions: usize) -> Self {
        let mut curve = Self {
            points,
            lengths: Vec::new(),
        };
        curve.lengths = curve.build_lengths(length_divisions.max(1));
        curve
    }

    pub fn control_points(&self) -> &[Vec3; 3] {
        &self.points
    }

    pub fn start(&self) -> Vec3 {
        self.points[0]
    }

    pub fn end(&self) -> Vec3 {
        self.points[2]
    }

    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at curve parameter `t` (not arc-length uniform).
    pub fn point(&self, t: f32) -> Vec3 {
        let p = &self.points;
        let l = p.len();
        let scaled = (l - 1) as f32 * clamp_unit(t);
        let mut seg = scaled.floor() as usize;
        let mut weight = scaled - seg as f32;
        if seg >= l - 1 {
            seg = l - 2;
            weight = 1.0;
        }

        let p0 = if seg > 0 { p[seg - 1] } else { p[0] * 2.0 - p[1] };
        let p1 = p[seg];
        let p2 = p[seg + 1];
        let p3 = if seg + 2 < l { p[seg + 2] } else { p[l - 1] * 2.0 - p[l - 2] };

        centripetal_segment(p0, p1, p2, p3).eval(weight)
    }

    /// Point at arc-length fraction `u`.
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// Unit tangent at arc-length fraction `u`.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.u_to_t(u);
        let delta = 1e-4;
        let t1 = (t - delta).max(0.0);
        let t2 = (t + delta).min(1.0);
        (self.point(t2) - self.point(t1)).normalize_or_zero()
    }

    /// Direction of travel just behind `u`, used to orient the moving marker.
    pub fn heading_at(&self, u: f32) -> Vec3 {
        self.tangent_at((u - FLIGHT_HEADING_LOOKBACK).max(0.0))
    }

    /// `segments + 1` evenly spaced (in `t`) points from start to end inclusive.
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(i as f32 / segments as f32))
            .collect()
    }

    fn build_lengths(&self, divisions: usize) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut prev = self.point(0.0);
        let mut sum = 0.0;
        lengths.push(0.0);
        for i in 1..=divisions {
            let cur = self.point(i as f32 / divisions as f32);
            sum += cur.distance(prev);
            lengths.push(sum);
            prev = cur;
        }
        lengths
    }

    /// Map an arc-length fraction onto the curve parameter.
    fn u_to_t(&self, u: f32) -> f32 {
        let lengths = &self.lengths;
        let n = lengths.len();
        let total = self.length();
        if n < 2 || total <= 0.0 {
            return clamp_unit(u);
        }
        let target = clamp_unit(u) * total;

        // Last index whose cumulative length is <= target.
        let i = lengths.partition_point(|&len| len <= target).saturating_sub(1);
        if i >= n - 1 {
            return 1.0;
        }
        let before = lengths[i];
        let span = lengths[i + 1] - before;
        let frac = if span > 0.0 { (target - before) / span } else { 0.0 };
        (i as f32 + frac) / (n - 1) as f32
    }
}

/// Cubic `c0 + c1·w + c2·w² + c3·w³` for one curve segment.
#[derive(Clone, Copy, Debug)]
struct CubicSegment {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicSegment {
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    #[inline]
    fn eval(&self, w: f32) -> Vec3 {
        let w2 = w * w;
        let w3 = w2 * w;
        self.c0 + self.c1 * w + self.c2 * w2 + self.c3 * w3
    }
}

/// Non-uniform Catmull-Rom with knot spacing `|Δp|^0.5` between p1 and p2.
fn centripetal_segment(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> CubicSegment {
    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);

    // Coincident points would collapse a knot interval.
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }

    let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
    CubicSegment::hermite(p1, p2, t1, t2)
}

/// Where the moving flight marker is this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightMarker {
    pub position: Vec3,
    /// Direction of travel along the curve.
    pub heading: Vec3,
    /// Billboard orientation; mirrors the camera.
    pub orientation: glam::Quat,
    /// Arc-length parameter the marker was sampled at.
    pub t: f32,
    pub visible: bool,
}

impl FlightMarker {
    pub fn hidden() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Vec3::ZERO,
            orientation: glam::Quat::IDENTITY,
            t: 0.0,
            visible: false,
        }
    }
}
