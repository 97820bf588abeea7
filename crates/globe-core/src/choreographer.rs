//! Camera choreography: progress → camera target → smoothed camera.
//!
//! Each stage has its own interpolation rule for the camera's direction,
//! radial distance and zoom. Keyframes are chosen so the radial distance is
//! continuous across every stage boundary. The target is a pure function of
//! `(progress, rotation)`; only the smoothed camera position carries state
//! between frames.

use crate::constants::{
    ARRIVE_TO, CAMERA_END_DISTANCE_FACTOR, CAMERA_SMOOTHING, CAMERA_START_DISTANCE_FACTOR,
    FLIGHT_MARKER_VISIBLE_MAX, FOCUS_TO, ZOOM_BASE, ZOOM_FOCUSED, ZOOM_IN_FROM, ZOOM_IN_TO,
};
use crate::flight::{FlightCurve, FlightMarker};
use crate::geo::GeoPoint;
use crate::rotation::ManualRotation;
use crate::stage::{AnimationStage, StageBounds};
use crate::state::CameraState;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Origin camera distance as a multiple of the globe radius.
    pub start_distance_factor: f32,
    /// Destination camera distance as a multiple of the globe radius.
    pub end_distance_factor: f32,
    pub zoom_in_from: f32,
    pub zoom_in_to: f32,
    pub focus_to: f32,
    pub arrive_to: f32,
    pub zoom_base: f32,
    pub zoom_focused: f32,
    /// Fraction of the remaining distance the camera covers per reference frame.
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_distance_factor: CAMERA_START_DISTANCE_FACTOR,
            end_distance_factor: CAMERA_END_DISTANCE_FACTOR,
            zoom_in_from: ZOOM_IN_FROM,
            zoom_in_to: ZOOM_IN_TO,
            focus_to: FOCUS_TO,
            arrive_to: ARRIVE_TO,
            zoom_base: ZOOM_BASE,
            zoom_focused: ZOOM_FOCUSED,
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

/// Where the camera wants to be for a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub stage: AnimationStage,
    /// Progress through the stage window, in [0, 1].
    pub local: f32,
    /// Target before the manual rotation offset.
    pub base: Vec3,
    /// Target with the manual rotation applied; the camera eases towards this.
    pub position: Vec3,
    pub zoom: f32,
}

impl CameraTarget {
    pub fn distance(&self) -> f32 {
        self.base.length()
    }
}

#[derive(Clone, Debug)]
pub struct Choreographer {
    cfg: CameraConfig,
    bounds: StageBounds,
    origin_camera: Vec3,
    destination_camera: Vec3,
    camera: CameraState,
}

impl Choreographer {
    pub fn new(
        origin: GeoPoint,
        destination: GeoPoint,
        globe_radius: f32,
        bounds: StageBounds,
        cfg: CameraConfig,
    ) -> Self {
        let origin_camera = origin.to_vec3(globe_radius * cfg.start_distance_factor);
        let destination_camera = destination.to_vec3(globe_radius * cfg.end_distance_factor);
        let mut choreographer = Self {
            cfg,
            bounds,
            origin_camera,
            destination_camera,
            camera: CameraState::new(origin_camera, cfg.zoom_base),
        };
        // Start where the first frame wants to be rather than easing in from nowhere.
        let first = choreographer.target(0.0, ManualRotation::ZERO);
        choreographer.snap(&first);
        choreographer
    }

    pub fn bounds(&self) -> StageBounds {
        self.bounds
    }

    pub fn start_distance(&self) -> f32 {
        self.origin_camera.length()
    }

    pub fn end_distance(&self) -> f32 {
        self.destination_camera.length()
    }

    pub fn origin_camera(&self) -> Vec3 {
        self.origin_camera
    }

    pub fn destination_camera(&self) -> Vec3 {
        self.destination_camera
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// Camera target for `progress` with `rotation` composited on top.
    pub fn target(&self, progress: f32, rotation: ManualRotation) -> CameraTarget {
        let stage = self.bounds.classify(progress);
        let local = self.bounds.local_progress(stage, progress);
        let start = self.start_distance();
        let end = self.end_distance();
        let c = &self.cfg;

        let (base, zoom) = match stage {
            AnimationStage::ZoomIn => {
                let distance = lerp(start * c.zoom_in_from, start * c.zoom_in_to, local);
                (
                    with_length(self.origin_camera, distance),
                    lerp(c.zoom_base, c.zoom_focused, local),
                )
            }
            AnimationStage::Focus => {
                let distance = lerp(start * c.zoom_in_to, start * c.focus_to, local);
                (with_length(self.origin_camera, distance), c.zoom_focused)
            }
            AnimationStage::Transit => {
                let blended = self.origin_camera.lerp(self.destination_camera, local);
                // Near-antipodal anchors blend through the centre; keep the origin heading.
                let direction = if blended.length_squared() < 1e-6 {
                    self.origin_camera
                } else {
                    blended
                };
                let distance = lerp(start * c.focus_to, end, local);
                (with_length(direction, distance), c.zoom_focused)
            }
            AnimationStage::Arrive => {
                let distance = lerp(end, end * c.arrive_to, local);
                (with_length(self.destination_camera, distance), c.zoom_focused)
            }
        };

        CameraTarget {
            stage,
            local,
            base,
            position: rotation.apply(base),
            zoom,
        }
    }

    /// Ease the camera towards `target`. `frames` is elapsed time in
    /// reference frames; one frame moves `smoothing` of the remaining gap.
    pub fn advance(&mut self, target: &CameraTarget, frames: f32) -> CameraState {
        let alpha = smoothing_alpha(self.cfg.smoothing, frames);
        self.camera = CameraState {
            position: self.camera.position.lerp(target.position, alpha),
            zoom: target.zoom,
            look_at: Vec3::ZERO,
        };
        self.camera
    }

    /// Jump straight to `target`.
    pub fn snap(&mut self, target: &CameraTarget) -> CameraState {
        self.camera = CameraState::new(target.position, target.zoom);
        self.camera
    }

    /// Flight marker for `target`: visible only mid-transit, never at the endpoints.
    pub fn flight_marker(
        &self,
        target: &CameraTarget,
        curve: &FlightCurve,
        camera: &CameraState,
    ) -> FlightMarker {
        if target.stage != AnimationStage::Transit {
            return FlightMarker::hidden();
        }
        let t = target.local;
        FlightMarker {
            position: curve.point_at(t),
            heading: curve.heading_at(t),
            orientation: camera.orientation(),
            t,
            visible: t > 0.0 && t < FLIGHT_MARKER_VISIBLE_MAX,
        }
    }
}

/// Per-call blend factor equivalent to applying `per_frame` `frames` times.
#[inline]
pub fn smoothing_alpha(per_frame: f32, frames: f32) -> f32 {
    let per_frame = per_frame.clamp(0.0, 1.0);
    if frames <= 0.0 || !frames.is_finite() {
        return 0.0;
    }
    if (frames - 1.0).abs() < f32::EPSILON {
        return per_frame;
    }
    1.0 - (1.0 - per_frame).powf(frames)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn with_length(v: Vec3, length: f32) -> Vec3 {
    v.normalize_or_zero() * length
}
