//! Per-frame orchestration.
//!
//! `SceneDirector` owns the immutable pieces built from a `SceneConfig`
//! (anchors, flight curve, marker placement, timeline sections) plus the one
//! piece of frame-to-frame state: the smoothed camera. Each call to `frame`
//! reads progress and rotation and returns a fresh `FrameOutput`.

use crate::choreographer::{CameraTarget, Choreographer};
use crate::config::SceneConfig;
use crate::constants::REFERENCE_FPS;
use crate::cues::PageCues;
use crate::error::ConfigError;
use crate::flight::{FlightCurve, FlightMarker};
use crate::markers::{MarkerLayer, MarkerStates};
use crate::progress::clamp_unit;
use crate::rotation::ManualRotation;
use crate::stage::AnimationStage;
use crate::state::CameraState;
use crate::timeline::{TimelinePanel, TimelineView};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub progress: f32,
    pub rotation: ManualRotation,
    /// Time since the previous frame. `None` advances exactly one reference frame.
    pub elapsed: Option<Duration>,
}

impl FrameInput {
    pub fn at(progress: f32) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub progress: f32,
    pub stage: AnimationStage,
    pub target: CameraTarget,
    pub camera: CameraState,
    pub flight_marker: FlightMarker,
    pub flight_arc_visible: bool,
    pub markers: MarkerStates,
    pub timeline: TimelineView,
    pub cues: PageCues,
}

/// Geometry that never changes after construction; uploaded once by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticGeometry {
    pub globe_radius: f32,
    pub flight_arc: Vec<Vec3>,
    pub markers: Vec<(String, Vec3)>,
    pub stars: Vec<Vec3>,
}

#[derive(Clone, Debug)]
pub struct SceneDirector {
    cfg: SceneConfig,
    choreographer: Choreographer,
    curve: FlightCurve,
    markers: MarkerLayer,
    timeline: TimelinePanel,
    last_stage: Option<AnimationStage>,
}

impl SceneDirector {
    pub fn new(cfg: SceneConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let choreographer = Choreographer::new(
            cfg.origin,
            cfg.destination,
            cfg.globe_radius,
            cfg.stages,
            cfg.camera,
        );
        let curve = FlightCurve::between(cfg.origin, cfg.destination, cfg.globe_radius, &cfg.flight);
        let markers = MarkerLayer::new(&cfg.markers, cfg.globe_radius, cfg.flight.surface_lift);
        let timeline = TimelinePanel::new(cfg.timeline.clone());
        log::info!(
            "[scene] stages={:.2}/{:.2}/{:.2} start_dist={:.2} end_dist={:.2} arc_len={:.3} markers={} sections={}",
            cfg.stages.zoom_end,
            cfg.stages.focus_end,
            cfg.stages.transit_end,
            choreographer.start_distance(),
            choreographer.end_distance(),
            curve.length(),
            markers.len(),
            timeline.sections().len(),
        );
        Ok(Self {
            cfg,
            choreographer,
            curve,
            markers,
            timeline,
            last_stage: None,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn curve(&self) -> &FlightCurve {
        &self.curve
    }

    pub fn timeline(&self) -> &TimelinePanel {
        &self.timeline
    }

    pub fn static_geometry(&self) -> StaticGeometry {
        StaticGeometry {
            globe_radius: self.cfg.globe_radius,
            flight_arc: self.curve.sample(self.cfg.flight.arc_segments),
            markers: self
                .markers
                .positions()
                .map(|(label, p)| (label.to_owned(), p))
                .collect(),
            stars: self.cfg.stars.generate(),
        }
    }

    /// Drag rotation only reaches the camera when the config enables it.
    fn effective_rotation(&self, rotation: ManualRotation) -> ManualRotation {
        if self.cfg.manual_rotation {
            rotation
        } else {
            ManualRotation::ZERO
        }
    }

    pub fn frame(&mut self, input: FrameInput) -> FrameOutput {
        let progress = clamp_unit(input.progress);
        let rotation = self.effective_rotation(input.rotation);
        let target = self.choreographer.target(progress, rotation);

        if self.last_stage != Some(target.stage) {
            log::debug!(
                "[stage] {} -> {} at progress {:.3}",
                self.last_stage.map_or("none", AnimationStage::name),
                target.stage.name(),
                progress
            );
            self.last_stage = Some(target.stage);
        }

        let frames = input
            .elapsed
            .map_or(1.0, |d| d.as_secs_f32() * REFERENCE_FPS);
        let camera = self.choreographer.advance(&target, frames);
        let flight_marker = self.choreographer.flight_marker(&target, &self.curve, &camera);
        let cues: PageCues = self.cfg.cues.evaluate(progress);

        FrameOutput {
            progress,
            stage: target.stage,
            target,
            camera,
            flight_marker,
            flight_arc_visible: cues.flight_arc_visible,
            markers: self.markers.evaluate(progress),
            timeline: self.timeline.evaluate(progress),
            cues,
        }
    }

    /// Evaluate a frame with the camera already at its target, e.g. after a
    /// jump scroll or on first paint.
    pub fn settle(&mut self, input: FrameInput) -> FrameOutput {
        let rotation = self.effective_rotation(input.rotation);
        let target = self.choreographer.target(clamp_unit(input.progress), rotation);
        let _ = self.choreographer.snap(&target);
        self.frame(FrameInput {
            elapsed: Some(Duration::ZERO),
            ..input
        })
    }
}
