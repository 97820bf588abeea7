//! Scene configuration.
//!
//! Every field has a default taken from `constants.rs`, so a JSON document
//! only needs to name what it overrides. `validate` is called by
//! `SceneDirector::new`; a config that fails it never reaches a frame.

use crate::choreographer::CameraConfig;
use crate::constants::{
    DESTINATION_LAT, DESTINATION_LON, DESTINATION_MARKER_WINDOW, DRAG_SENSITIVITY, GLOBE_RADIUS,
    ORIGIN_LAT, ORIGIN_LON, ORIGIN_MARKER_WINDOW,
};
use crate::cues::CueConfig;
use crate::error::ConfigError;
use crate::flight::FlightPathConfig;
use crate::geo::GeoPoint;
use crate::markers::MarkerConfig;
use crate::progress::ProgressWindow;
use crate::stage::StageBounds;
use crate::stars::StarFieldConfig;
use crate::timeline::{default_sections, CityTimelineConfig};
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub globe_radius: f32,
    pub stages: StageBounds,
    pub camera: CameraConfig,
    pub flight: FlightPathConfig,
    pub markers: Vec<MarkerConfig>,
    pub timeline: Vec<CityTimelineConfig>,
    pub cues: CueConfig,
    pub stars: StarFieldConfig,
    /// Fold drag rotation into the camera. Off by default.
    pub manual_rotation: bool,
    pub drag_sensitivity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let origin = GeoPoint::new(ORIGIN_LAT, ORIGIN_LON);
        let destination = GeoPoint::new(DESTINATION_LAT, DESTINATION_LON);
        Self {
            origin,
            destination,
            globe_radius: GLOBE_RADIUS,
            stages: StageBounds::default(),
            camera: CameraConfig::default(),
            flight: FlightPathConfig::default(),
            markers: vec![
                MarkerConfig {
                    label: "Hanoi".to_owned(),
                    location: origin,
                    window: ProgressWindow::from_array(ORIGIN_MARKER_WINDOW),
                },
                MarkerConfig {
                    label: "Melbourne".to_owned(),
                    location: destination,
                    window: ProgressWindow::from_array(DESTINATION_MARKER_WINDOW),
                },
            ],
            timeline: default_sections(),
            cues: CueConfig::default(),
            stars: StarFieldConfig::default(),
            manual_rotation: false,
            drag_sensitivity: DRAG_SENSITIVITY,
        }
    }
}

impl SceneConfig {
    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stages.validate()?;

        for (name, point) in [("origin", self.origin), ("destination", self.destination)] {
            if !point.is_valid() {
                return Err(ConfigError::Anchor {
                    name,
                    latitude: point.latitude,
                    longitude: point.longitude,
                });
            }
        }

        positive("globe_radius", self.globe_radius)?;
        let c = &self.camera;
        for (field, value) in [
            ("camera.start_distance_factor", c.start_distance_factor),
            ("camera.end_distance_factor", c.end_distance_factor),
            ("camera.zoom_in_from", c.zoom_in_from),
            ("camera.zoom_in_to", c.zoom_in_to),
            ("camera.focus_to", c.focus_to),
            ("camera.arrive_to", c.arrive_to),
            ("camera.zoom_base", c.zoom_base),
            ("camera.zoom_focused", c.zoom_focused),
            ("drag_sensitivity", self.drag_sensitivity),
        ] {
            positive(field, value)?;
        }
        unit("camera.smoothing", c.smoothing)?;

        // Lifts are heights above the surface; anything at or below -radius collapses to the centre.
        for (field, value) in [
            ("flight.surface_lift", self.flight.surface_lift),
            ("flight.arc_lift", self.flight.arc_lift),
        ] {
            if !value.is_finite() || self.globe_radius + value <= 0.0 {
                return Err(ConfigError::BelowCentre {
                    field,
                    value,
                    globe_radius: self.globe_radius,
                });
            }
        }
        for (field, count) in [
            ("flight.arc_segments", self.flight.arc_segments),
            ("flight.length_divisions", self.flight.length_divisions),
        ] {
            if count == 0 {
                return Err(ConfigError::ZeroCount { field });
            }
        }

        let stars = &self.stars;
        let radii_ok = stars.radius_min.is_finite()
            && stars.radius_max.is_finite()
            && stars.radius_min > 0.0
            && stars.radius_min <= stars.radius_max;
        if !radii_ok {
            return Err(ConfigError::StarRadii {
                min: stars.radius_min,
                max: stars.radius_max,
            });
        }

        for marker in &self.markers {
            window(&marker.label, marker.window)?;
        }

        let mut seen = FnvHashSet::default();
        for section in &self.timeline {
            window(&section.id, section.window)?;
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

fn window(name: &str, w: ProgressWindow) -> Result<(), ConfigError> {
    if w.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::Window {
            name: name.to_owned(),
            start: w.start,
            end: w.end,
        })
    }
}
