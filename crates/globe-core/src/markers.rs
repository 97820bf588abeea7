//! Points of interest pinned to the globe.
//!
//! Visibility is a hard on/off keyed on progress-window membership: outside
//! its window a marker, its label and its halo are not drawn at all.

use crate::constants::{MARKER_EMISSIVE_INTENSITY, MARKER_HALO_OPACITY};
use crate::geo::GeoPoint;
use crate::progress::ProgressWindow;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub label: String,
    pub location: GeoPoint,
    pub window: ProgressWindow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerState {
    pub label: String,
    pub position: Vec3,
    pub visible: bool,
    /// Opacity of the glow halo behind the pin; 0 when hidden.
    pub halo_opacity: f32,
    /// Emissive strength of the pin itself; 0 when hidden.
    pub emissive: f32,
}

pub type MarkerStates = SmallVec<[MarkerState; 4]>;

#[derive(Clone, Debug)]
struct PlacedMarker {
    label: String,
    position: Vec3,
    window: ProgressWindow,
}

#[derive(Clone, Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<PlacedMarker>,
}

impl MarkerLayer {
    /// Place each marker `surface_lift` above a globe of `globe_radius`.
    pub fn new(configs: &[MarkerConfig], globe_radius: f32, surface_lift: f32) -> Self {
        let markers = configs
            .iter()
            .map(|m| PlacedMarker {
                label: m.label.clone(),
                position: m.location.to_vec3(globe_radius + surface_lift),
                window: m.window,
            })
            .collect();
        Self { markers }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = (&str, Vec3)> {
        self.markers.iter().map(|m| (m.label.as_str(), m.position))
    }

    pub fn evaluate(&self, progress: f32) -> MarkerStates {
        self.markers
            .iter()
            .map(|m| {
                let visible = m.window.contains(progress);
                MarkerState {
                    label: m.label.clone(),
                    position: m.position,
                    visible,
                    halo_opacity: if visible { MARKER_HALO_OPACITY } else { 0.0 },
                    emissive: if visible { MARKER_EMISSIVE_INTENSITY } else { 0.0 },
                }
            })
            .collect()
    }
}
