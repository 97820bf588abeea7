//! Construction-time configuration errors.
//!
//! Nothing in the per-frame path can fail; everything that could go wrong is
//! a malformed configuration and is rejected before the first frame.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("stage bounds must satisfy 0 <= zoom_end < focus_end < transit_end <= 1 (got {zoom_end}, {focus_end}, {transit_end})")]
    StageBounds {
        zoom_end: f32,
        focus_end: f32,
        transit_end: f32,
    },
    #[error("{name} window [{start}, {end}] must lie in [0, 1] with start <= end")]
    Window { name: String, start: f32, end: f32 },
    #[error("{field} must be finite and positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in [0, 1] (got {value})")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("anchor {name} has latitude {latitude} / longitude {longitude} outside [-90, 90] x [-180, 180]")]
    Anchor {
        name: &'static str,
        latitude: f32,
        longitude: f32,
    },
    #[error("{field} = {value} would place geometry at or below the centre of a globe of radius {globe_radius}")]
    BelowCentre {
        field: &'static str,
        value: f32,
        globe_radius: f32,
    },
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("star radii must satisfy 0 < radius_min <= radius_max (got {min}, {max})")]
    StarRadii { min: f32, max: f32 },
    #[error("timeline section id {0:?} is used more than once")]
    DuplicateSection(String),
    #[error("invalid scene config JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
