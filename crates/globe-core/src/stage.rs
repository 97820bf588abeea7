use crate::constants::{FOCUS_END, RATIO_EPSILON, TRANSIT_END, ZOOM_END};
use crate::error::ConfigError;
use crate::progress::{clamp_unit, window_fraction};
use serde::{Deserialize, Serialize};

/// The four camera phases, in progress order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationStage {
    /// `[0, zoom_end)`: approach the origin anchor.
    ZoomIn,
    /// `[zoom_end, focus_end)`: hold on the origin anchor.
    Focus,
    /// `[focus_end, transit_end)`: travel along the flight path.
    Transit,
    /// `[transit_end, 1]`: settle on the destination anchor.
    Arrive,
}

impl AnimationStage {
    pub const ALL: [AnimationStage; 4] = [
        AnimationStage::ZoomIn,
        AnimationStage::Focus,
        AnimationStage::Transit,
        AnimationStage::Arrive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimationStage::ZoomIn => "zoom-in",
            AnimationStage::Focus => "focus",
            AnimationStage::Transit => "transit",
            AnimationStage::Arrive => "arrive",
        }
    }
}

/// Stage boundaries `z1 < z2 < z3` in progress units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageBounds {
    pub zoom_end: f32,
    pub focus_end: f32,
    pub transit_end: f32,
}

impl Default for StageBounds {
    fn default() -> Self {
        Self::new_unchecked(ZOOM_END, FOCUS_END, TRANSIT_END)
    }
}

impl StageBounds {
    /// Validated constructor: requires `0 <= zoom_end < focus_end < transit_end <= 1`.
    pub fn new(zoom_end: f32, focus_end: f32, transit_end: f32) -> Result<Self, ConfigError> {
        let bounds = Self::new_unchecked(zoom_end, focus_end, transit_end);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Skips validation. Misordered bounds classify by whichever guard matches first.
    pub const fn new_unchecked(zoom_end: f32, focus_end: f32, transit_end: f32) -> Self {
        Self {
            zoom_end,
            focus_end,
            transit_end,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0.0 <= self.zoom_end
            && self.zoom_end < self.focus_end
            && self.focus_end < self.transit_end
            && self.transit_end <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::StageBounds {
                zoom_end: self.zoom_end,
                focus_end: self.focus_end,
                transit_end: self.transit_end,
            })
        }
    }

    /// Half-open classification, first matching guard wins.
    pub fn classify(&self, progress: f32) -> AnimationStage {
        let p = clamp_unit(progress);
        if p < self.zoom_end {
            AnimationStage::ZoomIn
        } else if self.zoom_end <= p && p < self.focus_end {
            AnimationStage::Focus
        } else if p < self.transit_end {
            AnimationStage::Transit
        } else {
            AnimationStage::Arrive
        }
    }

    /// Progress through `stage`'s own window, clamped to [0, 1].
    pub fn local_progress(&self, stage: AnimationStage, progress: f32) -> f32 {
        let p = clamp_unit(progress);
        match stage {
            AnimationStage::ZoomIn => window_fraction(p, 0.0, self.zoom_end),
            AnimationStage::Focus => window_fraction(p, self.zoom_end, self.focus_end),
            AnimationStage::Transit => window_fraction(p, self.focus_end, self.transit_end),
            AnimationStage::Arrive => {
                clamp_unit((p - self.transit_end) / (1.0 - self.transit_end).max(RATIO_EPSILON))
            }
        }
    }
}
