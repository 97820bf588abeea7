use crate::constants::{
    CLOSING_OVERLAY_AFTER, FLIGHT_ARC_AFTER, HERO_FADE_RATE, HERO_INTERACTIVE_MIN_OPACITY,
    SCROLL_HINT_UNTIL,
};
use serde::{Deserialize, Serialize};

/// Progress thresholds for page elements layered over the globe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    pub hero_fade_rate: f32,
    pub hero_interactive_min_opacity: f32,
    pub closing_overlay_after: f32,
    pub scroll_hint_until: f32,
    pub flight_arc_after: f32,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            hero_fade_rate: HERO_FADE_RATE,
            hero_interactive_min_opacity: HERO_INTERACTIVE_MIN_OPACITY,
            closing_overlay_after: CLOSING_OVERLAY_AFTER,
            scroll_hint_until: SCROLL_HINT_UNTIL,
            flight_arc_after: FLIGHT_ARC_AFTER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageCues {
    pub hero_opacity: f32,
    /// Hero buttons accept pointer events only while the hero is visible enough.
    pub hero_interactive: bool,
    pub closing_overlay_visible: bool,
    pub scroll_hint_visible: bool,
    pub flight_arc_visible: bool,
}

impl CueConfig {
    pub fn evaluate(&self, progress: f32) -> PageCues {
        let hero_opacity = (1.0 - progress * self.hero_fade_rate).max(0.0);
        PageCues {
            hero_opacity,
            hero_interactive: hero_opacity > self.hero_interactive_min_opacity,
            closing_overlay_visible: progress > self.closing_overlay_after,
            scroll_hint_visible: progress <= self.scroll_hint_until,
            flight_arc_visible: progress > self.flight_arc_after,
        }
    }
}
