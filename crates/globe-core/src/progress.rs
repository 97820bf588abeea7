//! Scroll position to progress conversion.
//!
//! Progress is the single scalar that drives the whole scene. It is always
//! clamped to [0, 1] before anything else reads it.

use crate::constants::RATIO_EPSILON;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Clamp to [0, 1]; NaN maps to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// `(value - start) / (end - start)` clamped to [0, 1], with the width floored
/// so a zero-width window does not divide by zero.
#[inline]
pub fn window_fraction(value: f32, start: f32, end: f32) -> f32 {
    clamp_unit((value - start) / (end - start).max(RATIO_EPSILON))
}

/// Geometry of the scroll-driven region, sampled on every scroll and resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_y: f32,
    pub region_top: f32,
    pub region_height: f32,
    pub viewport_height: f32,
}

impl ScrollGeometry {
    /// How far the viewport has travelled through the region, in [0, 1].
    ///
    /// The scrollable distance is floored at one pixel so a region shorter
    /// than the viewport still yields a finite value.
    pub fn progress(&self) -> f32 {
        let travel = (self.region_height - self.viewport_height).max(1.0);
        clamp_unit((self.scroll_y - self.region_top) / travel)
    }
}

/// Inclusive `[start, end]` progress window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressWindow {
    pub start: f32,
    pub end: f32,
}

impl ProgressWindow {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub const fn from_array(w: [f32; 2]) -> Self {
        Self::new(w[0], w[1])
    }

    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }

    /// Local progress through the window, clamped to [0, 1].
    #[inline]
    pub fn local(&self, progress: f32) -> f32 {
        window_fraction(progress, self.start, self.end)
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && (0.0..=1.0).contains(&self.start)
            && (0.0..=1.0).contains(&self.end)
            && self.start <= self.end
    }
}

/// Tracks the latest progress computed from scroll geometry.
#[derive(Clone, Debug, Default)]
pub struct ProgressTracker {
    geometry: ScrollGeometry,
    progress: f32,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from fresh geometry. Returns `true` when the value changed.
    pub fn update(&mut self, geometry: ScrollGeometry) -> bool {
        self.geometry = geometry;
        let next = geometry.progress();
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    pub fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

/// Progress scalar shared between the scroll handler (writer) and the frame
/// callback (reader). Stored as raw `f32` bits so reads never tear.
#[derive(Debug, Default)]
pub struct ProgressCell(AtomicU32);

impl ProgressCell {
    pub fn new(progress: f32) -> Self {
        Self(AtomicU32::new(clamp_unit(progress).to_bits()))
    }

    pub fn set(&self, progress: f32) {
        self.0.store(clamp_unit(progress).to_bits(), Ordering::Release);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }
}
