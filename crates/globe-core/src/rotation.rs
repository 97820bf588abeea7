//! Pointer-drag look-around.
//!
//! The tracker accumulates drag deltas into a pitch/yaw offset that the
//! choreographer composites on top of the automatic camera path. Nothing
//! ever resets or decays the offset on its own.

use crate::constants::DRAG_SENSITIVITY;
use glam::{Quat, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualRotation {
    /// Rotation about X in radians, clamped to [-π/2, π/2].
    pub pitch: f32,
    /// Rotation about Y in radians, unbounded.
    pub yaw: f32,
}

impl ManualRotation {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch: pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            yaw,
        }
    }

    /// Add a delta; yaw accumulates freely, pitch stays within ±π/2.
    pub fn offset_by(self, d_pitch: f32, d_yaw: f32) -> Self {
        Self::new(self.pitch + d_pitch, self.yaw + d_yaw)
    }

    /// Euler YXZ: yaw about Y applied after pitch about X.
    #[inline]
    pub fn quat(self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    #[inline]
    pub fn apply(self, v: Vec3) -> Vec3 {
        if self == Self::ZERO {
            v
        } else {
            self.quat() * v
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct ActiveDrag {
    pointer_id: i32,
    last: Vec2,
}

/// Converts pointer down/move/up into a [`ManualRotation`].
#[derive(Clone, Debug)]
pub struct DragTracker {
    drag: Option<ActiveDrag>,
    rotation: ManualRotation,
    sensitivity: f32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY)
    }
}

impl DragTracker {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            drag: None,
            rotation: ManualRotation::ZERO,
            sensitivity,
        }
    }

    /// Start accumulating from `pos`. A second pointer replaces the first.
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) {
        self.drag = Some(ActiveDrag {
            pointer_id,
            last: pos,
        });
    }

    /// Feed a pointer position. Returns the new rotation while a drag is active.
    pub fn drag_to(&mut self, pos: Vec2) -> Option<ManualRotation> {
        let drag = self.drag.as_mut()?;
        let delta = (pos - drag.last) * self.sensitivity;
        drag.last = pos;
        // Vertical motion pitches, horizontal motion yaws.
        self.rotation = self.rotation.offset_by(delta.y, delta.x);
        Some(self.rotation)
    }

    /// Stop the drag owned by `pointer_id`. Returns whether it was active.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        match self.drag {
            Some(d) if d.pointer_id == pointer_id => {
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    pub fn rotation(&self) -> ManualRotation {
        self.rotation
    }

    pub fn reset(&mut self) {
        self.drag = None;
        self.rotation = ManualRotation::ZERO;
    }
}

/// A pitch/yaw pair packed into one atomic word so the frame callback never
/// observes pitch from one drag event and yaw from another.
#[derive(Debug, Default)]
pub struct SharedRotation(AtomicU64);

impl SharedRotation {
    pub fn new(rotation: ManualRotation) -> Self {
        Self(AtomicU64::new(pack(rotation)))
    }

    pub fn store(&self, rotation: ManualRotation) {
        self.0.store(pack(rotation), Ordering::Release);
    }

    pub fn load(&self) -> ManualRotation {
        unpack(self.0.load(Ordering::Acquire))
    }
}

#[inline]
fn pack(r: ManualRotation) -> u64 {
    ((r.pitch.to_bits() as u64) << 32) | r.yaw.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> ManualRotation {
    ManualRotation {
        pitch: f32::from_bits((bits >> 32) as u32),
        yaw: f32::from_bits(bits as u32),
    }
}
