//! Per-frame output types shared with the front-ends.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets. The web front-end turns them into
//! camera events for the host renderer and inline styles for the panel.

use glam::{Mat4, Quat, Vec3};

/// Camera transform for one frame. The renderer owns projection parameters
/// (field of view, aspect); `zoom` scales the projection like a lens zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub zoom: f32,
    pub look_at: Vec3,
}

impl CameraState {
    pub fn new(position: Vec3, zoom: f32) -> Self {
        Self {
            position,
            zoom,
            look_at: Vec3::ZERO,
        }
    }

    /// World to view transform (right-handed, Y up).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up())
    }

    /// Camera-to-world rotation; the flight marker copies this to face the viewer.
    pub fn orientation(&self) -> Quat {
        let (_, rotation, _) = self.view_matrix().inverse().to_scale_rotation_translation();
        rotation
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.look_at)
    }

    /// Y up, except when looking straight down the Y axis.
    fn up(&self) -> Vec3 {
        let forward = (self.look_at - self.position).normalize_or_zero();
        if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            Vec3::Y
        }
    }
}
