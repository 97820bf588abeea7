use crate::constants::{STAR_COUNT, STAR_RADIUS_MAX, STAR_RADIUS_MIN, STAR_SEED};
use glam::Vec3;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Background star shell around the globe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub seed: u64,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius_min: STAR_RADIUS_MIN,
            radius_max: STAR_RADIUS_MAX,
            seed: STAR_SEED,
        }
    }
}

impl StarFieldConfig {
    /// Star positions, uniform in direction, radius uniform in `[radius_min, radius_max)`.
    /// The same seed always yields the same field.
    pub fn generate(&self) -> Vec<Vec3> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let span = (self.radius_max - self.radius_min).max(0.0);
        (0..self.count)
            .map(|_| {
                let radius = self.radius_min + rng.gen::<f32>() * span;
                let theta = rng.gen::<f32>() * TAU;
                // acos(2u - 1) keeps the density uniform over the sphere.
                let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            })
            .collect()
    }
}
