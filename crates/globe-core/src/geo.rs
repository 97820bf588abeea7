use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A geographic location in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f32,
    pub longitude: f32,
}

impl GeoPoint {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Position of this point on a sphere of the given radius.
    #[inline]
    pub fn to_vec3(self, radius: f32) -> Vec3 {
        lat_lon_to_vec3(self.latitude, self.longitude, radius)
    }

    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Convert latitude/longitude (degrees) to a point on a sphere centred at the origin.
///
/// Y is up. The azimuth is offset by 180° so that longitude 0 faces -X, which
/// matches the equirectangular texture layout the globe is drawn with.
#[inline]
pub fn lat_lon_to_vec3(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        -(radius * sin_phi * cos_theta),
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}
