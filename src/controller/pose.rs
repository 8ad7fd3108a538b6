//! The orbital [`Pose`] and the partial updates accepted by [`OrbitCam::jump_to`].
//!
//! [`OrbitCam::jump_to`]: super::component::OrbitCam::jump_to

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use bevy_math::DVec2;
use bevy_reflect::prelude::*;

/// Orbital camera state around a sphere.
///
/// A controller owns two of these: the damped `current` pose that is rendered, and the `target`
/// pose that input is driving toward.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Pose {
    /// Angular position on the sphere, in radians. `x` is the longitude-like azimuth and is
    /// unbounded while easing; `y` is the latitude-like inclination measured from the pole, kept
    /// in `[0, π]`.
    pub coord: DVec2,
    /// Zoom level. Larger values place the camera further from the surface.
    pub zoom: f64,
    /// Rotation of the view about the surface normal, in radians.
    pub bearing: f64,
    /// Tilt away from looking straight down, in degrees.
    pub pitch: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            coord: DVec2::new(0.0, FRAC_PI_2),
            zoom: 10.0,
            bearing: 0.0,
            pitch: 0.0,
        }
    }
}

impl Pose {
    /// Apply the fields present in `update`, leaving the others untouched.
    pub fn apply(&mut self, update: &PartialPose) {
        if let Some(coord) = update.coord {
            self.coord = coord;
        }
        if let Some(zoom) = update.zoom {
            self.zoom = zoom;
        }
        if let Some(bearing) = update.bearing {
            self.bearing = bearing;
        }
        if let Some(pitch) = update.pitch {
            self.pitch = pitch;
        }
    }

    /// Clamp the bounded fields into their domains. `coord.x` and `bearing` are left alone; they
    /// are wrapped when the damping integrator snaps.
    pub fn clamp(&mut self, min_zoom: f64, max_zoom: f64, max_pitch: f64) {
        self.coord.y = clamp_inclination(self.coord.y);
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self.pitch = clamp_pitch(self.pitch, max_pitch);
    }

    /// Wrap the two periodic angles into `[0, 2π)`.
    pub fn wrap_angles(&mut self) {
        self.coord.x = wrap_angle(self.coord.x);
        self.bearing = wrap_angle(self.bearing);
    }
}

/// A pose where every field is optional. Used for jump requests and construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct PartialPose {
    /// New angular position, see [`Pose::coord`].
    pub coord: Option<DVec2>,
    /// New zoom level.
    pub zoom: Option<f64>,
    /// New bearing in radians.
    pub bearing: Option<f64>,
    /// New pitch in degrees.
    pub pitch: Option<f64>,
}

impl PartialPose {
    /// Set the angular position.
    pub fn with_coord(self, x: f64, y: f64) -> Self {
        Self {
            coord: Some(DVec2::new(x, y)),
            ..self
        }
    }

    /// Set the zoom level.
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..self
        }
    }

    /// Set the bearing, in radians.
    pub fn with_bearing(self, bearing: f64) -> Self {
        Self {
            bearing: Some(bearing),
            ..self
        }
    }

    /// Set the pitch, in degrees.
    pub fn with_pitch(self, pitch: f64) -> Self {
        Self {
            pitch: Some(pitch),
            ..self
        }
    }
}

/// Non-negative modulo into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub(crate) fn clamp_inclination(y: f64) -> f64 {
    y.clamp(0.0, PI)
}

pub(crate) fn clamp_pitch(pitch: f64, max_pitch: f64) -> f64 {
    pitch.clamp(0.0, max_pitch.max(0.0))
}
