//! Placement of the camera from a [`Pose`]: the eye vector, the up vector, and the point looked
//! at, for the globe and map navigation styles.
//!
//! Both styles share the same spherical frame. They differ only in how zoom maps to distance,
//! how pitch bends the eye vector, and a handful of input rules, which is what
//! [`ProjectionPolicy`] captures.

use std::f64::consts::FRAC_PI_2;

use bevy_math::{DQuat, DVec3};
use bevy_reflect::prelude::*;

use super::pose::Pose;

/// Inclination is kept this far away from either pole.
pub const POLE_EPSILON: f64 = 1e-6;
/// Inclination step used to find the direction toward the north pole.
pub const NORMAL_EPSILON: f64 = 1e-6;
/// The globe style never uses a pitch below this, in degrees.
pub const PITCH_EPSILON: f64 = 1e-6;
/// At or below this pitch, in degrees, the map style looks straight down.
pub const MAP_FLAT_PITCH: f64 = 0.1;
/// Eye distance at zoom level 1 is `radius / ZOOM_DISTANCE_DIVISOR`.
pub const ZOOM_DISTANCE_DIVISOR: f64 = 30_000.0;

/// Where the host camera should be, and how it should be oriented.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Placement {
    /// Camera position: the focus point plus the eye vector.
    pub position: DVec3,
    /// Normalized up direction.
    pub up: DVec3,
    /// The point on the sphere the camera looks at.
    pub focus: DVec3,
}

impl Placement {
    /// Offset from the focus point to the camera.
    pub fn eye(&self) -> DVec3 {
        self.position - self.focus
    }
}

/// Convert spherical coordinates to cartesian, Y-up. `inclination` is measured from +Y, and an
/// `azimuth` of zero points along +Z.
pub fn spherical_to_cartesian(radius: f64, inclination: f64, azimuth: f64) -> DVec3 {
    let sin_radius = inclination.sin() * radius;
    DVec3::new(
        sin_radius * azimuth.sin(),
        inclination.cos() * radius,
        sin_radius * azimuth.cos(),
    )
}

/// The local frame at the focus point of a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereFrame {
    /// The focus point on the sphere.
    pub origin: DVec3,
    /// Unit vector from the sphere center through `origin`.
    pub radial: DVec3,
    /// Unit tangent at `origin`, pointing north and then rotated about `radial` by
    /// `bearing + π`.
    pub normal: DVec3,
}

impl SphereFrame {
    /// Build the frame for `pose` on a sphere of `radius`.
    pub fn new(radius: f64, pose: &Pose) -> Self {
        let inclination = pose.coord.y.clamp(POLE_EPSILON, std::f64::consts::PI - POLE_EPSILON);
        let azimuth = pose.coord.x;

        let origin = spherical_to_cartesian(radius, inclination, azimuth);
        let radial = origin.normalize();
        let toward_pole = spherical_to_cartesian(radius, inclination - NORMAL_EPSILON, azimuth);
        let north = (toward_pole - origin).normalize();
        let normal = DQuat::from_axis_angle(radial, pose.bearing + std::f64::consts::PI) * north;

        Self {
            origin,
            radial,
            normal,
        }
    }
}

/// Input behavior that differs between navigation styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRules {
    /// Zero the minor axis of small, mostly one-directional rotate drags.
    pub axis_snapping: bool,
    /// While panning, only adjust the axis that moved more, unless both moved a lot.
    pub dominant_axis_pan: bool,
    /// Above this zoom the bearing is forced back to north-up and cannot be panned.
    pub globe_zoom: Option<f64>,
}

/// The formulas that distinguish one navigation style from another.
pub trait ProjectionPolicy {
    /// Style-specific input rules.
    fn input_rules(&self) -> InputRules;

    /// Length of the eye vector for `zoom` on a sphere of `radius`.
    fn zoom_distance(&self, zoom: f64, radius: f64) -> f64;

    /// Offset from the focus point to the camera.
    fn eye_offset(&self, frame: &SphereFrame, pose: &Pose, zoom_distance: f64) -> DVec3;

    /// Normalized up direction for a camera at `frame.origin + eye`.
    fn up_vector(&self, frame: &SphereFrame, pose: &Pose, eye: DVec3) -> DVec3;

    /// Full camera placement for `pose`.
    fn place(&self, radius: f64, pose: &Pose) -> Placement {
        let frame = SphereFrame::new(radius, pose);
        let distance = self.zoom_distance(pose.zoom, radius);
        let eye = self.eye_offset(&frame, pose, distance);
        let up = self.up_vector(&frame, pose, eye);
        Placement {
            position: frame.origin + eye,
            up,
            focus: frame.origin,
        }
    }
}

/// Eye vector tilted `pitch` degrees away from the radial toward `frame.normal`.
fn pitched_eye(frame: &SphereFrame, pitch: f64, zoom_distance: f64) -> DVec3 {
    let radial_weight = (90.0 - pitch).to_radians().tan();
    (frame.radial * radial_weight + frame.normal).normalize() * zoom_distance
}

/// Up direction perpendicular to a pitched eye vector.
fn pitched_up(frame: &SphereFrame, pitch: f64, eye: DVec3) -> DVec3 {
    let scaled = frame.radial * (eye.length() / pitch.to_radians().cos());
    (scaled - eye).try_normalize().unwrap_or(-frame.normal)
}

/// Full-sphere navigation. Zoomed out past [`GlobePolicy::globe_zoom`] the camera returns to
/// north-up and the bearing can no longer be panned.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct GlobePolicy {
    /// Zoom level above which the bearing is held at zero.
    pub globe_zoom: f64,
}

impl Default for GlobePolicy {
    fn default() -> Self {
        Self { globe_zoom: 10.0 }
    }
}

impl ProjectionPolicy for GlobePolicy {
    fn input_rules(&self) -> InputRules {
        InputRules {
            axis_snapping: true,
            dominant_axis_pan: true,
            globe_zoom: Some(self.globe_zoom),
        }
    }

    fn zoom_distance(&self, zoom: f64, radius: f64) -> f64 {
        1.9f64.powf(zoom - 1.0) * radius / ZOOM_DISTANCE_DIVISOR
    }

    fn eye_offset(&self, frame: &SphereFrame, pose: &Pose, zoom_distance: f64) -> DVec3 {
        pitched_eye(frame, pose.pitch.max(PITCH_EPSILON), zoom_distance)
    }

    fn up_vector(&self, frame: &SphereFrame, pose: &Pose, eye: DVec3) -> DVec3 {
        pitched_up(frame, pose.pitch.max(PITCH_EPSILON), eye)
    }
}

/// Top-down biased navigation. Below [`MAP_FLAT_PITCH`] the camera looks straight down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct MapPolicy;

impl ProjectionPolicy for MapPolicy {
    fn input_rules(&self) -> InputRules {
        InputRules {
            axis_snapping: false,
            dominant_axis_pan: false,
            globe_zoom: None,
        }
    }

    fn zoom_distance(&self, zoom: f64, radius: f64) -> f64 {
        2f64.powf(zoom - 1.0) * radius / ZOOM_DISTANCE_DIVISOR
    }

    fn eye_offset(&self, frame: &SphereFrame, pose: &Pose, zoom_distance: f64) -> DVec3 {
        if pose.pitch > MAP_FLAT_PITCH {
            pitched_eye(frame, pose.pitch, zoom_distance)
        } else {
            frame.radial * zoom_distance
        }
    }

    fn up_vector(&self, frame: &SphereFrame, pose: &Pose, eye: DVec3) -> DVec3 {
        if pose.pitch > MAP_FLAT_PITCH {
            pitched_up(frame, pose.pitch, eye)
        } else {
            let angle = FRAC_PI_2 + pose.bearing;
            DVec3::new(angle.cos(), angle.sin(), 0.0)
        }
    }
}

/// Which navigation style a controller uses.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum NavigationStyle {
    /// See [`GlobePolicy`].
    Globe(GlobePolicy),
    /// See [`MapPolicy`].
    Map(MapPolicy),
}

impl Default for NavigationStyle {
    fn default() -> Self {
        Self::Globe(GlobePolicy::default())
    }
}

impl NavigationStyle {
    fn policy(&self) -> &dyn ProjectionPolicy {
        match self {
            NavigationStyle::Globe(globe) => globe,
            NavigationStyle::Map(map) => map,
        }
    }
}

impl ProjectionPolicy for NavigationStyle {
    fn input_rules(&self) -> InputRules {
        self.policy().input_rules()
    }

    fn zoom_distance(&self, zoom: f64, radius: f64) -> f64 {
        self.policy().zoom_distance(zoom, radius)
    }

    fn eye_offset(&self, frame: &SphereFrame, pose: &Pose, zoom_distance: f64) -> DVec3 {
        self.policy().eye_offset(frame, pose, zoom_distance)
    }

    fn up_vector(&self, frame: &SphereFrame, pose: &Pose, eye: DVec3) -> DVec3 {
        self.policy().up_vector(frame, pose, eye)
    }
}

#[cfg(test)]
mod tests {
    use bevy_math::DVec2;

    use super::*;

    const RADIUS: f64 = 6371.0;

    fn pose(pitch: f64, bearing: f64) -> Pose {
        Pose {
            coord: DVec2::new(0.5, 0.8),
            pitch,
            bearing,
            ..Default::default()
        }
    }

    #[test]
    fn spherical_axes() {
        let north = spherical_to_cartesian(1.0, 0.0, 0.0);
        assert!((north - DVec3::Y).length() < 1e-12);
        let front = spherical_to_cartesian(1.0, FRAC_PI_2, 0.0);
        assert!((front - DVec3::Z).length() < 1e-12);
        let right = spherical_to_cartesian(1.0, FRAC_PI_2, FRAC_PI_2);
        assert!((right - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn frame_normal_is_tangent() {
        let frame = SphereFrame::new(RADIUS, &pose(0.0, 1.3));
        assert!(frame.normal.dot(frame.radial).abs() < 1e-6);
        assert!((frame.normal.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn frame_survives_the_pole() {
        let at_pole = Pose {
            coord: DVec2::new(0.0, 0.0),
            ..Default::default()
        };
        let frame = SphereFrame::new(RADIUS, &at_pole);
        assert!(frame.normal.is_finite());
        assert!(frame.origin.is_finite());
    }

    #[test]
    fn globe_camera_sits_outside_the_sphere() {
        let placement = GlobePolicy::default().place(RADIUS, &pose(0.0, 0.0));
        assert!(placement.position.length() > RADIUS);
        assert!((placement.focus.length() - RADIUS).abs() < 1e-6);
        assert!((placement.up.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn globe_eye_tilts_by_pitch() {
        let policy = GlobePolicy::default();
        for pitch in [10.0, 30.0, 60.0] {
            let placement = policy.place(RADIUS, &pose(pitch, 0.4));
            let eye = placement.eye();
            let tilt = eye.angle_between(placement.focus).to_degrees();
            // the north tangent is a finite difference, so allow its chord error
            assert!((tilt - pitch).abs() < 1e-4, "{tilt} vs {pitch}");
            assert!(placement.up.dot(eye.normalize()).abs() < 1e-5);
        }
    }

    #[test]
    fn globe_distance_follows_zoom() {
        let policy = GlobePolicy::default();
        let near = policy.place(RADIUS, &Pose { zoom: 5.0, ..pose(0.0, 0.0) });
        let far = policy.place(RADIUS, &Pose { zoom: 6.0, ..pose(0.0, 0.0) });
        assert!((far.eye().length() / near.eye().length() - 1.9).abs() < 1e-9);
    }

    #[test]
    fn map_looks_straight_down_when_flat() {
        let bearing = 0.7;
        let placement = MapPolicy.place(RADIUS, &pose(0.0, bearing));
        let expected = DVec3::new((FRAC_PI_2 + bearing).cos(), (FRAC_PI_2 + bearing).sin(), 0.0);
        assert!((placement.up - expected).length() < 1e-12);
        let eye = placement.eye().normalize();
        assert!((eye - placement.focus.normalize()).length() < 1e-12);
    }

    #[test]
    fn map_pitches_above_threshold() {
        let placement = MapPolicy.place(RADIUS, &pose(45.0, 0.0));
        let tilt = placement.eye().angle_between(placement.focus).to_degrees();
        assert!((tilt - 45.0).abs() < 1e-4);
        let distance = MapPolicy.zoom_distance(10.0, RADIUS);
        assert!((placement.eye().length() - distance).abs() < 1e-9);
    }

    #[test]
    fn style_delegates_to_policy() {
        let style = NavigationStyle::Map(MapPolicy);
        assert_eq!(style.input_rules(), MapPolicy.input_rules());
        assert_eq!(
            NavigationStyle::default().input_rules().globe_zoom,
            Some(10.0)
        );
    }
}
