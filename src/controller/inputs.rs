//! Translation of pointer drags into target pose changes.

use bevy_input::mouse::MouseButton;
use bevy_math::{DVec2, Rect};
use bevy_reflect::prelude::*;

use super::{
    pose::{clamp_inclination, clamp_pitch, Pose},
    projections::InputRules,
    zoom::{ZoomLimits, ZOOM_INPUT_SCALE},
};

/// Rotate drag speed at zoom level 1, before `rotate_speed` is applied.
pub const ROTATE_INPUT_SCALE: f64 = 1e-4;
/// Bearing change per unit of horizontal pan drag.
pub const PAN_BEARING_SCALE: f64 = 24.0;
/// Pitch change, in degrees, per unit of vertical pan drag.
pub const PAN_PITCH_SCALE: f64 = 320.0;

/// What a drag gesture does. Chosen by the button that started the drag, and held until that
/// drag ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum InteractionMode {
    /// No gesture is active.
    #[default]
    None,
    /// Move the focus point over the sphere.
    Rotate,
    /// Change the zoom level.
    Zoom,
    /// Change bearing and pitch.
    Pan,
}

impl InteractionMode {
    /// Left drags rotate, middle drags zoom, right drags pan.
    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => InteractionMode::Rotate,
            MouseButton::Middle => InteractionMode::Zoom,
            MouseButton::Right => InteractionMode::Pan,
            _ => InteractionMode::None,
        }
    }
}

/// Bounding box of the input surface, in the same units as pointer positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width, must be positive for pointer input to be accepted.
    pub width: f64,
    /// Height, must be positive for pointer input to be accepted.
    pub height: f64,
}

impl ScreenRect {
    /// Create a rect from its top left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Is this rect large enough to normalize pointer positions against?
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Map a pointer position into `[0, 1] x [0, 1]` over this rect. Points outside the rect map
    /// outside that range.
    pub fn normalize(&self, position: DVec2) -> Option<DVec2> {
        self.is_valid().then(|| {
            DVec2::new(
                (position.x - self.left) / self.width,
                (position.y - self.top) / self.height,
            )
        })
    }

    /// Does `position` lie within the rect?
    pub fn contains(&self, position: DVec2) -> bool {
        self.normalize(position)
            .is_some_and(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y))
    }
}

impl From<Rect> for ScreenRect {
    fn from(rect: Rect) -> Self {
        let size = rect.size();
        Self::new(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        )
    }
}

/// An active drag gesture: its mode and the last two normalized pointer samples.
///
/// The session lives from button press to button release and keeps tracking the pointer when it
/// leaves the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct DragSession {
    /// The mode picked when the gesture started.
    pub mode: InteractionMode,
    /// The sample before the latest one.
    pub previous: DVec2,
    /// The latest sample.
    pub current: DVec2,
}

impl DragSession {
    /// Start a gesture anchored at `at`.
    pub fn start(mode: InteractionMode, at: DVec2) -> Self {
        Self {
            mode,
            previous: at,
            current: at,
        }
    }

    /// Record a new sample and return the movement since the previous one.
    pub fn advance(&mut self, at: DVec2) -> DVec2 {
        self.previous = self.current;
        self.current = at;
        self.current - self.previous
    }
}

/// Everything besides the poses that a drag needs to know.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragTuning {
    pub rotate_speed: f64,
    pub zoom_speed: f64,
    pub pan_speed: f64,
    pub zoom_limits: ZoomLimits,
    pub max_pitch: f64,
    pub rules: InputRules,
}

/// Zero the minor axis of a drag that is clearly moving along the other one.
pub fn snap_to_axis(mut delta: DVec2) -> DVec2 {
    if delta.y.abs() < 0.01 && delta.x.abs() > 0.02 {
        delta.y = 0.0;
    }
    if delta.x.abs() < 0.01 && delta.y.abs() > 0.02 {
        delta.x = 0.0;
    }
    delta
}

/// Angular offset for a rotate drag. Rotated into the camera's bearing so drags follow the
/// screen, and scaled with zoom so the surface moves with the pointer at any altitude.
pub fn rotate_offset(delta: DVec2, zoom: f64, bearing: f64, rotate_speed: f64) -> DVec2 {
    let speed = 2f64.powf(zoom - 1.0) * rotate_speed * ROTATE_INPUT_SCALE;
    DVec2::from_angle(-bearing).rotate(delta) * speed
}

/// Hold the bearing at north-up once the target zoom passes the globe threshold.
pub(crate) fn north_up_above_globe_zoom(rules: &InputRules, target: &mut Pose) {
    if let Some(globe_zoom) = rules.globe_zoom {
        if target.zoom > globe_zoom {
            target.bearing = 0.0;
        }
    }
}

/// Apply one drag movement. `cursor` is the latest normalized pointer position.
pub(crate) fn apply_drag(
    mode: InteractionMode,
    delta: DVec2,
    cursor: DVec2,
    current: &Pose,
    target: &mut Pose,
    tuning: &DragTuning,
) {
    match mode {
        InteractionMode::None => {}
        InteractionMode::Rotate => {
            let delta = if tuning.rules.axis_snapping {
                snap_to_axis(delta)
            } else {
                delta
            };
            let offset = rotate_offset(delta, current.zoom, current.bearing, tuning.rotate_speed);
            target.coord.x = current.coord.x - offset.x;
            target.coord.y = clamp_inclination(current.coord.y - offset.y);
        }
        InteractionMode::Zoom => {
            target.zoom = tuning
                .zoom_limits
                .clamp(current.zoom + delta.y * tuning.zoom_speed * ZOOM_INPUT_SCALE);
            north_up_above_globe_zoom(&tuning.rules, target);
        }
        InteractionMode::Pan => {
            let (dx, dy) = (delta.x.abs(), delta.y.abs());
            let both_large = dx > 0.05 && dy > 0.05;
            let adjust_both = !tuning.rules.dominant_axis_pan || both_large;

            // Dragging across the lower half turns the other way, so the surface under the
            // pointer keeps following it when looking over the horizon.
            let side = if cursor.y < 0.5 { 1.0 } else { -1.0 };
            match tuning.rules.globe_zoom {
                Some(globe_zoom) if current.zoom >= globe_zoom => target.bearing = 0.0,
                _ => {
                    if adjust_both || dy < dx {
                        target.bearing =
                            current.bearing + side * delta.x * tuning.pan_speed * PAN_BEARING_SCALE;
                    }
                }
            }

            if adjust_both || dx < dy {
                target.pitch = clamp_pitch(
                    current.pitch - delta.y * tuning.pan_speed * PAN_PITCH_SCALE,
                    tuning.max_pitch,
                );
            }
        }
    }
}
