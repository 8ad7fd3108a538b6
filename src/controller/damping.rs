//! Exponential easing of the current pose toward the target pose.

use super::pose::Pose;

/// Any field further than this from its target keeps the camera easing.
pub const DAMPING_EPSILON: f64 = 1e-6;

/// Outcome of one [`step`] of the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingStep {
    /// The current pose moved a fraction of the way toward the target.
    Easing,
    /// The residual was negligible and the current pose was set to the target exactly.
    Snapped,
    /// Current and target were already identical; nothing changed.
    AtRest,
}

impl DampingStep {
    /// Did this step mutate the current pose?
    pub fn moved(self) -> bool {
        !matches!(self, DampingStep::AtRest)
    }
}

/// Advance `current` toward `target` by `factor` of the remaining distance.
///
/// Angles are compared as-is, not along the shortest arc. Once every field is within
/// [`DAMPING_EPSILON`], `coord.x` and `bearing` of the target are wrapped into `[0, 2π)` and the
/// target is copied into `current`, so no residual error survives.
pub fn step(current: &mut Pose, target: &mut Pose, factor: f64) -> DampingStep {
    let delta_coord = target.coord - current.coord;
    let delta_zoom = target.zoom - current.zoom;
    let delta_bearing = target.bearing - current.bearing;
    let delta_pitch = target.pitch - current.pitch;

    let easing = [
        delta_coord.x,
        delta_coord.y,
        delta_zoom,
        delta_bearing,
        delta_pitch,
    ]
    .iter()
    .any(|delta| delta.abs() > DAMPING_EPSILON);

    if easing {
        current.coord += delta_coord * factor;
        current.zoom += delta_zoom * factor;
        current.bearing += delta_bearing * factor;
        current.pitch += delta_pitch * factor;
        return DampingStep::Easing;
    }

    target.wrap_angles();
    if current == target {
        return DampingStep::AtRest;
    }
    *current = *target;
    DampingStep::Snapped
}
