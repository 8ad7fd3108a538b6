//! A `bevy_globe_cam` extension that draws a ring on the surface at the point the camera is
//! looking at while a drag gesture is active, so users can see what they are orbiting.

use bevy_app::prelude::*;
use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_gizmos::prelude::*;
use bevy_math::{Isometry3d, Quat, Vec3};
use bevy_reflect::prelude::*;

use crate::prelude::*;

/// See the [module](self) docs.
pub struct FocusIndicatorPlugin;

impl Plugin for FocusIndicatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, draw_focus)
            .register_type::<FocusIndicator>();
    }
}

/// Optional. Configures whether or not an [`OrbitCam`] should show a focus indicator during
/// drags. The indicator will be enabled if this component is not present.
#[derive(Debug, Component, Reflect)]
pub struct FocusIndicator {
    /// Should the indicator be visible on this camera?
    pub enabled: bool,
}

impl Default for FocusIndicator {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Use gizmos to draw the focus point in world space.
pub fn draw_focus(cameras: Query<(&OrbitCam, Option<&FocusIndicator>)>, mut gizmos: Gizmos) {
    for (controller, _) in cameras
        .iter()
        .filter(|(_, indicator)| indicator.map(|i| i.enabled).unwrap_or(true))
    {
        if controller.interaction_mode() == InteractionMode::None {
            continue;
        }
        let Some(placement) = controller.placement() else {
            continue;
        };
        let focus = placement.focus.as_vec3();
        let Some(normal) = focus.try_normalize() else {
            continue;
        };

        let scale = placement.eye().length() as f32 * 0.02;
        let color = Color::WHITE;
        // Lift the ring off the surface so it doesn't z-fight with it
        let center = focus + normal * scale * 0.1;
        let rotation = Quat::from_rotation_arc(Vec3::Z, normal);

        gizmos.circle(Isometry3d::new(center, rotation), scale, color);
        gizmos.ray(center, normal * scale * 0.5, color);
    }
}
