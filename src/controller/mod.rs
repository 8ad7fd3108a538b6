//! The orbit camera controller: pose state, damping, input rules and camera placement.

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_window::RequestRedraw;

pub mod component;
pub mod damping;
pub mod inputs;
pub mod jump;
pub mod notify;
pub mod pose;
pub mod projections;
pub mod zoom;

/// Adds [`OrbitCam`](component::OrbitCam) functionality: jump events, damping, placement and
/// change notifications.
pub struct OrbitCamPlugin;

impl Plugin for OrbitCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<notify::OrbitCamEvent>()
            .add_event::<jump::JumpTo>()
            .add_event::<RequestRedraw>()
            .configure_sets(
                PreUpdate,
                (OrbitCamSystems::SyncScreen, OrbitCamSystems::Input, OrbitCamSystems::Update)
                    .chain(),
            )
            .add_systems(
                PreUpdate,
                (
                    jump::JumpTo::receive.in_set(OrbitCamSystems::Input),
                    component::OrbitCam::update_cameras.in_set(OrbitCamSystems::Update),
                ),
            )
            .register_type::<component::OrbitCam>()
            .register_type::<component::OrbitCamOptions>()
            .register_type::<component::Sensitivity>()
            .register_type::<component::EnabledMotion>()
            .register_type::<zoom::ZoomLimits>()
            .register_type::<pose::Pose>()
            .register_type::<projections::NavigationStyle>()
            .register_type::<projections::Placement>()
            .register_type::<inputs::InteractionMode>()
            .register_type::<inputs::ScreenRect>()
            .register_type::<notify::OrbitCamSignal>();
    }
}

/// Ordering of the controller systems within [`PreUpdate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum OrbitCamSystems {
    /// Screen rects are refreshed from cameras and windows.
    SyncScreen,
    /// Pointer input and jumps move target poses.
    Input,
    /// Current poses ease toward their targets and transforms are written.
    Update,
}
