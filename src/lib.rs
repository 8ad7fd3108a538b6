//! A damped orbit camera for looking at a sphere, with globe and map navigation styles.
//!
//! The camera is described by an angular position over the sphere, a zoom level, a bearing and a
//! pitch. Input moves a target pose, and every frame the rendered pose eases a fixed fraction of
//! the way toward it until the two agree. The camera
//! [`Transform`](bevy_transform::prelude::Transform) is then placed above the surface, looking at
//! the focus point.
//!
//! ## Getting started
//!
//! Add [`DefaultOrbitCamPlugins`] to your app, then add an
//! [`OrbitCam`](controller::component::OrbitCam) to a camera entity.
//!
//! - Left drag: move over the sphere.
//! - Middle drag: zoom.
//! - Right drag: change bearing and pitch.
//! - Wheel: zoom.
//!
//! Send a [`JumpTo`](controller::jump::JumpTo) event, or call
//! [`OrbitCam::jump_to`](controller::component::OrbitCam::jump_to), to move the camera from code.
//! Changes in motion are reported as [`OrbitCamEvent`](controller::notify::OrbitCamEvent)s and
//! to callbacks registered with
//! [`OrbitCam::subscribe`](controller::component::OrbitCam::subscribe).
//!
//! ## Navigation styles
//!
//! - [`Globe`](controller::projections::GlobePolicy): the camera always looks slightly over the
//!   surface, rotate drags snap to an axis, and zoomed out the view is held north-up.
//! - [`Map`](controller::projections::MapPolicy): at low pitch the camera looks straight down
//!   with a screen-aligned up vector.
//!
//! ## Using the controller without Bevy input
//!
//! The [`OrbitCam`](controller::component::OrbitCam) methods are plain functions of its state.
//! Feed pointer positions and wheel deltas yourself, call `update` once per frame, and read the
//! resulting [`Placement`](controller::projections::Placement).

#![warn(missing_docs)]

use bevy_app::{PluginGroup, PluginGroupBuilder};

pub mod controller;
pub mod extensions;
pub mod input;

/// Common imports.
pub mod prelude {
    pub use crate::{
        controller::{
            component::{
                EnabledMotion, OrbitCam, OrbitCamOptions, Sensitivity, UpdateStatus, EARTH_RADIUS,
            },
            inputs::{InteractionMode, ScreenRect},
            jump::JumpTo,
            notify::{ListenerId, OrbitCamEvent, OrbitCamSignal},
            pose::{PartialPose, Pose},
            projections::{GlobePolicy, MapPolicy, NavigationStyle, Placement},
            zoom::{WheelDeltaMode, ZoomLimits},
            OrbitCamPlugin, OrbitCamSystems,
        },
        input::OrbitCamInputPlugin,
        DefaultOrbitCamPlugins,
    };
}

/// Adds the camera controller, mouse input routing, and any enabled extensions.
pub struct DefaultOrbitCamPlugins;

impl PluginGroup for DefaultOrbitCamPlugins {
    fn build(self) -> PluginGroupBuilder {
        let group = PluginGroupBuilder::start::<Self>()
            .add(controller::OrbitCamPlugin)
            .add(input::OrbitCamInputPlugin);

        #[cfg(feature = "extension_focus_indicator")]
        let group = group.add(extensions::focus_indicator::FocusIndicatorPlugin);

        group
    }
}
