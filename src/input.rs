//! Routes Bevy mouse events to every [`OrbitCam`].
//!
//! Presses only start a gesture when the cursor is over a camera's screen rect; moves and
//! releases are honoured anywhere so drags survive leaving the viewport.

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_input::{
    mouse::{MouseButtonInput, MouseScrollUnit, MouseWheel},
    ButtonState,
};
use bevy_math::DVec2;
use bevy_render::camera::Camera;
use bevy_window::{PrimaryWindow, Window, WindowEvent};

use crate::controller::{
    component::OrbitCam,
    inputs::{InteractionMode, ScreenRect},
    zoom::WheelDeltaMode,
    OrbitCamSystems,
};

/// Feeds mouse input to [`OrbitCam`]s and keeps their screen rects in sync with the viewport.
pub struct OrbitCamInputPlugin;

impl Plugin for OrbitCamInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WindowEvent>()
            .add_systems(
                PreUpdate,
                (
                    sync_screen_rects.in_set(OrbitCamSystems::SyncScreen),
                    route_pointer_input.in_set(OrbitCamSystems::Input),
                ),
            );
    }
}

/// Copy each camera's logical viewport into its [`OrbitCam`]. Controllers without a [`Camera`],
/// or whose camera has no viewport yet, use the primary window.
pub fn sync_screen_rects(
    mut cameras: Query<(&mut OrbitCam, Option<&Camera>)>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let window_rect = windows
        .single()
        .ok()
        .map(|window| ScreenRect::new(0.0, 0.0, window.width() as f64, window.height() as f64));

    for (mut controller, camera) in &mut cameras {
        let rect = camera
            .and_then(Camera::logical_viewport_rect)
            .map(ScreenRect::from)
            .or(window_rect);
        let Some(rect) = rect else {
            continue;
        };
        if rect != controller.screen_rect() {
            controller.handle_resize(rect);
        }
    }
}

/// Apply this frame's cursor, button and wheel events in the order they happened.
///
/// Reads the combined [`WindowEvent`] stream, so presses, moves and releases within one frame
/// reach the drag session in the order the window saw them.
pub fn route_pointer_input(
    mut window_events: EventReader<WindowEvent>,
    mut cursor: Local<Option<DVec2>>,
    mut cameras: Query<&mut OrbitCam>,
) {
    for event in window_events.read() {
        match event {
            WindowEvent::CursorMoved(moved) => {
                let position = moved.position.as_dvec2();
                *cursor = Some(position);
                pointer_moved(&mut cameras, position);
            }
            WindowEvent::MouseButtonInput(input) => button_changed(&mut cameras, *cursor, input),
            WindowEvent::MouseWheel(wheel) => wheel_scrolled(&mut cameras, *cursor, wheel),
            _ => {}
        }
    }
}

fn pointer_moved(cameras: &mut Query<&mut OrbitCam>, position: DVec2) {
    for mut controller in cameras.iter_mut() {
        if controller.interaction_mode() != InteractionMode::None {
            controller.pointer_move(position);
        }
    }
}

fn button_changed(
    cameras: &mut Query<&mut OrbitCam>,
    cursor: Option<DVec2>,
    input: &MouseButtonInput,
) {
    let mode = InteractionMode::from_button(input.button);
    if mode == InteractionMode::None {
        return;
    }
    match input.state {
        ButtonState::Pressed => {
            let Some(position) = cursor else {
                return;
            };
            for mut controller in cameras.iter_mut() {
                if controller.screen_rect().contains(position) {
                    controller.pointer_down(mode, position);
                }
            }
        }
        ButtonState::Released => {
            for mut controller in cameras.iter_mut() {
                if controller.interaction_mode() == mode {
                    controller.pointer_up();
                }
            }
        }
    }
}

fn wheel_scrolled(cameras: &mut Query<&mut OrbitCam>, cursor: Option<DVec2>, wheel: &MouseWheel) {
    let mode = match wheel.unit {
        MouseScrollUnit::Line => WheelDeltaMode::Line,
        MouseScrollUnit::Pixel => WheelDeltaMode::Pixel,
    };
    // Bevy reports scrolling away from the user as positive, the opposite of a DOM deltaY.
    let delta = -(wheel.y as f64);
    for mut controller in cameras.iter_mut() {
        if cursor.is_none_or(|position| controller.screen_rect().contains(position)) {
            controller.wheel(delta, mode);
        }
    }
}
