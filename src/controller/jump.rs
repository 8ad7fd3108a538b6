//! Event-driven [`OrbitCam::jump_to`].

use bevy_ecs::prelude::*;

use super::{component::OrbitCam, pose::PartialPose};

/// Send this event to move a camera's target pose. The camera eases to it like any other input.
#[derive(Debug, Clone, Copy, PartialEq, Event)]
pub struct JumpTo {
    /// The camera to move.
    pub camera: Entity,
    /// Fields of the target pose to replace.
    pub pose: PartialPose,
}

impl JumpTo {
    /// Apply every pending [`JumpTo`] to its camera. Unknown entities are skipped.
    pub fn receive(mut events: EventReader<Self>, mut cameras: Query<&mut OrbitCam>) {
        for event in events.read() {
            let Ok(mut controller) = cameras.get_mut(event.camera) else {
                continue;
            };
            controller.jump_to(event.pose);
        }
    }
}
