//! Start/change/end notifications for observers of a controller.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use bevy_reflect::prelude::*;

use super::pose::Pose;

/// What happened to a controller's pose during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum OrbitCamSignal {
    /// The pose started moving after being at rest. Always followed by a [`Self::Change`].
    Start,
    /// The pose changed and the camera was re-placed; a redraw is needed.
    Change,
    /// The pose came to rest. Sent once per motion.
    End,
}

/// Sent for every [`OrbitCamSignal`] produced by an [`OrbitCam`](crate::prelude::OrbitCam)
/// managed by the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
pub struct OrbitCamEvent {
    /// The camera entity the signal belongs to.
    pub camera: Entity,
    /// What happened.
    pub signal: OrbitCamSignal,
}

/// Tracks whether a controller is in motion, to turn per-update outcomes into signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct Notifier {
    moving: bool,
}

impl Notifier {
    /// Is the controller between a [`OrbitCamSignal::Start`] and its [`OrbitCamSignal::End`]?
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Signals for an update that did (`moved`) or did not change the pose.
    pub fn transition(&mut self, moved: bool) -> impl Iterator<Item = OrbitCamSignal> {
        let signals = match (moved, self.moving) {
            (true, false) => [Some(OrbitCamSignal::Start), Some(OrbitCamSignal::Change)],
            (true, true) => [Some(OrbitCamSignal::Change), None],
            (false, true) => [Some(OrbitCamSignal::End), None],
            (false, false) => [None, None],
        };
        self.moving = moved;
        signals.into_iter().flatten()
    }
}

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A listener callback. Receives the signal and the pose after the update.
pub type Listener = Arc<dyn Fn(OrbitCamSignal, &Pose) + Send + Sync>;

/// Multicast registry of listener callbacks, called in registration order.
///
/// Panics inside a listener are not caught and unwind through the update that emitted the
/// signal.
#[derive(Clone, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    /// Register `listener` and return a handle to remove it later.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(OrbitCamSignal, &Pose) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Call every listener with `signal`.
    pub fn emit(&self, signal: OrbitCamSignal, pose: &Pose) {
        for (_, listener) in &self.entries {
            listener(signal, pose);
        }
    }

    /// Remove all listeners.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Are there no listeners?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn motion_lifecycle() {
        use OrbitCamSignal::*;
        let mut notifier = Notifier::default();
        assert_eq!(notifier.transition(false).count(), 0);
        assert_eq!(notifier.transition(true).collect::<Vec<_>>(), [Start, Change]);
        assert_eq!(notifier.transition(true).collect::<Vec<_>>(), [Change]);
        assert_eq!(notifier.transition(false).collect::<Vec<_>>(), [End]);
        assert_eq!(notifier.transition(false).count(), 0);
        assert!(!notifier.is_moving());
    }

    #[test]
    fn listeners_fire_in_order_and_unsubscribe() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::default();

        let first = {
            let log = log.clone();
            listeners.subscribe(move |signal, _| log.lock().unwrap().push((1, signal)))
        };
        {
            let log = log.clone();
            listeners.subscribe(move |signal, _| log.lock().unwrap().push((2, signal)));
        }

        listeners.emit(OrbitCamSignal::Change, &Pose::default());
        assert!(listeners.unsubscribe(first));
        assert!(!listeners.unsubscribe(first));
        listeners.emit(OrbitCamSignal::End, &Pose::default());

        assert_eq!(
            *log.lock().unwrap(),
            [
                (1, OrbitCamSignal::Change),
                (2, OrbitCamSignal::Change),
                (2, OrbitCamSignal::End)
            ]
        );
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    #[should_panic(expected = "listener failed")]
    fn listener_panics_propagate() {
        let mut listeners = Listeners::default();
        listeners.subscribe(|_, _| panic!("listener failed"));
        listeners.emit(OrbitCamSignal::Change, &Pose::default());
    }
}
